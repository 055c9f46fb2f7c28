//! # Store Ratings
//!
//! > **Users, stores and ratings as resource-oriented actors.**
//!
//! Users register and own at most one store; users rate stores from 1 to 5; each store keeps
//! a cached average of its ratings. Every record type is owned by a
//! [`ResourceActor`](actor_framework::ResourceActor) that validates and writes requests one
//! at a time.
//!
//! ## Architecture Notes
//!
//! ### 1. Validation
//! Rules are collected, not fail-fast: a rejected write returns every problem with the record
//! as a [`ValidationErrors`](validation::ValidationErrors) inside the actor's error type
//! (`UserError::Invalid`, `StoreError::Invalid`, `RatingError::Invalid`). Field rules and
//! reference checks run first, uniqueness rules against the other records after them.
//!
//! ### 2. Callbacks
//! A rating create, update or delete recomputes the store's average before the caller gets an
//! answer. If the store cannot be updated the rating change is rolled back.
//!
//! ### 3. Async Context Injection
//! Dependencies are injected at runtime via `run(context)`: stores get a
//! [`UserClient`](clients::UserClient), ratings get user and store clients.
//!
//! ### 4. Observability
//! `tracing` everywhere, with the `entity_type` field on every actor log line.
//!
//! ## Module Tour
//!
//! ### 1. The Rules ([`validation`])
//! - **Key items**: [`NameValidatable`](validation::NameValidatable),
//!   [`ValidationErrors`](validation::ValidationErrors), the email/address/password rules.
//!
//! ### 2. The Data ([`model`])
//! - **Key items**: [`User`](model::User), [`Store`](model::Store),
//!   [`StoreRating`](model::StoreRating), the query types and
//!   [`RatingStatistics`](model::RatingStatistics).
//!
//! ### 3. The Implementation ([`user_actor`], [`store_actor`], [`rating_actor`])
//! - **Role**: Concrete implementations of the `ActorEntity` trait.
//!
//! ### 4. The Interface ([`clients`])
//! - **Key items**: [`UserClient`](clients::UserClient), [`StoreClient`](clients::StoreClient),
//!   [`RatingClient`](clients::RatingClient).
//!
//! ### 5. The Orchestrator ([`lifecycle`]) and [`config`]
//! - **Key items**: [`RatingSystem`](lifecycle::RatingSystem), [`Settings`](config::Settings).
//!
//! ## Quick Start
//!
//! ```rust
//! use store_ratings::config::Settings;
//! use store_ratings::lifecycle::RatingSystem;
//! use store_ratings::model::{RatingCreate, StoreCreate, UserCreate};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let system = RatingSystem::new(&Settings::default());
//!
//!     let owner = system.user_client.create_user(UserCreate {
//!         name: "Olive Owner Number 1".into(),
//!         email: "olive@example.com".into(),
//!         address: "1 Main St, Springfield".into(),
//!         ..Default::default()
//!     }).await?;
//!     let rater = system.user_client.create_user(UserCreate {
//!         name: "Rita Rater Number 22".into(),
//!         email: "rita@example.com".into(),
//!         address: "2 Main St, Springfield".into(),
//!         ..Default::default()
//!     }).await?;
//!     let store = system.store_client.create_store(StoreCreate {
//!         name: "Corner Bakery No 123".into(),
//!         email: "bakery@example.com".into(),
//!         address: "3 Main St, Springfield".into(),
//!         proprietor_id: owner,
//!     }).await?;
//!
//!     system.rating_client.create_rating(RatingCreate { user_id: rater, store_id: store, value: 5 }).await?;
//!     assert_eq!(system.store_client.find_store(store).await?.average_rating, Some(5.0));
//!
//!     system.shutdown().await?;
//!     Ok(())
//! }
//! ```
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod rating_actor;
pub mod store_actor;
pub mod user_actor;
pub mod validation;
