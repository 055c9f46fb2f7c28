//! # Actor Framework
//!
//! Building blocks for owning records in actors: each record type gets one
//! [`ResourceActor`] task that serializes every create, read, update, delete, action and
//! query against its records, plus cheap cloneable [`ResourceClient`] handles for talking to
//! it.
//!
//! ## Persistence Lifecycle
//!
//! A record type implements [`ActorEntity`] and describes its lifecycle through hooks:
//! construction and field validation, asynchronous checks against other actors, uniqueness
//! constraints against the actor's own records, and post-write callbacks. A callback that
//! fails rolls the write back, so a write and its side effects commit together or not at all.
//! Failed validations come back to the caller as the entity's own error type, boxed in
//! [`FrameworkError::EntityError`].
//!
//! ## Quick Start
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Shelf {
//!     id: u32,
//!     label: String,
//! }
//!
//! #[derive(Debug)] struct ShelfCreate { label: String }
//! #[derive(Debug)] struct Relabel(String);
//! #[derive(Debug)] struct LabelContains(&'static str);
//!
//! #[derive(Debug, thiserror::Error)]
//! enum ShelfError {
//!     #[error("label can't be blank")]
//!     BlankLabel,
//!     #[error("label has already been taken")]
//!     Taken,
//! }
//!
//! #[async_trait]
//! impl ActorEntity for Shelf {
//!     type Id = u32;
//!     type Create = ShelfCreate;
//!     type Update = Relabel;
//!     type Action = ();
//!     type ActionResult = ();
//!     type Query = LabelContains;
//!     type Context = ();
//!     type Error = ShelfError;
//!
//!     fn from_create_params(id: u32, params: ShelfCreate) -> Result<Self, ShelfError> {
//!         if params.label.trim().is_empty() {
//!             return Err(ShelfError::BlankLabel);
//!         }
//!         Ok(Self { id, label: params.label })
//!     }
//!
//!     async fn on_update(&mut self, update: Relabel, _: &()) -> Result<(), ShelfError> {
//!         self.label = update.0;
//!         Ok(())
//!     }
//!
//!     fn check_unique(&self, others: &[&Self]) -> Result<(), ShelfError> {
//!         match others.iter().any(|other| other.label == self.label) {
//!             true => Err(ShelfError::Taken),
//!             false => Ok(()),
//!         }
//!     }
//!
//!     async fn handle_action(&mut self, _: (), _: &()) -> Result<(), ShelfError> {
//!         Ok(())
//!     }
//!
//!     fn matches(&self, query: &LabelContains) -> bool {
//!         self.label.contains(query.0)
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Shelf>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let first = client.create(ShelfCreate { label: "coffee".into() }).await.unwrap();
//!     let second = client.create(ShelfCreate { label: "tea".into() }).await.unwrap();
//!
//!     // Uniqueness is checked against the other records; the failed update leaves "tea" in place.
//!     assert!(client.update(second, Relabel("coffee".into())).await.is_err());
//!     assert_eq!(client.get(second).await.unwrap().unwrap().label, "tea");
//!
//!     let hits = client.query(LabelContains("off")).await.unwrap();
//!     assert_eq!(hits.len(), 1);
//!     assert_eq!(hits[0].id, first);
//! }
//! ```
//!
//! ## Context Injection
//!
//! Dependencies are injected when an actor is **run**, not when it is constructed, so actors
//! can be created first and wired afterwards:
//!
//! ```rust,ignore
//! let (user_actor, users) = ResourceActor::<User>::new(32);
//! let (store_actor, stores) = ResourceActor::<Store>::new(32);
//!
//! tokio::spawn(user_actor.run(()));
//! tokio::spawn(store_actor.run(UserClient::new(users.clone())));
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task and processes requests one at a time.
//! - Different actors run in parallel.
//! - Hooks may await other actors; keep the dependency graph acyclic so that dropping the
//!   clients shuts every actor down.
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers requests from scripted expectations so hooks and client
//! wrappers can be tested without their dependencies running.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::{ActorEntity, Records};
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
