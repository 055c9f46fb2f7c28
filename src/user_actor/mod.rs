//! # User Actor
//!
//! This module implements the User resource actor: registration, profile updates, password
//! digests and auth tokens.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`User`]
//! - [`error`] - [`UserError`] type for type-safe error handling
//! - [`actions`] - [`UserAction`] and [`UserActionResult`] for tokens and authentication
//! - [`password`] - Argon2 digests and token generation
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use store_ratings::user_actor;
//! use store_ratings::model::UserCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = user_actor::new(32);
//!
//!     // No dependencies, so the context is ()
//!     tokio::spawn(actor.run(()));
//!
//!     let params = UserCreate {
//!         name: "Alice Shopper Number 1".to_string(),
//!         email: "alice@example.com".to_string(),
//!         address: "12 Main St, Springfield".to_string(),
//!         ..Default::default()
//!     };
//!     let id = client.create_user(params).await?;
//!     let token = client.regenerate_auth_token(id).await?;
//!     assert_eq!(token.len(), 24);
//!     Ok(())
//! }
//! ```
//!
//! ## Key Features
//!
//! - **No dependencies**: Context = ()
//! - **Validation**: name, email, address and password rules; case-insensitive email uniqueness
//! - **Secrets**: passwords are only kept as digests and are filtered from debug logs

pub mod actions;
pub mod entity;
pub mod error;
pub mod password;

pub use actions::*;
pub use error::*;

use crate::clients::UserClient;
use crate::model::User;
use actor_framework::ResourceActor;

/// Creates a new User actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, UserClient::new(generic_client))
}
