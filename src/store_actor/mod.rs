//! # Store Actor
//!
//! This module implements the Store resource actor.
//!
//! ## Overview
//!
//! A store belongs to exactly one existing user (its proprietor), and a proprietor owns at
//! most one store. The actor checks the proprietor through the [`UserClient`] injected as its
//! context, so it depends on the User actor:
//!
//! ```rust,ignore
//! let (user_actor, users) = user_actor::new(32);
//! let (store_actor, stores) = store_actor::new(32);
//!
//! tokio::spawn(user_actor.run(()));
//! tokio::spawn(store_actor.run(users.clone()));
//! ```
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Store`]
//! - [`error`] - [`StoreError`] type for type-safe error handling
//! - [`actions`] - [`StoreAction`] for writing the cached average rating
//! - [`new()`] - Factory function that creates the actor and client

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::StoreClient;
use crate::model::Store;
use actor_framework::ResourceActor;

/// Creates a new Store actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Store>, StoreClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, StoreClient::new(generic_client))
}
