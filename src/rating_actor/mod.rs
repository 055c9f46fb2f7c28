//! # Rating Actor
//!
//! This module implements the StoreRating resource actor, the join between users and stores.
//!
//! ## Overview
//!
//! The rating actor depends on both other actors. It validates references through them and,
//! after every committed create, update or delete, recomputes the store's average rating and
//! writes it to the Store actor before answering the caller. Rating writes are processed one
//! at a time, so the cached average always matches the committed ratings.
//!
//! ```rust,ignore
//! let (rating_actor, ratings) = rating_actor::new(32);
//! tokio::spawn(rating_actor.run((users.clone(), stores.clone())));
//!
//! ratings.create_rating(RatingCreate { user_id, store_id, value: 5 }).await?;
//! assert_eq!(stores.find_store(store_id).await?.average_rating, Some(5.0));
//! ```
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for
//!   [`StoreRating`]
//! - [`error`] - [`RatingError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::RatingClient;
use crate::model::StoreRating;
use actor_framework::ResourceActor;

/// Creates a new StoreRating actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<StoreRating>, RatingClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, RatingClient::new(generic_client))
}
