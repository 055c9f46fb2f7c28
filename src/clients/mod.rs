//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).
//!
//! Each wrapper implements [`ActorClient`](actor_framework::ActorClient) for `get`, `delete`
//! and `query`, and adds the resource's own operations and scopes. Entity errors coming back
//! from an actor are recovered as the resource's error type, so validation failures keep their
//! field errors.

pub mod rating_client;
pub mod store_client;
pub mod user_client;

pub use rating_client::*;
pub use store_client::*;
pub use user_client::*;
