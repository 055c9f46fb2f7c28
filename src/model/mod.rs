//! Pure data structures (DTOs) implementing the [`ActorEntity`](actor_framework::ActorEntity) trait.

pub mod rating;
pub mod statistics;
pub mod store;
pub mod user;

pub use rating::*;
pub use statistics::*;
pub use store::*;
pub use user::*;

/// Case-insensitive substring match backing the `search_by_*` scopes.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
