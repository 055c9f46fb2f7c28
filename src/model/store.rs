use crate::model::{contains_ignore_case, UserId};
use crate::validation::{rules, NameValidatable, ValidationErrors};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::Display;

/// Type-safe identifier for Stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StoreId(pub u32);

impl From<u32> for StoreId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for StoreId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "store_{}", self.0)
    }
}

/// Represents a rated business.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for Store`](#impl-ActorEntity-for-Store) for details on:
/// - Creation parameters ([`StoreCreate`])
/// - Update parameters ([`StoreUpdate`])
/// - Custom actions ([`StoreAction`](crate::store_actor::StoreAction))
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Store {
    pub id: StoreId,
    pub name: String,
    pub email: String,
    pub address: String,
    pub proprietor_id: UserId,
    /// Mean of the store's rating values, `None` while it has none.
    /// Written by the rating actor after every rating change.
    pub average_rating: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl NameValidatable for Store {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Store {
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        self.validate_name(&mut errors);
        rules::validate_email(&self.email, &mut errors);
        rules::validate_address(&self.address, false, &mut errors);
        errors
    }
}

/// Payload for creating a new store.
#[derive(Debug, Clone)]
pub struct StoreCreate {
    pub name: String,
    pub email: String,
    pub address: String,
    pub proprietor_id: UserId,
}

// DTOs for Store updates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub proprietor_id: Option<UserId>,
}

/// Store scopes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreQuery {
    pub location_contains: Option<String>,
    pub proprietor_id: Option<UserId>,
    pub ids: Option<BTreeSet<StoreId>>,
}

impl StoreQuery {
    /// Case-insensitive substring match on the address.
    pub fn search_by_location(mut self, query: impl Into<String>) -> Self {
        self.location_contains = Some(query.into());
        self
    }

    pub fn owned_by(mut self, proprietor_id: UserId) -> Self {
        self.proprietor_id = Some(proprietor_id);
        self
    }

    pub fn with_ids(mut self, ids: impl IntoIterator<Item = StoreId>) -> Self {
        self.ids = Some(ids.into_iter().collect());
        self
    }

    pub fn matches(&self, store: &Store) -> bool {
        self.location_contains
            .as_deref()
            .is_none_or(|q| contains_ignore_case(&store.address, q))
            && self.proprietor_id.is_none_or(|id| store.proprietor_id == id)
            && self.ids.as_ref().is_none_or(|ids| ids.contains(&store.id))
    }
}
