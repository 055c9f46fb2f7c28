use crate::model::{StoreId, UserId};
use crate::validation::ValidationErrors;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::ops::RangeInclusive;

pub const VALUE_RANGE: RangeInclusive<i32> = 1..=5;

/// Type-safe identifier for StoreRatings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RatingId(pub u32);

impl From<u32> for RatingId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for RatingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rating_{}", self.0)
    }
}

/// One user's score for one store.
///
/// # Actor Framework
/// Managed by the rating actor, whose post-write hooks keep
/// [`Store::average_rating`](crate::model::Store::average_rating) in sync.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreRating {
    pub id: RatingId,
    pub value: i32,
    pub user_id: UserId,
    pub store_id: StoreId,
    pub created_at: DateTime<Utc>,
}

impl StoreRating {
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        if !VALUE_RANGE.contains(&self.value) {
            errors.add("value", "must be between 1 and 5");
        }
        errors
    }
}

/// Payload for creating a new rating.
#[derive(Debug, Clone)]
pub struct RatingCreate {
    pub user_id: UserId,
    pub store_id: StoreId,
    pub value: i32,
}

/// Only the score of an existing rating can change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RatingUpdate {
    pub value: Option<i32>,
}

/// Rating scopes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingQuery {
    pub store_id: Option<StoreId>,
    pub user_id: Option<UserId>,
    pub value: Option<i32>,
}

impl RatingQuery {
    pub fn for_store(mut self, store_id: StoreId) -> Self {
        self.store_id = Some(store_id);
        self
    }

    pub fn by_user(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn by_value(mut self, value: i32) -> Self {
        self.value = Some(value);
        self
    }

    pub fn matches(&self, rating: &StoreRating) -> bool {
        self.store_id.is_none_or(|id| rating.store_id == id)
            && self.user_id.is_none_or(|id| rating.user_id == id)
            && self.value.is_none_or(|value| rating.value == value)
    }
}

/// Newest first. Ratings created within the same clock tick fall back to descending ID.
pub fn recent(mut ratings: Vec<StoreRating>) -> Vec<StoreRating> {
    ratings.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
    ratings
}

/// Arithmetic mean of the values, `None` for no ratings.
pub fn average_value<'a>(ratings: impl IntoIterator<Item = &'a StoreRating>) -> Option<f64> {
    let (sum, count) = ratings
        .into_iter()
        .fold((0i64, 0u32), |(sum, count), r| (sum + i64::from(r.value), count + 1));
    (count > 0).then(|| sum as f64 / f64::from(count))
}
