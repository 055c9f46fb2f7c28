//! # Rating Client
//!
//! Provides a high‑level API for interacting with the `StoreRating` actor.
use crate::model::rating;
use crate::model::{RatingCreate, RatingId, RatingQuery, RatingUpdate, StoreId, StoreRating, UserId};
use crate::rating_actor::RatingError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the StoreRating actor.
///
/// Creating, updating or deleting a rating only returns once the store's average rating has
/// been updated.
#[derive(Clone)]
pub struct RatingClient {
    inner: ResourceClient<StoreRating>,
}

impl RatingClient {
    pub fn new(inner: ResourceClient<StoreRating>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<StoreRating> for RatingClient {
    type Error = RatingError;

    fn inner(&self) -> &ResourceClient<StoreRating> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<RatingError>() {
            Ok(rating_error) => rating_error,
            Err(FrameworkError::NotFound(id)) => RatingError::NotFound(id),
            Err(other) => RatingError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl RatingClient {
    #[instrument(skip(self))]
    pub async fn create_rating(&self, params: RatingCreate) -> Result<RatingId, RatingError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_rating(
        &self,
        id: RatingId,
        update: RatingUpdate,
    ) -> Result<StoreRating, RatingError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Ratings matching `query`, newest first.
    pub async fn recent(&self, query: RatingQuery) -> Result<Vec<StoreRating>, RatingError> {
        Ok(rating::recent(self.query(query).await?))
    }

    pub async fn by_value(&self, value: i32) -> Result<Vec<StoreRating>, RatingError> {
        self.query(RatingQuery::default().by_value(value)).await
    }

    pub async fn for_store(&self, store_id: StoreId) -> Result<Vec<StoreRating>, RatingError> {
        self.query(RatingQuery::default().for_store(store_id)).await
    }

    pub async fn by_user(&self, user_id: UserId) -> Result<Vec<StoreRating>, RatingError> {
        self.query(RatingQuery::default().by_user(user_id)).await
    }
}
