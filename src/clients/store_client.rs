//! # Store Client
//!
//! Provides a high‑level API for interacting with the `Store` actor.
use crate::model::{Store, StoreCreate, StoreId, StoreQuery, StoreUpdate, UserId};
use crate::store_actor::{StoreAction, StoreError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Store actor.
#[derive(Clone)]
pub struct StoreClient {
    inner: ResourceClient<Store>,
}

impl StoreClient {
    pub fn new(inner: ResourceClient<Store>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Store> for StoreClient {
    type Error = StoreError;

    fn inner(&self) -> &ResourceClient<Store> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<StoreError>() {
            Ok(store_error) => store_error,
            Err(FrameworkError::NotFound(id)) => StoreError::NotFound(id),
            Err(other) => StoreError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl StoreClient {
    #[instrument(skip(self))]
    pub async fn create_store(&self, params: StoreCreate) -> Result<StoreId, StoreError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_store(&self, id: StoreId, update: StoreUpdate) -> Result<Store, StoreError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Like `get`, but a missing store is an error.
    pub async fn find_store(&self, id: StoreId) -> Result<Store, StoreError> {
        self.get(id)
            .await?
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Overwrites the cached average rating without validating the store.
    #[instrument(skip(self))]
    pub async fn set_average_rating(&self, id: StoreId, average: Option<f64>) -> Result<(), StoreError> {
        debug!("Setting average rating for {}", id);
        self.inner
            .perform_action(id, StoreAction::SetAverageRating(average))
            .await
            .map_err(Self::map_error)
    }

    pub async fn search_by_location(&self, query: &str) -> Result<Vec<Store>, StoreError> {
        self.query(StoreQuery::default().search_by_location(query)).await
    }

    /// The store owned by `proprietor_id`, if any.
    pub async fn owned_by(&self, proprietor_id: UserId) -> Result<Option<Store>, StoreError> {
        let owned = self.query(StoreQuery::default().owned_by(proprietor_id)).await?;
        Ok(owned.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::{create_mock_client, expect_action, MockClient};

    #[tokio::test]
    async fn test_set_average_rating_sends_action() {
        let (client, mut receiver) = create_mock_client::<Store>(10);
        let store_client = StoreClient::new(client);

        let task =
            tokio::spawn(async move { store_client.set_average_rating(StoreId(3), Some(4.0)).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, StoreId(3));
        assert_eq!(action, StoreAction::SetAverageRating(Some(4.0)));
        responder.send(Ok(())).unwrap();

        assert!(task.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn test_missing_store_maps_to_not_found() {
        let mut mock = MockClient::<Store>::new();
        mock.expect_action(StoreId(7))
            .return_err(FrameworkError::NotFound("store_7".to_string()));
        mock.expect_query().return_ok(Vec::new());

        let client = StoreClient::new(mock.client());
        assert_eq!(
            client.set_average_rating(StoreId(7), None).await,
            Err(StoreError::NotFound("store_7".to_string()))
        );
        assert_eq!(client.owned_by(UserId(1)).await, Ok(None));

        mock.verify();
    }

    #[tokio::test]
    async fn test_closed_actor_is_a_communication_error() {
        let (client, receiver) = create_mock_client::<Store>(10);
        drop(receiver);

        let err = StoreClient::new(client).find_store(StoreId(1)).await.unwrap_err();
        assert!(matches!(err, StoreError::ActorCommunicationError(msg) if msg == "Actor closed"));
    }
}
