use crate::clients::{RatingClient, StoreClient, UserClient};
use crate::config::{RatingSettings, Settings};
use crate::model::{RatingQuery, RatingStatistics, Store, StoreId, StoreQuery, User, UserId, UserQuery};
use crate::rating_actor::RatingError;
use crate::store_actor::StoreError;
use crate::user_actor::UserError;
use crate::validation::ValidationErrors;
use crate::{rating_actor, store_actor, user_actor};
use actor_framework::ActorClient;
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;
use tracing::{error, info, instrument};

pub const OWNED_STORE_DEPENDENT: &str =
    "Cannot delete record because a dependent owned store exists";

/// Errors from operations that span several actors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SystemError {
    #[error(transparent)]
    User(#[from] UserError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Rating(#[from] RatingError),
}

/// The runtime orchestrator for the store-rating system.
///
/// `RatingSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the User, Store and Rating actors
/// - **Dependency Wiring**: Stores need users; ratings need users and stores
/// - **Cross-entity Reads**: highly rated stores, rating statistics and associations
/// - **Dependent Deletes**: removing a user or store together with its ratings
///
/// # Example
///
/// ```ignore
/// let system = RatingSystem::new(&Settings::load()?);
///
/// let owner = system.user_client.create_user(owner_params).await?;
/// let store = system.store_client.create_store(store_params).await?;
/// system.rating_client.create_rating(rating_params).await?;
///
/// let stats = system.rating_statistics(store).await?;
/// system.shutdown().await?;
/// ```
pub struct RatingSystem {
    /// Client for interacting with the User actor
    pub user_client: UserClient,

    /// Client for interacting with the Store actor
    pub store_client: StoreClient,

    /// Client for interacting with the Rating actor
    pub rating_client: RatingClient,

    ratings: RatingSettings,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl RatingSystem {
    /// Creates the three actors and starts them with their dependencies injected.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(settings: &Settings) -> Self {
        let buffer = settings.actors.channel_buffer;

        // 1. Create actors (no dependencies)
        let (user_actor, user_client) = user_actor::new(buffer);
        let (store_actor, store_client) = store_actor::new(buffer);
        let (rating_actor, rating_client) = rating_actor::new(buffer);

        // 2. Start actors with injected context
        let user_handle = tokio::spawn(user_actor.run(()));
        let store_handle = tokio::spawn(store_actor.run(user_client.clone()));
        let rating_handle =
            tokio::spawn(rating_actor.run((user_client.clone(), store_client.clone())));

        Self {
            user_client,
            store_client,
            rating_client,
            ratings: settings.ratings.clone(),
            handles: vec![user_handle, store_handle, rating_handle],
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes the channels. The rating actor holds user and store
    /// clients and the store actor holds a user client, so the actors stop in dependency
    /// order: ratings, then stores, then users.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.rating_client);
        drop(self.store_client);
        drop(self.user_client);

        for handle in self.handles.into_iter().rev() {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }

    /// Deletes a user together with their ratings.
    ///
    /// Refused with a base error while the user still owns a store. Each removed rating
    /// updates its store's average.
    ///
    /// Not atomic across actors: a store or rating created for this user while the delete is
    /// in progress survives it and points at a missing user.
    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: UserId) -> Result<(), SystemError> {
        self.user_client.find_user(id).await?;

        if self.store_client.owned_by(id).await?.is_some() {
            let mut errors = ValidationErrors::new();
            errors.add_base(OWNED_STORE_DEPENDENT);
            return Err(UserError::Invalid(errors).into());
        }

        for rating in self.rating_client.by_user(id).await? {
            self.rating_client.delete(rating.id).await?;
        }
        self.user_client.delete(id).await?;
        info!(user_id = %id, "User and ratings deleted");
        Ok(())
    }

    /// Deletes a store after deleting its ratings.
    ///
    /// Not atomic across actors: a rating created after the ratings are listed survives the
    /// store. Deleting it later still works.
    #[instrument(skip(self))]
    pub async fn delete_store(&self, id: StoreId) -> Result<(), SystemError> {
        self.store_client.find_store(id).await?;

        for rating in self.rating_client.for_store(id).await? {
            self.rating_client.delete(rating.id).await?;
        }
        self.store_client.delete(id).await?;
        info!(store_id = %id, "Store and ratings deleted");
        Ok(())
    }

    /// Stores whose ratings average at least the configured threshold, in ID order.
    /// Stores without ratings are never included.
    #[instrument(skip(self))]
    pub async fn highly_rated_stores(&self) -> Result<Vec<Store>, SystemError> {
        let mut totals: BTreeMap<StoreId, (i64, i64)> = BTreeMap::new();
        for rating in self.rating_client.query(RatingQuery::default()).await? {
            let entry = totals.entry(rating.store_id).or_default();
            entry.0 += i64::from(rating.value);
            entry.1 += 1;
        }

        let threshold = self.ratings.highly_rated_threshold;
        let ids: BTreeSet<StoreId> = totals
            .into_iter()
            .filter(|(_, (sum, count))| *sum as f64 / *count as f64 >= threshold)
            .map(|(id, _)| id)
            .collect();
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        Ok(self
            .store_client
            .query(StoreQuery::default().with_ids(ids))
            .await?)
    }

    /// Average, count, value histogram and most recent ratings of one store.
    #[instrument(skip(self))]
    pub async fn rating_statistics(&self, id: StoreId) -> Result<RatingStatistics, SystemError> {
        self.store_client.find_store(id).await?;
        let ratings = self.rating_client.for_store(id).await?;
        Ok(RatingStatistics::from_ratings(ratings, self.ratings.recent_limit))
    }

    /// The store the user owns, if any.
    pub async fn owned_store(&self, user_id: UserId) -> Result<Option<Store>, SystemError> {
        Ok(self.store_client.owned_by(user_id).await?)
    }

    /// Stores the user has rated, in store ID order.
    pub async fn rated_stores(&self, user_id: UserId) -> Result<Vec<Store>, SystemError> {
        let ids: BTreeSet<StoreId> = self
            .rating_client
            .by_user(user_id)
            .await?
            .into_iter()
            .map(|r| r.store_id)
            .collect();
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self
            .store_client
            .query(StoreQuery::default().with_ids(ids))
            .await?)
    }

    /// Users who rated the store, in user ID order.
    pub async fn rating_users(&self, store_id: StoreId) -> Result<Vec<User>, SystemError> {
        let ids: BTreeSet<UserId> = self
            .rating_client
            .for_store(store_id)
            .await?
            .into_iter()
            .map(|r| r.user_id)
            .collect();
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self
            .user_client
            .query(UserQuery::default().with_ids(ids))
            .await?)
    }
}
