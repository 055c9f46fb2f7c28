//! [`ActorEntity`] implementation for [`StoreRating`].
//!
//! Validation awaits the User and Store actors (both referenced records must exist, and the
//! rater must not be the store's proprietor). The post-write hooks recompute the store's
//! average from the committed ratings and write it through [`StoreClient::set_average_rating`];
//! if that fails the rating change is rolled back. Deleting a rating whose store no longer
//! exists skips the write.

use super::RatingError;
use crate::clients::{StoreClient, UserClient};
use crate::model::rating::average_value;
use crate::model::{RatingCreate, RatingId, RatingQuery, RatingUpdate, StoreRating};
use crate::store_actor::StoreError;
use crate::validation::ValidationErrors;
use actor_framework::{ActorClient, ActorEntity, Records};
use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, warn};

pub const REFERENCE_MISSING: &str = "must exist";
pub const ALREADY_RATED: &str = "has already rated this store";
pub const OWN_STORE: &str = "Store owners cannot rate their own stores";

fn communication(e: impl std::fmt::Display) -> RatingError {
    RatingError::ActorCommunicationError(e.to_string())
}

impl StoreRating {
    async fn validate_with(&self, (users, stores): &(UserClient, StoreClient)) -> Result<(), RatingError> {
        let mut errors = self.validate();

        if users.get(self.user_id).await.map_err(communication)?.is_none() {
            errors.add("user", REFERENCE_MISSING);
        }
        match stores.get(self.store_id).await.map_err(communication)? {
            None => errors.add("store", REFERENCE_MISSING),
            Some(store) if store.proprietor_id == self.user_id => errors.add_base(OWN_STORE),
            Some(_) => {}
        }

        errors.into_result().map_err(RatingError::Invalid)
    }

    /// Writes the mean of the store's committed ratings to the store.
    async fn sync_store_average(
        &self,
        records: &Records<Self>,
        stores: &StoreClient,
    ) -> Result<(), RatingError> {
        let average = average_value(records.values().filter(|r| r.store_id == self.store_id));
        debug!(store_id = %self.store_id, ?average, "Recomputed average rating");
        stores
            .set_average_rating(self.store_id, average)
            .await
            .map_err(RatingError::AverageRating)
    }

    /// Like [`Self::sync_store_average`], but a store that is already gone has no average
    /// left to keep, so its orphaned ratings can still be removed.
    async fn sync_after_removal(
        &self,
        records: &Records<Self>,
        stores: &StoreClient,
    ) -> Result<(), RatingError> {
        match self.sync_store_average(records, stores).await {
            Err(RatingError::AverageRating(StoreError::NotFound(_))) => {
                warn!(store_id = %self.store_id, "Removed rating of a deleted store");
                Ok(())
            }
            other => other,
        }
    }
}

#[async_trait]
impl ActorEntity for StoreRating {
    type Id = RatingId;
    type Create = RatingCreate;
    type Update = RatingUpdate;
    type Action = ();
    type ActionResult = ();
    type Query = RatingQuery;
    type Context = (UserClient, StoreClient);
    type Error = RatingError;

    fn from_create_params(id: RatingId, params: RatingCreate) -> Result<Self, RatingError> {
        Ok(Self {
            id,
            value: params.value,
            user_id: params.user_id,
            store_id: params.store_id,
            created_at: Utc::now(),
        })
    }

    async fn on_create(&mut self, ctx: &(UserClient, StoreClient)) -> Result<(), RatingError> {
        self.validate_with(ctx).await
    }

    async fn on_update(
        &mut self,
        update: RatingUpdate,
        ctx: &(UserClient, StoreClient),
    ) -> Result<(), RatingError> {
        if let Some(value) = update.value {
            self.value = value;
        }
        self.validate_with(ctx).await
    }

    fn check_unique(&self, others: &[&Self]) -> Result<(), RatingError> {
        let mut errors = ValidationErrors::new();
        if others
            .iter()
            .any(|other| other.user_id == self.user_id && other.store_id == self.store_id)
        {
            errors.add("user_id", ALREADY_RATED);
        }
        errors.into_result().map_err(RatingError::Invalid)
    }

    async fn after_save(
        &self,
        records: &Records<Self>,
        ctx: &(UserClient, StoreClient),
    ) -> Result<(), RatingError> {
        self.sync_store_average(records, &ctx.1).await
    }

    async fn after_delete(
        &self,
        records: &Records<Self>,
        ctx: &(UserClient, StoreClient),
    ) -> Result<(), RatingError> {
        self.sync_after_removal(records, &ctx.1).await
    }

    async fn handle_action(&mut self, _action: (), _ctx: &(UserClient, StoreClient)) -> Result<(), RatingError> {
        Ok(())
    }

    fn matches(&self, query: &RatingQuery) -> bool {
        query.matches(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{StoreId, UserId};

    fn rating(id: u32, user: u32, store: u32) -> StoreRating {
        StoreRating::from_create_params(
            RatingId(id),
            RatingCreate {
                user_id: UserId(user),
                store_id: StoreId(store),
                value: 4,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_one_rating_per_user_and_store() {
        let existing = rating(1, 1, 1);

        let err = rating(2, 1, 1).check_unique(&[&existing]).unwrap_err();
        let errors = err.validation_errors().unwrap();
        assert_eq!(errors.on("user_id"), vec![ALREADY_RATED]);
        assert_eq!(errors.full_messages(), vec!["User has already rated this store"]);

        assert!(rating(3, 1, 2).check_unique(&[&existing]).is_ok());
        assert!(rating(4, 2, 1).check_unique(&[&existing]).is_ok());
    }
}
