//! [`ActorEntity`] implementation for [`Store`].
//!
//! Field rules and the proprietor reference are checked together so one failed write reports
//! all of them. The one-store-per-proprietor rule and email uniqueness are checked against the
//! other stores.

use super::actions::StoreAction;
use super::StoreError;
use crate::clients::UserClient;
use crate::model::{Store, StoreCreate, StoreId, StoreQuery, StoreUpdate};
use crate::validation::rules::{self, TAKEN};
use crate::validation::ValidationErrors;
use actor_framework::{ActorClient, ActorEntity};
use async_trait::async_trait;
use chrono::Utc;

pub const PROPRIETOR_MISSING: &str = "must exist";
pub const PROPRIETOR_TAKEN: &str = "already owns a different store";

impl Store {
    async fn validate_with(&self, users: &UserClient) -> Result<(), StoreError> {
        let mut errors = self.validate();
        let proprietor = users
            .get(self.proprietor_id)
            .await
            .map_err(|e| StoreError::ActorCommunicationError(e.to_string()))?;
        if proprietor.is_none() {
            errors.add("proprietor", PROPRIETOR_MISSING);
        }
        errors.into_result().map_err(StoreError::Invalid)
    }
}

#[async_trait]
impl ActorEntity for Store {
    type Id = StoreId;
    type Create = StoreCreate;
    type Update = StoreUpdate;
    type Action = StoreAction;
    type ActionResult = ();
    type Query = StoreQuery;
    type Context = UserClient;
    type Error = StoreError;

    fn from_create_params(id: StoreId, params: StoreCreate) -> Result<Self, StoreError> {
        Ok(Self {
            id,
            name: params.name,
            email: params.email,
            address: params.address,
            proprietor_id: params.proprietor_id,
            average_rating: None,
            created_at: Utc::now(),
        })
    }

    async fn on_create(&mut self, users: &UserClient) -> Result<(), StoreError> {
        self.validate_with(users).await
    }

    async fn on_update(&mut self, update: StoreUpdate, users: &UserClient) -> Result<(), StoreError> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(address) = update.address {
            self.address = address;
        }
        if let Some(proprietor_id) = update.proprietor_id {
            self.proprietor_id = proprietor_id;
        }
        self.validate_with(users).await
    }

    fn check_unique(&self, others: &[&Self]) -> Result<(), StoreError> {
        let mut errors = ValidationErrors::new();
        if others.iter().any(|other| rules::same_email(&other.email, &self.email)) {
            errors.add("email", TAKEN);
        }
        if others.iter().any(|other| other.proprietor_id == self.proprietor_id) {
            errors.add("proprietor", PROPRIETOR_TAKEN);
        }
        errors.into_result().map_err(StoreError::Invalid)
    }

    async fn handle_action(&mut self, action: StoreAction, _users: &UserClient) -> Result<(), StoreError> {
        match action {
            StoreAction::SetAverageRating(average) => {
                self.average_rating = average;
                Ok(())
            }
        }
    }

    fn matches(&self, query: &StoreQuery) -> bool {
        query.matches(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{User, UserId, UserRole};
    use actor_framework::mock::MockClient;

    fn params(proprietor: u32) -> StoreCreate {
        StoreCreate {
            name: "Corner Bakery No 123".to_string(),
            email: "bakery@example.com".to_string(),
            address: "12 Market St, Springfield".to_string(),
            proprietor_id: UserId(proprietor),
        }
    }

    fn owner(id: u32) -> User {
        User {
            id: UserId(id),
            name: "Olive Owner Number 1".to_string(),
            email: "olive@example.com".to_string(),
            address: "1 Main St".to_string(),
            role: UserRole::Proprietor,
            active: true,
            password_digest: None,
            auth_token: "token".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_on_create_requires_existing_proprietor() {
        let mut users = MockClient::<User>::new();
        users.expect_get(UserId(1)).return_ok(Some(owner(1)));
        users.expect_get(UserId(2)).return_ok(None);
        let client = UserClient::new(users.client());

        let mut store = Store::from_create_params(StoreId(1), params(1)).unwrap();
        assert!(store.on_create(&client).await.is_ok());

        let mut orphan = Store::from_create_params(StoreId(2), params(2)).unwrap();
        orphan.name = "Tiny".to_string();
        let err = orphan.on_create(&client).await.unwrap_err();
        let errors = err.validation_errors().unwrap();
        assert_eq!(errors.on("proprietor"), vec![PROPRIETOR_MISSING]);
        assert_eq!(errors.on("name").len(), 2);

        users.verify();
    }

    #[test]
    fn test_one_store_per_proprietor() {
        let first = Store::from_create_params(StoreId(1), params(1)).unwrap();
        let mut second = Store::from_create_params(StoreId(2), params(1)).unwrap();
        second.email = "other@example.com".to_string();

        let err = second.check_unique(&[&first]).unwrap_err();
        let errors = err.validation_errors().unwrap();
        assert_eq!(errors.on("proprietor"), vec![PROPRIETOR_TAKEN]);
        assert!(errors.on("email").is_empty());
        assert_eq!(
            errors.full_messages(),
            vec!["Proprietor already owns a different store"]
        );
    }

    #[test]
    fn test_email_taken_case_insensitively() {
        let first = Store::from_create_params(StoreId(1), params(1)).unwrap();
        let mut second = Store::from_create_params(StoreId(2), params(2)).unwrap();
        second.email = "BAKERY@example.COM".to_string();

        let err = second.check_unique(&[&first]).unwrap_err();
        assert_eq!(err.validation_errors().unwrap().on("email"), vec![TAKEN]);
    }

    #[tokio::test]
    async fn test_set_average_rating_skips_validation() {
        let users = MockClient::<User>::new();
        let client = UserClient::new(users.client());

        let mut store = Store::from_create_params(StoreId(1), params(1)).unwrap();
        store.name = "invalid".to_string();
        store
            .handle_action(StoreAction::SetAverageRating(Some(4.5)), &client)
            .await
            .unwrap();
        assert_eq!(store.average_rating, Some(4.5));

        users.verify();
    }
}
