//! # User Client
//!
//! Provides a high‑level API for interacting with the `User` actor.
//! It wraps a `ResourceClient<User>` and exposes domain‑specific methods.
use crate::model::{User, UserCreate, UserId, UserQuery, UserRole, UserUpdate};
use crate::user_actor::{UserAction, UserActionResult, UserError};
use actor_framework::ActorClient;
use actor_framework::{FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<UserError>() {
            Ok(user_error) => user_error,
            Err(FrameworkError::NotFound(id)) => UserError::NotFound(id),
            Err(other) => UserError::ActorCommunicationError(other.to_string()),
        }
    }
}

fn unexpected(result: UserActionResult) -> UserError {
    UserError::ActorCommunicationError(format!("Unexpected action result: {result:?}"))
}

impl UserClient {
    #[instrument(skip(self))]
    pub async fn create_user(&self, params: UserCreate) -> Result<UserId, UserError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_user(&self, id: UserId, update: UserUpdate) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Like `get`, but a missing user is an error.
    pub async fn find_user(&self, id: UserId) -> Result<User, UserError> {
        self.get(id)
            .await?
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }

    /// Replaces the user's auth token and returns the new one.
    #[instrument(skip(self))]
    pub async fn regenerate_auth_token(&self, id: UserId) -> Result<String, UserError> {
        debug!("Regenerating auth token for {}", id);
        match self
            .inner
            .perform_action(id, UserAction::RegenerateAuthToken)
            .await
            .map_err(Self::map_error)?
        {
            UserActionResult::RegenerateAuthToken(token) => Ok(token),
            other => Err(unexpected(other)),
        }
    }

    /// Whether `password` matches the user's stored digest. Users without a password never
    /// authenticate.
    #[instrument(skip(self, password))]
    pub async fn authenticate(&self, id: UserId, password: &str) -> Result<bool, UserError> {
        debug!("Authenticating {}", id);
        match self
            .inner
            .perform_action(id, UserAction::Authenticate(password.to_string()))
            .await
            .map_err(Self::map_error)?
        {
            UserActionResult::Authenticate(matched) => Ok(matched),
            other => Err(unexpected(other)),
        }
    }

    pub async fn by_role(&self, role: UserRole) -> Result<Vec<User>, UserError> {
        self.query(UserQuery::default().by_role(role)).await
    }

    pub async fn active_users(&self) -> Result<Vec<User>, UserError> {
        self.query(UserQuery::default().active_users()).await
    }

    pub async fn search_by_name(&self, query: &str) -> Result<Vec<User>, UserError> {
        self.query(UserQuery::default().search_by_name(query)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrors;
    use actor_framework::mock::{create_mock_client, expect_action, expect_query, MockClient};
    use chrono::Utc;

    fn user(id: u32, role: UserRole) -> User {
        User {
            id: UserId(id),
            name: "Alice Shopper Number 1".to_string(),
            email: format!("user{id}@example.com"),
            address: "12 Main St".to_string(),
            role,
            active: true,
            password_digest: None,
            auth_token: "token".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_authenticate_sends_action() {
        let (client, mut receiver) = create_mock_client::<User>(10);
        let user_client = UserClient::new(client);

        let task = tokio::spawn(async move { user_client.authenticate(UserId(1), "Abcdef1!").await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, UserId(1));
        match action {
            UserAction::Authenticate(password) => assert_eq!(password, "Abcdef1!"),
            _ => panic!("Expected Authenticate action"),
        }
        responder.send(Ok(UserActionResult::Authenticate(true))).unwrap();

        assert!(task.await.unwrap().unwrap());
    }

    #[tokio::test]
    async fn test_mismatched_action_result_is_an_error() {
        let mut mock = MockClient::<User>::new();
        mock.expect_action(UserId(1))
            .return_ok(UserActionResult::Authenticate(true));

        let client = UserClient::new(mock.client());
        let result = client.regenerate_auth_token(UserId(1)).await;
        assert!(matches!(result, Err(UserError::ActorCommunicationError(_))));
        mock.verify();
    }

    #[tokio::test]
    async fn test_by_role_builds_query() {
        let (client, mut receiver) = create_mock_client::<User>(10);
        let user_client = UserClient::new(client);

        let task = tokio::spawn(async move { user_client.by_role(UserRole::Proprietor).await });

        let (query, responder) = expect_query(&mut receiver)
            .await
            .expect("Expected Query request");
        assert_eq!(query, UserQuery::default().by_role(UserRole::Proprietor));
        responder.send(Ok(vec![user(2, UserRole::Proprietor)])).unwrap();

        let found = task.await.unwrap().unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, UserId(2));
    }

    #[tokio::test]
    async fn test_entity_errors_keep_their_type() {
        let mut errors = ValidationErrors::new();
        errors.add("email", "has already been taken");

        let mut mock = MockClient::<User>::new();
        mock.expect_create()
            .return_err(FrameworkError::EntityError(Box::new(UserError::Invalid(errors.clone()))));
        mock.expect_get(UserId(9)).return_ok(None);
        mock.expect_delete(UserId(9))
            .return_err(FrameworkError::NotFound("user_9".to_string()));

        let client = UserClient::new(mock.client());
        let err = client.create_user(UserCreate::default()).await.unwrap_err();
        assert_eq!(err, UserError::Invalid(errors));

        let err = client.find_user(UserId(9)).await.unwrap_err();
        assert_eq!(err, UserError::NotFound("user_9".to_string()));

        let err = client.delete(UserId(9)).await.unwrap_err();
        assert_eq!(err, UserError::NotFound("user_9".to_string()));

        mock.verify();
    }
}
