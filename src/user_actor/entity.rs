//! [`ActorEntity`] implementation for [`User`].
//!
//! Users have no dependencies, so every rule runs synchronously: field rules and the password
//! strength check on create and update, email and token uniqueness against the other users.

use super::actions::{UserAction, UserActionResult};
use super::password::{generate_auth_token, hash_password, verify_password};
use super::UserError;
use crate::model::{User, UserCreate, UserId, UserQuery, UserUpdate};
use crate::validation::rules::{self, is_blank, TAKEN};
use crate::validation::ValidationErrors;
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;

/// Validates the password if one was given and, when everything passed, replaces the digest.
fn finish_validation(
    user: &mut User,
    password: Option<String>,
) -> Result<(), UserError> {
    let password = password.filter(|p| !is_blank(p));
    let mut errors = user.validate();
    rules::validate_password(password.as_deref(), &mut errors);
    errors.into_result()?;

    if let Some(password) = password {
        user.password_digest = Some(hash_password(&password)?);
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Action = UserAction;
    type ActionResult = UserActionResult;
    type Query = UserQuery;
    type Context = ();
    type Error = UserError;

    /// Builds the user with a fresh auth token, `active` set and the role defaulted to
    /// regular, then validates it.
    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, UserError> {
        let mut user = User {
            id,
            name: params.name,
            email: params.email,
            address: params.address,
            role: params.role.unwrap_or_default(),
            active: true,
            password_digest: None,
            auth_token: generate_auth_token(),
            created_at: Utc::now(),
        };
        finish_validation(&mut user, params.password)?;
        Ok(user)
    }

    /// Handles updates to the User entity.
    ///
    /// # Fields Updated
    /// - `name`, `email`, `address`: re-validated
    /// - `password`: strength-checked and re-hashed when present
    /// - `role`, `active`
    async fn on_update(&mut self, update: UserUpdate, _ctx: &()) -> Result<(), UserError> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(address) = update.address {
            self.address = address;
        }
        if let Some(role) = update.role {
            self.role = role;
        }
        if let Some(active) = update.active {
            self.active = active;
        }
        finish_validation(self, update.password)
    }

    fn check_unique(&self, others: &[&Self]) -> Result<(), UserError> {
        let mut errors = ValidationErrors::new();
        if others.iter().any(|other| rules::same_email(&other.email, &self.email)) {
            errors.add("email", TAKEN);
        }
        if others.iter().any(|other| other.auth_token == self.auth_token) {
            errors.add("auth_token", TAKEN);
        }
        errors.into_result().map_err(UserError::Invalid)
    }

    async fn handle_action(
        &mut self,
        action: UserAction,
        _ctx: &(),
    ) -> Result<UserActionResult, UserError> {
        match action {
            UserAction::RegenerateAuthToken => {
                self.auth_token = generate_auth_token();
                Ok(UserActionResult::RegenerateAuthToken(self.auth_token.clone()))
            }
            UserAction::Authenticate(password) => {
                let matched = match &self.password_digest {
                    Some(digest) => verify_password(&password, digest)?,
                    None => false,
                };
                Ok(UserActionResult::Authenticate(matched))
            }
        }
    }

    fn matches(&self, query: &UserQuery) -> bool {
        query.matches(self)
    }
}
