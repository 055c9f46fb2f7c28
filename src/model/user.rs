use crate::model::contains_ignore_case;
use crate::validation::{rules, NameValidatable, ValidationErrors};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::{self, Display};

/// Type-safe identifier for Users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub u32);

impl From<u32> for UserId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "user_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Regular,
    Proprietor,
    Supervisor,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Regular => "regular",
            UserRole::Proprietor => "proprietor",
            UserRole::Supervisor => "supervisor",
        }
    }
}

impl Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a registered user in the system.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for User`](#impl-ActorEntity-for-User) for details on:
/// - Creation parameters ([`UserCreate`])
/// - Update parameters ([`UserUpdate`])
/// - Custom actions ([`UserAction`](crate::user_actor::UserAction))
///
/// The password is never kept; only its Argon2 digest is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub address: String,
    pub role: UserRole,
    pub active: bool,
    #[serde(skip_serializing)]
    pub password_digest: Option<String>,
    #[serde(skip_serializing)]
    pub auth_token: String,
    pub created_at: DateTime<Utc>,
}

impl NameValidatable for User {
    fn name(&self) -> &str {
        &self.name
    }
}

impl User {
    /// Field rules that need nothing but the record itself.
    ///
    /// The password is checked separately since only its digest is stored.
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        self.validate_name(&mut errors);
        rules::validate_email(&self.email, &mut errors);
        rules::validate_address(&self.address, true, &mut errors);
        errors
    }

    pub fn has_password(&self) -> bool {
        self.password_digest.is_some()
    }
}

/// Payload for creating a new user. `role` defaults to [`UserRole::Regular`].
#[derive(Clone, Default)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
    pub address: String,
    pub password: Option<String>,
    pub role: Option<UserRole>,
}

/// Payload for updating an existing user.
#[derive(Clone, Default)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub password: Option<String>,
    pub role: Option<UserRole>,
    pub active: Option<bool>,
}

const FILTERED: &str = "[FILTERED]";

fn filtered(password: &Option<String>) -> Option<&'static str> {
    password.as_ref().map(|_| FILTERED)
}

// Payloads are logged at debug level; passwords must not be.
impl fmt::Debug for UserCreate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserCreate")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("address", &self.address)
            .field("password", &filtered(&self.password))
            .field("role", &self.role)
            .finish()
    }
}

impl fmt::Debug for UserUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserUpdate")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("address", &self.address)
            .field("password", &filtered(&self.password))
            .field("role", &self.role)
            .field("active", &self.active)
            .finish()
    }
}

/// User scopes. Each builder method narrows the result; an empty query matches every user.
///
/// ```rust
/// use store_ratings::model::{UserQuery, UserRole};
///
/// let query = UserQuery::default()
///     .by_role(UserRole::Proprietor)
///     .active_users()
///     .search_by_name("bakery");
/// assert_eq!(query.role, Some(UserRole::Proprietor));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserQuery {
    pub role: Option<UserRole>,
    pub active: Option<bool>,
    pub name_contains: Option<String>,
    pub ids: Option<BTreeSet<UserId>>,
}

impl UserQuery {
    pub fn by_role(mut self, role: UserRole) -> Self {
        self.role = Some(role);
        self
    }

    pub fn active_users(mut self) -> Self {
        self.active = Some(true);
        self
    }

    /// Case-insensitive substring match on the name.
    pub fn search_by_name(mut self, query: impl Into<String>) -> Self {
        self.name_contains = Some(query.into());
        self
    }

    pub fn with_ids(mut self, ids: impl IntoIterator<Item = UserId>) -> Self {
        self.ids = Some(ids.into_iter().collect());
        self
    }

    pub fn matches(&self, user: &User) -> bool {
        self.role.is_none_or(|role| user.role == role)
            && self.active.is_none_or(|active| user.active == active)
            && self
                .name_contains
                .as_deref()
                .is_none_or(|q| contains_ignore_case(&user.name, q))
            && self.ids.as_ref().is_none_or(|ids| ids.contains(&user.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: u32, name: &str, role: UserRole, active: bool) -> User {
        User {
            id: UserId(id),
            name: name.to_string(),
            email: format!("user{id}@example.com"),
            address: "1 Main St".to_string(),
            role,
            active,
            password_digest: None,
            auth_token: String::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_id_display() {
        assert_eq!(UserId(3).to_string(), "user_3");
    }

    #[test]
    fn test_role_defaults_to_regular() {
        assert_eq!(UserRole::default(), UserRole::Regular);
        assert_eq!(UserRole::Supervisor.to_string(), "supervisor");
    }

    #[test]
    fn test_scopes_compose() {
        let alice = user(1, "Alice Baker 2024 Downtown", UserRole::Proprietor, true);
        let bob = user(2, "Bob Baker 1999 Uptown Store", UserRole::Regular, true);
        let carol = user(3, "Carol BAKER 7 Retired Owner", UserRole::Proprietor, false);

        let bakers = UserQuery::default().search_by_name("baker");
        assert!([&alice, &bob, &carol].iter().all(|u| bakers.matches(u)));

        let owners = UserQuery::default().by_role(UserRole::Proprietor);
        assert!(owners.matches(&alice) && !owners.matches(&bob) && owners.matches(&carol));

        let active_owners = owners.active_users();
        assert!(active_owners.matches(&alice));
        assert!(!active_owners.matches(&carol));

        let picked = UserQuery::default().with_ids([UserId(2)]);
        assert!(!picked.matches(&alice) && picked.matches(&bob));
    }

    #[test]
    fn test_debug_filters_password() {
        let params = UserCreate {
            password: Some("Secret1!x".to_string()),
            ..Default::default()
        };
        let rendered = format!("{params:?}");
        assert!(!rendered.contains("Secret1!x"));
        assert!(rendered.contains("[FILTERED]"));
    }
}
