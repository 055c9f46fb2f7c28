//! Custom actions for the User actor.
//!
//! These run through [`ActorEntity::handle_action`](actor_framework::ActorEntity::handle_action)
//! and skip validation.

use std::fmt;

/// Custom actions for User entities.
#[derive(Clone)]
pub enum UserAction {
    /// Replaces the auth token with a freshly generated one.
    RegenerateAuthToken,
    /// Checks a password against the stored digest.
    Authenticate(String),
}

// Actions are logged at debug level.
impl fmt::Debug for UserAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserAction::RegenerateAuthToken => f.write_str("RegenerateAuthToken"),
            UserAction::Authenticate(_) => f.write_str("Authenticate([FILTERED])"),
        }
    }
}

/// Results from UserActions - variants match 1:1 with UserAction
#[derive(Debug, Clone, PartialEq)]
pub enum UserActionResult {
    /// The new token
    RegenerateAuthToken(String),
    /// Whether the password matched
    Authenticate(bool),
}
