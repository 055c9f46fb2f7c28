//! Error types for the Store actor.

use crate::validation::ValidationErrors;
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// The requested store was not found.
    #[error("Store not found: {0}")]
    NotFound(String),

    /// The store failed validation; nothing was written.
    #[error("Store validation failed: {0}")]
    Invalid(ValidationErrors),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl StoreError {
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            StoreError::Invalid(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<ValidationErrors> for StoreError {
    fn from(errors: ValidationErrors) -> Self {
        StoreError::Invalid(errors)
    }
}

impl From<String> for StoreError {
    fn from(msg: String) -> Self {
        StoreError::ActorCommunicationError(msg)
    }
}
