//! Error types for the StoreRating actor.

use crate::store_actor::StoreError;
use crate::validation::ValidationErrors;
use thiserror::Error;

/// Errors that can occur during rating operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RatingError {
    /// The requested rating was not found.
    #[error("Rating not found: {0}")]
    NotFound(String),

    /// The rating failed validation; nothing was written.
    #[error("Rating validation failed: {0}")]
    Invalid(ValidationErrors),

    /// The store's cached average could not be written, so the rating change was rolled back.
    #[error("Failed to update store average rating: {0}")]
    AverageRating(#[source] StoreError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl RatingError {
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            RatingError::Invalid(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<ValidationErrors> for RatingError {
    fn from(errors: ValidationErrors) -> Self {
        RatingError::Invalid(errors)
    }
}

impl From<String> for RatingError {
    fn from(msg: String) -> Self {
        RatingError::ActorCommunicationError(msg)
    }
}
