//! Custom actions for the Store actor.

/// Custom actions for Store entities.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreAction {
    /// Writes the cached average rating directly, without running validations.
    ///
    /// Sent by the rating actor after every rating write or delete.
    SetAverageRating(Option<f64>),
}
