//! Field-level validation shared by every record type.
//!
//! Validators never fail fast: they append to a [`ValidationErrors`] collection so a caller
//! sees every problem with a record at once. Errors are keyed by attribute name, with
//! [`BASE`] reserved for rules about the record as a whole.

pub mod name;
pub mod rules;

pub use name::NameValidatable;

use serde::Serialize;
use std::fmt;

/// Attribute key for record-level errors.
pub const BASE: &str = "base";

/// One validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub attribute: &'static str,
    pub message: String,
}

impl FieldError {
    /// The message prefixed with the humanized attribute, e.g. `Email has already been taken`.
    /// Base errors are returned as-is.
    pub fn full_message(&self) -> String {
        if self.attribute == BASE {
            return self.message.clone();
        }
        format!("{} {}", humanize(self.attribute), self.message)
    }
}

/// `user_id` → `User`, `average_rating` → `Average rating`.
fn humanize(attribute: &str) -> String {
    let words = attribute.strip_suffix("_id").unwrap_or(attribute).replace('_', " ");
    let mut chars = words.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Ordered collection of validation failures for one record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, attribute: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            attribute,
            message: message.into(),
        });
    }

    pub fn add_base(&mut self, message: impl Into<String>) {
        self.add(BASE, message);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Messages recorded against `attribute`, in the order they were added.
    pub fn on(&self, attribute: &str) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|e| e.attribute == attribute)
            .map(|e| e.message.as_str())
            .collect()
    }

    pub fn full_messages(&self) -> Vec<String> {
        self.errors.iter().map(FieldError::full_message).collect()
    }

    pub fn merge(&mut self, other: ValidationErrors) {
        self.errors.extend(other.errors);
    }

    /// `Ok(())` when nothing was recorded, otherwise the collection itself.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_messages().join(", "))
    }
}

impl std::error::Error for ValidationErrors {}
