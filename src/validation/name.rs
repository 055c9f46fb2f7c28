//! The shared display-name rule for users and stores.

use super::rules::is_blank;
use super::ValidationErrors;

pub const NAME_MIN_LENGTH: usize = 20;
pub const NAME_MAX_LENGTH: usize = 60;

/// Name rule: 20 to 60 characters containing at least one ASCII letter and one digit.
///
/// Implementors only expose their name; the rule itself is the provided
/// [`NameValidatable::validate_name`]. Blank names are left to presence validation (neither
/// `User` nor `Store` requires one), so they pass here.
pub trait NameValidatable {
    fn name(&self) -> &str;

    fn validate_name(&self, errors: &mut ValidationErrors) {
        let name = self.name();
        if is_blank(name) {
            return;
        }

        let length = name.chars().count();
        if !(NAME_MIN_LENGTH..=NAME_MAX_LENGTH).contains(&length) {
            errors.add("name", "must be between 20 and 60 characters");
        }

        let has_letter = name.chars().any(|c| c.is_ascii_alphabetic());
        let has_digit = name.chars().any(|c| c.is_ascii_digit());
        if !(has_letter && has_digit) {
            errors.add("name", "must contain both letters and numbers");
        }
    }
}
