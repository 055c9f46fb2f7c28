//! Attribute rules for emails, addresses and passwords.

use super::ValidationErrors;
use regex::Regex;
use std::sync::LazyLock;

pub const ADDRESS_MAX_LENGTH: usize = 400;
pub const PASSWORD_MIN_LENGTH: usize = 8;
pub const PASSWORD_MAX_LENGTH: usize = 16;
pub const PASSWORD_SPECIALS: &[char] = &['!', '@', '#', '$', '&', '*'];

pub const BLANK: &str = "can't be blank";
pub const TAKEN: &str = "has already been taken";
pub const INVALID: &str = "is invalid";
pub const ADDRESS_TOO_LONG: &str = "is too long (maximum is 400 characters)";
pub const ADDRESS_CHARSET: &str = "contains invalid characters";
pub const PASSWORD_STRENGTH: &str =
    "must include: 1 uppercase, 1 special character, 1 number, and be 8-16 characters";

/// Local part of printable ASCII specials, dot-separated DNS labels of up to 63 characters.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\A[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*\z",
    )
    .expect("Invalid regex")
});

/// Word characters, whitespace, commas, periods and hyphens (ASCII only).
static ADDRESS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A[A-Za-z0-9_ \t\r\n\x0B\x0C,.\-]+\z").expect("Invalid regex"));

/// Empty or whitespace-only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Case-insensitive comparison used by email uniqueness.
pub fn same_email(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Presence, then format. A blank email only reports `can't be blank`.
pub fn validate_email(email: &str, errors: &mut ValidationErrors) {
    if is_blank(email) {
        errors.add("email", BLANK);
    } else if !EMAIL_RE.is_match(email) {
        errors.add("email", INVALID);
    }
}

/// Presence and length. With `restrict_charset`, also the user address character set.
pub fn validate_address(address: &str, restrict_charset: bool, errors: &mut ValidationErrors) {
    if is_blank(address) {
        errors.add("address", BLANK);
        return;
    }
    if address.chars().count() > ADDRESS_MAX_LENGTH {
        errors.add("address", ADDRESS_TOO_LONG);
    }
    if restrict_charset && !ADDRESS_RE.is_match(address) {
        errors.add("address", ADDRESS_CHARSET);
    }
}

/// Strength check, skipped when no password (or a blank one) was supplied.
pub fn validate_password(password: Option<&str>, errors: &mut ValidationErrors) {
    let Some(password) = password.filter(|p| !is_blank(p)) else {
        return;
    };
    if !is_strong_password(password) {
        errors.add("password", PASSWORD_STRENGTH);
    }
}

fn is_strong_password(password: &str) -> bool {
    let length = password.chars().count();
    (PASSWORD_MIN_LENGTH..=PASSWORD_MAX_LENGTH).contains(&length)
        // Stricter than a line-anchored pattern, which would accept "Abcdef1!\nx"
        && !password.contains('\n')
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SPECIALS.contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email_errors(email: &str) -> Vec<String> {
        let mut errors = ValidationErrors::new();
        validate_email(email, &mut errors);
        errors.on("email").into_iter().map(str::to_string).collect()
    }

    fn address_errors(address: &str, restrict: bool) -> Vec<String> {
        let mut errors = ValidationErrors::new();
        validate_address(address, restrict, &mut errors);
        errors.on("address").into_iter().map(str::to_string).collect()
    }

    fn password_ok(password: &str) -> bool {
        let mut errors = ValidationErrors::new();
        validate_password(Some(password), &mut errors);
        errors.is_empty()
    }

    #[test]
    fn test_email_format() {
        for ok in ["a@x.com", "first.last+tag@mail.example.org", "o'brien@shop-1.io", "root@localhost"] {
            assert!(email_errors(ok).is_empty(), "{ok} should be valid");
        }
        for bad in ["plainaddress", "@x.com", "a@", "a@-x.com", "a b@x.com", "a@x..com", "a@x.com\n"] {
            assert_eq!(email_errors(bad), vec![INVALID], "{bad:?} should be invalid");
        }
    }

    #[test]
    fn test_blank_email_only_reports_presence() {
        assert_eq!(email_errors(""), vec![BLANK]);
        assert_eq!(email_errors("  "), vec![BLANK]);
    }

    #[test]
    fn test_same_email_ignores_case() {
        assert!(same_email("a@x.com", "A@X.com"));
        assert!(!same_email("a@x.com", "b@x.com"));
    }

    #[test]
    fn test_address_charset() {
        assert!(address_errors("12 Main St., Apt-4, Springfield", true).is_empty());
        assert!(address_errors("Line one\nLine two_b", true).is_empty());
        assert_eq!(address_errors("12 Main St #4", true), vec![ADDRESS_CHARSET]);
        assert_eq!(address_errors("Straße 5", true), vec![ADDRESS_CHARSET]);
        // Store addresses are not charset-restricted.
        assert!(address_errors("12 Main St #4", false).is_empty());
    }

    #[test]
    fn test_address_length() {
        assert!(address_errors(&"a".repeat(400), true).is_empty());
        assert_eq!(address_errors(&"a".repeat(401), true), vec![ADDRESS_TOO_LONG]);
        assert_eq!(address_errors(&"#".repeat(401), true), vec![ADDRESS_TOO_LONG, ADDRESS_CHARSET]);
        assert_eq!(address_errors("", false), vec![BLANK]);
    }

    #[test]
    fn test_password_strength() {
        assert!(password_ok("Abcdef1!"));
        assert!(password_ok("Sixteen*Chars123"));
        assert!(!password_ok("abcdefgh"));
        assert!(!password_ok("Abcde1!"));
        assert!(!password_ok("Seventeen*Chars12"));
        assert!(!password_ok("ABCDEF1!"));
        assert!(!password_ok("Abcdefg!"));
        assert!(!password_ok("Abcdefg1"));
        assert!(!password_ok("Abcdef1%"));
        assert!(!password_ok("Abcdef1!\nx"));
    }

    #[test]
    fn test_missing_password_is_not_checked() {
        let mut errors = ValidationErrors::new();
        validate_password(None, &mut errors);
        validate_password(Some(""), &mut errors);
        assert!(errors.is_empty());

        validate_password(Some("abcdefgh"), &mut errors);
        assert_eq!(errors.on("password"), vec![PASSWORD_STRENGTH]);
    }
}
