//! Password digests (Argon2id, PHC string format) and auth tokens.

use super::UserError;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::Rng;

pub const AUTH_TOKEN_LENGTH: usize = 24;

/// Base58: alphanumerics without `0`, `O`, `I` and `l`.
const BASE58: &[u8] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

pub fn hash_password(password: &str) -> Result<String, UserError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| UserError::PasswordHash(format!("Failed to hash password: {e}")))?;
    Ok(hash.to_string())
}

/// `Ok(false)` on mismatch, `Err` only if the stored digest is malformed.
pub fn verify_password(password: &str, digest: &str) -> Result<bool, UserError> {
    let parsed = PasswordHash::new(digest)
        .map_err(|e| UserError::PasswordHash(format!("Invalid password hash: {e}")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

pub fn generate_auth_token() -> String {
    let mut rng = rand::rng();
    (0..AUTH_TOKEN_LENGTH)
        .map(|_| char::from(BASE58[rng.random_range(0..BASE58.len())]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let digest = hash_password("Abcdef1!").unwrap();
        assert!(digest.starts_with("$argon2id$"));
        assert!(!digest.contains("Abcdef1!"));
        assert!(verify_password("Abcdef1!", &digest).unwrap());
        assert!(!verify_password("Abcdef1?", &digest).unwrap());
    }

    #[test]
    fn test_malformed_digest_is_an_error() {
        assert!(matches!(
            verify_password("Abcdef1!", "not-a-digest"),
            Err(UserError::PasswordHash(_))
        ));
    }

    #[test]
    fn test_auth_token_shape() {
        let token = generate_auth_token();
        assert_eq!(token.len(), AUTH_TOKEN_LENGTH);
        assert!(token.bytes().all(|b| BASE58.contains(&b)));
        assert_ne!(token, generate_auth_token());
    }
}
