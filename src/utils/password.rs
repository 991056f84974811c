//! Password hashing with Argon2id.
//!
//! Hashes are PHC-format strings with an embedded random salt, so equal
//! passwords produce different blobs across calls.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use serde_json::json;

use crate::error::AppError;

/// Hashes a password with Argon2id and a fresh random salt.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if hashing fails; the input is never
/// included in the error.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| {
            tracing::error!(error = %e, "password hashing failed");
            AppError::internal("Failed to hash password", json!({}))
        })?;

    Ok(hash.to_string())
}

/// Verifies a password against a stored PHC hash string.
///
/// Returns `false` for a wrong password AND for a malformed hash blob;
/// verification never raises.
pub fn verify_password(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash).is_ok_and(|parsed| {
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    })
}
