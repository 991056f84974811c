//! Registration input policies.
//!
//! Both checks run before any store round-trip so invalid input never
//! reaches the persistence layer.

use crate::error::AppError;
use serde_json::json;
use validator::ValidateEmail;

/// Validates a password against the account policy.
///
/// # Rules
///
/// - at least 8 characters
/// - at least one uppercase letter
/// - at least one lowercase letter
/// - at least one digit
///
/// # Errors
///
/// Returns [`AppError::Validation`] listing every rule the password
/// failed, so the caller can report all problems at once.
pub fn validate_password(password: &str) -> Result<(), AppError> {
    let mut errors = Vec::new();

    if password.chars().count() < 8 {
        errors.push("Password must have at least 8 characters");
    }
    if !password.chars().any(|c| c.is_uppercase()) {
        errors.push("Password must have at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_lowercase()) {
        errors.push("Password must have at least one lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must have at least one digit");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::bad_request(
            "Password does not meet the policy",
            json!({ "reasons": errors }),
        ))
    }
}

/// Validates an email address structurally and against the domain policy.
///
/// The disallowed domain is matched as a full `@domain` suffix; an address
/// that merely contains the text elsewhere is fine.
///
/// # Errors
///
/// Returns [`AppError::Validation`] for malformed addresses or addresses
/// in the disallowed domain.
pub fn validate_email(email: &str, disallowed_domain: &str) -> Result<(), AppError> {
    if !email.validate_email() {
        return Err(AppError::bad_request(
            "Invalid email address",
            json!({ "email": email }),
        ));
    }

    if !disallowed_domain.is_empty()
        && email
            .to_ascii_lowercase()
            .ends_with(&format!("@{}", disallowed_domain.to_ascii_lowercase()))
    {
        return Err(AppError::bad_request(
            "Invalid email domain",
            json!({ "domain": disallowed_domain }),
        ));
    }

    Ok(())
}
