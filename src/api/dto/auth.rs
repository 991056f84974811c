//! DTOs for registration, login, and session introspection.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::AuthUser;

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,
}

/// Response carrying a freshly minted session token.
///
/// The token is an opaque bearer value; clients send it back in the
/// `Authorization` header.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Identity payload embedded in session responses.
#[derive(Debug, Serialize)]
pub struct IdentityResponse {
    pub id: i64,
    pub email: String,
}

impl From<AuthUser> for IdentityResponse {
    fn from(user: AuthUser) -> Self {
        Self {
            id: user.id,
            email: user.email,
        }
    }
}

/// Response for `GET /auth/session`.
///
/// Anonymous visitors get `authenticated: false` with no user payload
/// instead of an error.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<IdentityResponse>,
}
