//! Session authentication for protected and personalized routes.

use std::sync::Arc;

use serde_json::json;

use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::token_codec::TokenCodec;

/// Identity established by a verified session token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: i64,
    pub email: String,
}

/// Service validating presented session tokens.
///
/// Every failure cause (bad signature, expiry, malformed token, vanished
/// subject) is surfaced uniformly as "not authenticated"; the cause is
/// logged server-side only.
pub struct AuthService<U: UserRepository> {
    users: Arc<U>,
    tokens: TokenCodec,
}

impl<U: UserRepository> AuthService<U> {
    /// Creates a new authentication service.
    pub fn new(users: Arc<U>, tokens: TokenCodec) -> Self {
        Self { users, tokens }
    }

    /// Authenticates a presented token (required mode).
    ///
    /// Verifies signature and expiry, then re-resolves the embedded
    /// subject against the identity store so a token outliving its user
    /// is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] for any token problem,
    /// [`AppError::Internal`] on store errors.
    pub async fn authenticate(&self, token: &str) -> Result<AuthUser, AppError> {
        let claims = self.tokens.verify(token).map_err(|e| {
            tracing::debug!(error = %e, "session token rejected");
            Self::not_authenticated()
        })?;

        let user = self
            .users
            .find_by_id(claims.sub)
            .await?
            .ok_or_else(|| {
                tracing::debug!(user_id = claims.sub, "token subject no longer exists");
                Self::not_authenticated()
            })?;

        Ok(AuthUser {
            id: user.id,
            email: user.email,
        })
    }

    /// Authenticates a token when one is present (optional mode).
    ///
    /// Missing or invalid tokens yield `Ok(None)` instead of an error,
    /// for public-but-personalized pages. Store failures still propagate:
    /// an outage must not masquerade as an anonymous visitor.
    pub async fn authenticate_optional(
        &self,
        token: Option<&str>,
    ) -> Result<Option<AuthUser>, AppError> {
        let Some(token) = token else {
            return Ok(None);
        };

        match self.authenticate(token).await {
            Ok(user) => Ok(Some(user)),
            Err(AppError::Unauthorized { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn not_authenticated() -> AppError {
        AppError::unauthorized("Not authenticated", json!({}))
    }
}
