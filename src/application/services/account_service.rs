//! Registration and login orchestration.

use std::sync::Arc;

use serde_json::json;

use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::password::{hash_password, verify_password};
use crate::utils::token_codec::TokenCodec;
use crate::utils::validators::{validate_email, validate_password};

/// Service for creating accounts and opening sessions.
///
/// Validation runs before any store call, so a weak password or a
/// disallowed email never costs a round-trip and leaves no partial state.
pub struct AccountService<U: UserRepository> {
    users: Arc<U>,
    tokens: TokenCodec,
    disallowed_email_domain: String,
}

impl<U: UserRepository> AccountService<U> {
    /// Creates a new account service.
    ///
    /// # Arguments
    ///
    /// - `users` - identity store gateway
    /// - `tokens` - codec minting session tokens
    /// - `disallowed_email_domain` - domain rejected at registration
    pub fn new(users: Arc<U>, tokens: TokenCodec, disallowed_email_domain: String) -> Self {
        Self {
            users,
            tokens,
            disallowed_email_domain,
        }
    }

    /// Registers a new account and returns a session token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when the email or password fails
    /// policy (checked locally, before the store), [`AppError::Conflict`]
    /// when the email is already registered. The duplicate check is the
    /// store's unique constraint, so two racing registrations of the same
    /// email produce exactly one user row.
    pub async fn register(&self, email: &str, password: &str) -> Result<String, AppError> {
        validate_email(email, &self.disallowed_email_domain)?;
        validate_password(password)?;

        let password_hash = hash_password(password)?;
        let user = self.users.insert(email, &password_hash).await?;

        tracing::info!(user_id = user.id, "user registered");

        self.tokens
            .sign(user.id, &user.email)
            .map_err(|_| AppError::internal("Failed to mint session token", json!({})))
    }

    /// Opens a session for existing credentials and returns a token.
    ///
    /// # Errors
    ///
    /// Returns a single generic [`AppError::Unauthorized`] for both an
    /// unknown email and a wrong password, so callers cannot enumerate
    /// registered accounts.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AppError> {
        let Some(user) = self.users.find_by_email(email).await? else {
            return Err(Self::invalid_credentials());
        };

        if !verify_password(password, &user.password_hash) {
            return Err(Self::invalid_credentials());
        }

        tracing::info!(user_id = user.id, "user logged in");

        self.tokens
            .sign(user.id, &user.email)
            .map_err(|_| AppError::internal("Failed to mint session token", json!({})))
    }

    fn invalid_credentials() -> AppError {
        AppError::unauthorized("Invalid email or password", json!({}))
    }
}
