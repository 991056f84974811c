//! Session token signing and verification (HS256 JWT).

use chrono::{Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};

/// Claim set embedded in every session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id the session belongs to.
    pub sub: i64,
    /// Email at mint time, for display without a store round-trip.
    pub email: String,
    /// Absolute expiry as a Unix timestamp.
    pub exp: i64,
}

/// Verification failures, by cause.
///
/// Callers that face the network collapse these into a uniform
/// "not authenticated"; the distinction exists for logging and tests.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token signature is invalid")]
    InvalidSignature,

    #[error("token has expired")]
    Expired,

    #[error("token is malformed")]
    Malformed,

    #[error("failed to sign token")]
    Signing,
}

/// Signs and verifies session tokens with a process-wide secret.
///
/// The secret and validity window are explicit construction parameters,
/// never ambient globals.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validity: Duration,
}

impl TokenCodec {
    pub fn new(secret: &str, validity_days: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validity: Duration::days(validity_days),
        }
    }

    /// Mints a token for the given user, expiring after the configured
    /// validity window.
    pub fn sign(&self, user_id: i64, email: &str) -> Result<String, TokenError> {
        let claims = Claims {
            sub: user_id,
            email: email.to_string(),
            exp: (Utc::now() + self.validity).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "token signing failed");
            TokenError::Signing
        })
    }

    /// Verifies a token and returns its claims.
    ///
    /// A token is valid iff its signature verifies against the current
    /// secret and its expiry is in the future. Expiry is strict: no
    /// leeway, `now >= exp` is expired.
    ///
    /// # Errors
    ///
    /// [`TokenError::Expired`] for a well-signed but stale token,
    /// [`TokenError::InvalidSignature`] when the signature check fails,
    /// [`TokenError::Malformed`] for anything that does not parse.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                _ => TokenError::Malformed,
            })
    }
}
