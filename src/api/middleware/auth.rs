//! Bearer token authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{application::services::AuthUser, error::AppError, state::AppState};

/// Wrapper for an optional authenticated identity.
///
/// Routes behind [`optional`] read this extension instead of [`AuthUser`]
/// so that anonymous requests still reach the handler.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Option<AuthUser>);

/// Middleware requiring a valid Bearer token.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// # Authentication Flow
///
/// 1. Extract token from `Authorization` header
/// 2. Verify signature and expiry
/// 3. Re-resolve the embedded user against the identity store
/// 4. Insert an [`AuthUser`] extension for downstream handlers
///
/// # Errors
///
/// Returns `401 Unauthorized` if:
/// - Authorization header is missing or malformed
/// - Token signature is invalid or the token has expired
/// - The user the token names no longer exists
///
/// Adds `WWW-Authenticate: Bearer` header to 401 responses per RFC 6750.
pub async fn required(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Not authenticated",
                serde_json::json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    let mut req = Request::from_parts(parts, body);

    let user = st.auth_service.authenticate(&token).await?;
    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}

/// Middleware that resolves the caller's identity when a Bearer token is
/// present but never rejects the request.
///
/// A missing, malformed, expired, or orphaned token yields an anonymous
/// [`CurrentUser`] extension instead of a 401.
pub async fn optional(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let token = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .ok()
        .map(|AuthBearer(t)| t);

    let mut req = Request::from_parts(parts, body);

    let user = st
        .auth_service
        .authenticate_optional(token.as_deref())
        .await?;
    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}
