//! Registration, login, and session handlers.

use axum::{Extension, Json, extract::State, http::StatusCode};
use tracing::info;
use validator::Validate;

use crate::{
    api::{
        dto::auth::{
            IdentityResponse, LoginRequest, RegisterRequest, SessionResponse, TokenResponse,
        },
        middleware::auth::CurrentUser,
    },
    error::AppError,
    state::AppState,
};

/// `POST /auth/register`
///
/// Creates an account and signs the caller in with one call: the response
/// carries a fresh session token so no follow-up login is needed.
pub async fn register_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<TokenResponse>), AppError> {
    payload.validate()?;

    let token = state
        .account_service
        .register(&payload.email, &payload.password)
        .await?;

    info!(email = %payload.email, "User registered");

    Ok((StatusCode::CREATED, Json(TokenResponse { token })))
}

/// `POST /auth/login`
///
/// Exchanges credentials for a session token. Unknown email and wrong
/// password produce the same 401 body.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    payload.validate()?;

    let token = state
        .account_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(TokenResponse { token }))
}

/// `GET /auth/session`
///
/// Reports whether the caller's bearer token (if any) names a live
/// account. Always 200; anonymous callers get `authenticated: false`.
pub async fn session_handler(
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Json<SessionResponse> {
    Json(SessionResponse {
        authenticated: user.is_some(),
        user: user.map(IdentityResponse::from),
    })
}
