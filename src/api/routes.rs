//! API route configuration.
//!
//! Link management endpoints require Bearer token authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::auth::{login_handler, register_handler, session_handler};
use crate::api::handlers::links::{
    create_link_handler, delete_link_handler, get_link_handler, list_links_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Link management routes, protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `GET    /links`        - List the caller's links with click totals
/// - `POST   /links`        - Shorten a new URL
/// - `GET    /links/{id}`   - Fetch a single link
/// - `DELETE /links/{id}`   - Delete a link
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/links", get(list_links_handler).post(create_link_handler))
        .route(
            "/links/{id}",
            get(get_link_handler).delete(delete_link_handler),
        )
}

/// Credential routes, open to anonymous callers.
///
/// # Endpoints
///
/// - `POST /register`  - Create an account, returns a session token
/// - `POST /login`     - Exchange credentials for a session token
pub fn credential_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_handler))
        .route("/login", post(login_handler))
}

/// Session introspection route with optional authentication.
///
/// # Endpoints
///
/// - `GET /session`  - Report whether the caller's token names a live account
pub fn session_routes() -> Router<AppState> {
    Router::new().route("/session", get(session_handler))
}
