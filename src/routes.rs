//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{code}`       - Short link redirect (public)
//! - `GET  /health`       - Health check with database ping (public)
//! - `/auth/*`            - Registration, login, session introspection
//! - `/api/*`             - Link management (Bearer token required)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket, stricter on credential routes
//! - **Authentication** - Bearer token (required on `/api`, optional on `/auth/session`)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health::health_handler;
use crate::api::handlers::redirect::redirect_handler;
use crate::api::middleware::{auth, rate_limit, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let api_router = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::required,
        ))
        .layer(rate_limit::layer());

    let credential_router = api::routes::credential_routes().layer(rate_limit::secure_layer());

    let session_router = api::routes::session_routes().route_layer(
        middleware::from_fn_with_state(state.clone(), auth::optional),
    );

    let auth_router = Router::new().merge(credential_router).merge(session_router);

    let router = Router::new()
        .route("/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/auth", auth_router)
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
