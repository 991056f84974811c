#![allow(dead_code)]

use axum::{Router, middleware, routing::get};
use linkcut::api;
use linkcut::api::handlers::health::health_handler;
use linkcut::api::handlers::redirect::redirect_handler;
use linkcut::api::middleware::auth;
use linkcut::state::AppState;
use linkcut::utils::password::hash_password;
use linkcut::utils::token_codec::TokenCodec;
use sqlx::PgPool;
use std::sync::Arc;

pub const TEST_SIGNING_SECRET: &str = "test-signing-secret";
pub const TEST_PASSWORD: &str = "Sup3rSecret";

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(
        Arc::new(pool),
        TEST_SIGNING_SECRET,
        30,
        "example.com".to_string(),
    )
}

/// Full router without rate limiting so tests do not trip per-IP buckets.
pub fn test_router(state: AppState) -> Router {
    let api_router = api::routes::protected_routes().route_layer(
        middleware::from_fn_with_state(state.clone(), auth::required),
    );

    let auth_router = api::routes::credential_routes().merge(
        api::routes::session_routes().route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::optional,
        )),
    );

    Router::new()
        .route("/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/auth", auth_router)
        .nest("/api", api_router)
        .with_state(state)
}

pub async fn create_test_user(pool: &PgPool, email: &str) -> i64 {
    let hash = hash_password(TEST_PASSWORD).unwrap();

    sqlx::query_scalar::<_, i64>(
        "INSERT INTO users (email, password_hash) VALUES ($1, $2) RETURNING id",
    )
    .bind(email)
    .bind(hash)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_link(pool: &PgPool, code: &str, url: &str, user_id: i64) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO links (original_url, short_code, user_id) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(url)
    .bind(code)
    .bind(user_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn clicks_count(pool: &PgPool, code: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT clicks_count FROM links WHERE short_code = $1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn mint_token(user_id: i64, email: &str) -> String {
    TokenCodec::new(TEST_SIGNING_SECRET, 30)
        .sign(user_id, email)
        .unwrap()
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
