//! Shared application state injected into handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use crate::application::services::{AccountService, AuthService, LinkService};
use crate::infrastructure::persistence::{PgLinkRepository, PgUserRepository};
use crate::utils::token_codec::TokenCodec;

/// Shared state handed to every handler via Axum's `State` extractor.
///
/// The services are constructed once at startup over the Postgres
/// repositories; cloning the state only bumps `Arc` counters.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<PgPool>,
    pub account_service: Arc<AccountService<PgUserRepository>>,
    pub auth_service: Arc<AuthService<PgUserRepository>>,
    pub link_service: Arc<LinkService<PgLinkRepository>>,
}

impl AppState {
    /// Wires repositories and services over the given connection pool.
    pub fn new(
        db: Arc<PgPool>,
        token_signing_secret: &str,
        token_ttl_days: i64,
        disallowed_email_domain: String,
    ) -> Self {
        let users = Arc::new(PgUserRepository::new(db.clone()));
        let links = Arc::new(PgLinkRepository::new(db.clone()));
        let tokens = TokenCodec::new(token_signing_secret, token_ttl_days);

        Self {
            db,
            account_service: Arc::new(AccountService::new(
                users.clone(),
                tokens.clone(),
                disallowed_email_domain,
            )),
            auth_service: Arc::new(AuthService::new(users, tokens)),
            link_service: Arc::new(LinkService::new(links)),
        }
    }
}
