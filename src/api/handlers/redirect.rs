//! Short code redirect handler.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tracing::info;

use crate::{error::AppError, state::AppState};

/// `GET /{code}`
///
/// Resolves a short code to its destination and answers with
/// `303 See Other`, which forces browsers to re-request the destination
/// with GET and keeps redirects out of their permanent caches.
///
/// The click is counted before the destination is validated, so a link
/// whose stored URL has rotted still records the visit.
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Redirect, AppError> {
    let destination = state.link_service.resolve(&code).await?;

    info!(code = %code, "Redirecting short link");

    Ok(Redirect::to(&destination))
}
