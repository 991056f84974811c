//! Link management handlers.
//!
//! All routes here sit behind the bearer token middleware, so every
//! handler can rely on the [`AuthUser`] extension being present.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::info;
use validator::Validate;

use crate::{
    api::dto::link::{CreateLinkRequest, LinkListResponse, LinkResponse},
    application::services::AuthUser,
    error::AppError,
    state::AppState,
};

/// `POST /api/links`
///
/// Normalizes the destination, mints a short code, and stores the link
/// under the caller's account.
pub async fn create_link_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    payload.validate()?;

    let link = state.link_service.create_link(&payload.url, user.id).await?;

    info!(user_id = user.id, code = %link.short_code, "Link created");

    Ok((StatusCode::CREATED, Json(LinkResponse::from(link))))
}

/// `GET /api/links`
///
/// Lists the caller's links, newest first, with total link and click
/// counts for dashboard display.
pub async fn list_links_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<LinkListResponse>, AppError> {
    let links = state.link_service.list_links(user.id).await?;

    Ok(Json(LinkListResponse::from_links(links)))
}

/// `GET /api/links/{id}`
///
/// Fetches one of the caller's links. A link owned by someone else is
/// indistinguishable from a missing one: both 404.
pub async fn get_link_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.get_link(id, user.id).await?;

    Ok(Json(LinkResponse::from(link)))
}

/// `DELETE /api/links/{id}`
///
/// Deletes one of the caller's links. Returns 204 on success and 404 when
/// the link does not exist or belongs to another account.
pub async fn delete_link_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.link_service.delete_link(id, user.id).await?;

    info!(user_id = user.id, link_id = id, "Link deleted");

    Ok(StatusCode::NO_CONTENT)
}
