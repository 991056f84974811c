//! Health check handler.

use axum::{Json, extract::State, http::StatusCode};
use tracing::error;

use crate::{api::dto::health::HealthResponse, state::AppState};

/// `GET /health`
///
/// Pings the database with a trivial query. Returns 200 when the pool can
/// reach Postgres and 503 otherwise so load balancers can pull the
/// instance out of rotation.
pub async fn health_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    match sqlx::query("SELECT 1").execute(&*state.db).await {
        Ok(_) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                database: "ok",
            }),
        ),
        Err(e) => {
            error!(error = %e, "Health check database ping failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "degraded",
                    database: "unreachable",
                }),
            )
        }
    }
}
