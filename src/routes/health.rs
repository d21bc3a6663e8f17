use axum::{extract::State, http::StatusCode};

use crate::common::AppState;
use crate::error::{AppError, AppResult};

/// Health check endpoint
///
/// Returns 200 OK if the service is running.
/// This endpoint is not rate-limited and suitable for Kubernetes liveness checks.
#[utoipa::path(
    get,
    path = "/healthz",
    responses(
        (status = 200, description = "Service is healthy"),
    ),
    tag = "health"
)]
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Readiness check endpoint
///
/// Returns 200 OK once the database answers a ping.
#[utoipa::path(
    get,
    path = "/readyz",
    responses(
        (status = 200, description = "Database reachable"),
        (status = 503, description = "Database unreachable"),
    ),
    tag = "health"
)]
pub async fn readyz(State(state): State<AppState>) -> AppResult<StatusCode> {
    state.db.ping().await.map_err(|e| {
        tracing::warn!(error = %e, "Readiness check failed");
        AppError::ServiceUnavailable("Database unreachable".to_string())
    })?;
    Ok(StatusCode::OK)
}
