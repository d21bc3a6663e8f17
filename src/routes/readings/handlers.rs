use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use chrono::Utc;

use crate::common::AppState;
use crate::error::{AppError, AppResult};
use crate::pagination::{PageRequest, PagedResult};
use crate::services::NewReading;
use crate::validate;

use super::types::{CreateReadingRequest, ListReadingsQuery, ReadingResponse};

/// List readings, newest first
///
/// Offset pagination over all readings ordered by `createdAtUtc` descending
/// (ties by `id` descending). Pages past the end return no items.
#[utoipa::path(
    get,
    path = "/api/v1/readings",
    params(ListReadingsQuery),
    responses(
        (status = 200, description = "Page of readings", body = PagedResult<ReadingResponse>),
        (status = 400, description = "page or pageSize below 1"),
        (status = 500, description = "Storage failure"),
    ),
    tag = "readings"
)]
pub async fn list_readings(
    State(state): State<AppState>,
    query: Result<Query<ListReadingsQuery>, QueryRejection>,
) -> AppResult<Json<PagedResult<ReadingResponse>>> {
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let request = PageRequest::with_defaults(query.page, query.page_size)?;

    let page = state.readings.list(request).await?;
    tracing::debug!(
        page = page.page,
        page_size = page.page_size,
        total_count = page.total_count,
        returned = page.items.len(),
        "Listed readings"
    );

    Ok(Json(page.map(ReadingResponse::from)))
}

/// Record a new reading
///
/// The temperature is range-checked before anything is stamped or stored.
/// The server assigns `id` and `createdAtUtc`.
#[utoipa::path(
    post,
    path = "/api/v1/readings",
    request_body = CreateReadingRequest,
    responses(
        (status = 200, description = "Reading stored", body = ReadingResponse),
        (status = 400, description = "Temperature out of range or malformed body"),
        (status = 500, description = "Storage failure"),
    ),
    tag = "readings"
)]
pub async fn create_reading(
    State(state): State<AppState>,
    body: Result<Json<CreateReadingRequest>, JsonRejection>,
) -> AppResult<Json<ReadingResponse>> {
    let Json(body) = body.map_err(|e| {
        tracing::debug!(error = %e, "Rejected malformed reading body");
        AppError::BadRequest(e.body_text())
    })?;

    let draft = NewReading::from(body);
    validate::validate_new_reading(&draft).inspect_err(|e| {
        tracing::warn!(error = %e, "Rejected reading");
    })?;

    let reading = state.readings.create_at(draft, Utc::now()).await?;
    tracing::info!(
        id = reading.id,
        temperature_c = reading.temperature_c,
        "Reading created"
    );

    Ok(Json(reading.into()))
}
