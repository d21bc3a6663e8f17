use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::entity::readings;
use crate::services::NewReading;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReadingResponse {
    pub id: i32,
    pub temperature_c: f64,
    /// UTC creation time, RFC 3339 with a trailing `Z`
    #[serde(with = "crate::timestamps::utc")]
    pub created_at_utc: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl From<readings::Model> for ReadingResponse {
    fn from(m: readings::Model) -> Self {
        Self {
            id: m.id,
            temperature_c: m.temperature_c,
            created_at_utc: m.created_at_utc,
            location: m.location,
            notes: m.notes,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(rename_all = "camelCase", parameter_in = Query)]
pub struct ListReadingsQuery {
    /// 1-based page index
    #[param(default = 1, minimum = 1)]
    pub page: Option<i64>,
    /// Readings per page
    #[param(default = 20, minimum = 1)]
    pub page_size: Option<i64>,
}

/// Body of a create request. Any `id` or `createdAtUtc` sent along is ignored.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReadingRequest {
    /// Degrees Celsius, within [-100, 100]
    pub temperature_c: f64,
    pub location: Option<String>,
    pub notes: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<CreateReadingRequest> for NewReading {
    fn from(req: CreateReadingRequest) -> Self {
        Self {
            temperature_c: req.temperature_c,
            location: non_blank(req.location),
            notes: non_blank(req.notes),
        }
    }
}
