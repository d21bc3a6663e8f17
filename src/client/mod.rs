//! Client-side data layer for the readings API.
//!
//! [`ReadingsFeed`] walks the paginated listing one page at a time and keeps
//! the pages in the order they were fetched. Creating a reading discards
//! everything accumulated so far, since only the server knows where the new
//! row ranks.

mod api;
mod feed;
mod stats;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use api::{ClientError, HttpReadingsApi, ReadingsApi};
pub use feed::{ListState, ReadingsFeed};
pub use stats::{ReadingStats, TemperatureBand};

/// A reading as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    pub id: i32,
    pub temperature_c: f64,
    #[serde(with = "crate::timestamps::utc")]
    pub created_at_utc: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Body of a create request.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingDraft {
    pub temperature_c: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ReadingDraft {
    #[must_use]
    pub fn new(temperature_c: f64) -> Self {
        Self {
            temperature_c,
            ..Self::default()
        }
    }
}
