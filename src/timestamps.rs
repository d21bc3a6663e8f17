//! Wire format for `createdAtUtc`.
//!
//! Timestamps always go out as RFC 3339 with a trailing `Z`. Incoming values
//! may omit the offset entirely; a naive timestamp is taken to be UTC.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse an RFC 3339 timestamp, or a naive one interpreted as UTC.
///
/// # Errors
///
/// Returns the RFC 3339 parse error if no accepted format matches.
pub fn parse_utc(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    let value = value.trim();
    match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => Ok(dt.with_timezone(&Utc)),
        Err(rfc_err) => NAIVE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
            .map(|naive| naive.and_utc())
            .ok_or(rfc_err),
    }
}

#[must_use]
pub fn format_utc(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// `#[serde(with = "crate::timestamps::utc")]`
pub mod utc {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_utc(value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_utc(&raw).map_err(serde::de::Error::custom)
    }
}
