//! Field conversions that run after a DTO passes its `garde` rules.
//!
//! Each helper reports the offending field by its wire name so the error body can
//! point the client at it.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::server::error::AppError;

/// Parses an RFC 3339 timestamp with an explicit offset.
pub fn iso_datetime(field: &str, value: &str) -> Result<DateTime<Utc>, AppError> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| AppError::validation(field, "Invalid ISO datetime"))
}

/// Parses a resource id, reporting `invalid_message` when it is not a UUID.
pub fn parse_id(field: &str, value: Option<&str>, invalid_message: &str) -> Result<Uuid, AppError> {
    let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
        return Err(AppError::validation(field, format!("{} is required", field)));
    };

    Uuid::parse_str(value.trim()).map_err(|_| AppError::validation(field, invalid_message))
}
