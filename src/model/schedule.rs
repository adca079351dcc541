use chrono::{DateTime, Utc};
use garde::Validate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::validate::present;

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ClassScheduleDto {
    pub id: Uuid,
    pub title: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub trainer_id: Uuid,
}

#[derive(Serialize, Deserialize, Validate, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateScheduleDto {
    #[serde(default)]
    #[garde(custom(present), length(chars, min = 2))]
    pub title: Option<String>,
    /// ISO 8601 / RFC 3339 timestamp.
    #[serde(default)]
    #[garde(custom(present))]
    pub start_time: Option<String>,
    /// Parsed separately so a malformed id is reported before the other fields.
    #[serde(default)]
    #[garde(skip)]
    pub trainer_id: Option<String>,
}

/// Public display fields of the trainer teaching a class.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TrainerSummaryDto {
    pub name: String,
    pub email: String,
}

/// Upcoming class joined with its trainer and booking count.
///
/// `is_booked` is only present in trainee views.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleOverviewDto {
    pub id: Uuid,
    pub title: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub trainer: TrainerSummaryDto,
    pub booked_count: u64,
    pub is_full: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_booked: Option<bool>,
}
