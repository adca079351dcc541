//! Class schedule domain models and parameter types.

use chrono::{DateTime, Duration, Utc};
use garde::Validate;
use uuid::Uuid;

use crate::{
    model::schedule::{ClassScheduleDto, CreateScheduleDto, ScheduleOverviewDto, TrainerSummaryDto},
    server::{
        error::AppError,
        model::booking::MAX_BOOKINGS_PER_SCHEDULE,
        util::validate::{iso_datetime, parse_id},
    },
};

/// Every class runs for this many hours.
pub const CLASS_DURATION_HOURS: i64 = 2;

/// Maximum number of classes starting on one business-calendar day.
pub const MAX_CLASSES_PER_DAY: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct ClassSchedule {
    pub id: Uuid,
    pub title: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub trainer_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl ClassSchedule {
    /// Whether this class's [start, end) interval intersects [start, end) of another.
    ///
    /// Intervals that only touch at an endpoint do not overlap.
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.start_time < end && self.end_time > start
    }

    pub fn into_dto(self) -> ClassScheduleDto {
        ClassScheduleDto {
            id: self.id,
            title: self.title,
            start_time: self.start_time,
            end_time: self.end_time,
            trainer_id: self.trainer_id,
        }
    }

    pub fn from_entity(entity: entity::class_schedule::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            start_time: entity.start_time,
            end_time: entity.end_time,
            trainer_id: entity.trainer_id,
            created_at: entity.created_at,
        }
    }
}

/// Validated request to create a class.
#[derive(Debug, Clone)]
pub struct CreateClassScheduleParam {
    pub title: String,
    pub start_time: DateTime<Utc>,
    pub trainer_id: Uuid,
}

impl CreateClassScheduleParam {
    /// Validates a creation DTO, reporting the first failing field.
    ///
    /// The trainer id is checked first, so a malformed id is reported even when
    /// other fields are also invalid.
    pub fn from_dto(dto: CreateScheduleDto) -> Result<Self, AppError> {
        let trainer_id = parse_id(
            "trainerId",
            dto.trainer_id.as_deref(),
            "Invalid trainer ID provided",
        )?;

        dto.validate()?;

        let (Some(title), Some(start_time)) = (dto.title, dto.start_time) else {
            return Err(AppError::BadRequest("Validation error occurred.".to_string()));
        };
        let start_time = iso_datetime("startTime", &start_time)?;

        Ok(Self {
            title: title.trim().to_string(),
            start_time,
            trainer_id,
        })
    }

    pub fn end_time(&self) -> DateTime<Utc> {
        self.start_time + Duration::hours(CLASS_DURATION_HOURS)
    }
}

/// Public display fields of a class's trainer.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainerSummary {
    pub name: String,
    pub email: String,
}

impl TrainerSummary {
    pub fn into_dto(self) -> TrainerSummaryDto {
        TrainerSummaryDto {
            name: self.name,
            email: self.email,
        }
    }

    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            name: entity.name,
            email: entity.email,
        }
    }
}

/// An upcoming class joined with its trainer and booking count.
#[derive(Debug, Clone)]
pub struct ScheduleOverview {
    pub schedule: ClassSchedule,
    pub trainer: TrainerSummary,
    pub booked_count: u64,
    /// Whether the viewing trainee holds a booking. `None` outside trainee views.
    pub is_booked: Option<bool>,
}

impl ScheduleOverview {
    pub fn is_full(&self) -> bool {
        self.booked_count >= MAX_BOOKINGS_PER_SCHEDULE
    }

    pub fn into_dto(self) -> ScheduleOverviewDto {
        let is_full = self.is_full();

        ScheduleOverviewDto {
            id: self.schedule.id,
            title: self.schedule.title,
            start_time: self.schedule.start_time,
            end_time: self.schedule.end_time,
            trainer: self.trainer.into_dto(),
            booked_count: self.booked_count,
            is_full,
            is_booked: self.is_booked,
        }
    }
}
