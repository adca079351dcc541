//! Booking domain models.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    model::booking::{BookedScheduleDto, BookingDto, BookingOverviewDto},
    server::model::class_schedule::{ClassSchedule, TrainerSummary},
};

/// Maximum number of trainees booked onto one class.
pub const MAX_BOOKINGS_PER_SCHEDULE: u64 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: Uuid,
    pub user_id: Uuid,
    pub schedule_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.id,
            user_id: self.user_id,
            schedule_id: self.schedule_id,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::booking::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            schedule_id: entity.schedule_id,
            created_at: entity.created_at,
        }
    }
}

/// Result of attempting to store a booking under the capacity limit.
#[derive(Debug, Clone, PartialEq)]
pub enum BookingInsert {
    Created(Booking),
    /// The class already held the maximum number of bookings.
    Full,
    /// The user already holds a booking on the class.
    Duplicate,
}

/// A trainee's booking joined with its class and trainer.
#[derive(Debug, Clone)]
pub struct BookingOverview {
    pub booking: Booking,
    pub schedule: ClassSchedule,
    pub trainer: TrainerSummary,
}

impl BookingOverview {
    pub fn into_dto(self) -> BookingOverviewDto {
        BookingOverviewDto {
            id: self.booking.id,
            schedule_id: self.booking.schedule_id,
            schedule: BookedScheduleDto {
                title: self.schedule.title,
                start_time: self.schedule.start_time,
                end_time: self.schedule.end_time,
            },
            trainer: self.trainer.into_dto(),
        }
    }
}
