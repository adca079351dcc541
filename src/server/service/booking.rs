//! Booking admission, cancellation and the trainee's booking list.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{booking::BookingRepository, class_schedule::ClassScheduleRepository},
    error::{auth::AuthError, AppError},
    model::booking::{Booking, BookingInsert, BookingOverview, MAX_BOOKINGS_PER_SCHEDULE},
    util::time::start_of_day,
};

pub const SCHEDULE_NOT_FOUND: &str = "Schedule not found";
pub const BOOKING_NOT_FOUND: &str = "Booking not found";
pub const ALREADY_BOOKED: &str = "You already Booked this Schedule";
pub const SCHEDULE_FULL: &str =
    "Class schedule is full. Maximum 10 trainees allowed per schedule.";

/// Checks whether `user_id` may add a booking to a class holding `existing`.
///
/// A repeat booking is reported even when the class is also full.
pub fn check_booking_admission(user_id: Uuid, existing: &[Booking]) -> Result<(), AppError> {
    if existing.iter().any(|booking| booking.user_id == user_id) {
        return Err(AppError::BadRequest(ALREADY_BOOKED.to_string()));
    }

    if existing.len() as u64 >= MAX_BOOKINGS_PER_SCHEDULE {
        return Err(AppError::BadRequest(SCHEDULE_FULL.to_string()));
    }

    Ok(())
}

pub struct BookingService<'a> {
    pub db: &'a DatabaseConnection,
    pub timezone: Tz,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection, timezone: Tz) -> Self {
        Self { db, timezone }
    }

    /// Books `schedule_id` for `user_id`.
    ///
    /// # Returns
    /// - `Ok(Booking)` - Booking stored
    /// - `Err(AppError::NotFound)` - No such class
    /// - `Err(AppError::BadRequest)` - Already booked, or class full
    pub async fn book(&self, user_id: Uuid, schedule_id: Uuid) -> Result<Booking, AppError> {
        if ClassScheduleRepository::new(self.db)
            .find_by_id(schedule_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(SCHEDULE_NOT_FOUND.to_string()));
        }

        let booking_repo = BookingRepository::new(self.db);

        let existing = booking_repo.get_by_schedule(schedule_id).await?;
        check_booking_admission(user_id, &existing)?;

        // Another request may have booked in between; the insert re-checks both rules.
        match booking_repo
            .create_under_capacity(user_id, schedule_id, MAX_BOOKINGS_PER_SCHEDULE)
            .await?
        {
            BookingInsert::Created(booking) => {
                tracing::info!("User {} booked class schedule {}", user_id, schedule_id);
                Ok(booking)
            }
            BookingInsert::Duplicate => Err(AppError::BadRequest(ALREADY_BOOKED.to_string())),
            BookingInsert::Full => Err(AppError::BadRequest(SCHEDULE_FULL.to_string())),
        }
    }

    /// Cancels a booking held by `user_id`.
    ///
    /// # Returns
    /// - `Ok(())` - Booking deleted
    /// - `Err(AppError::NotFound)` - No such booking
    /// - `Err(AppError::AuthErr(NotBookingOwner))` - Booking belongs to another user
    pub async fn cancel(&self, user_id: Uuid, booking_id: Uuid) -> Result<(), AppError> {
        let booking_repo = BookingRepository::new(self.db);

        let Some(booking) = booking_repo.find_by_id(booking_id).await? else {
            return Err(AppError::NotFound(BOOKING_NOT_FOUND.to_string()));
        };

        if booking.user_id != user_id {
            return Err(AuthError::NotBookingOwner(user_id).into());
        }

        booking_repo.delete(booking.id).await?;

        tracing::info!("User {} canceled booking {}", user_id, booking_id);

        Ok(())
    }

    /// Gets the user's bookings on classes from the start of today.
    pub async fn get_user_bookings(
        &self,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Vec<BookingOverview>, AppError> {
        let bookings = BookingRepository::new(self.db)
            .get_upcoming_for_user(user_id, start_of_day(&self.timezone, now))
            .await?;

        Ok(bookings)
    }
}
