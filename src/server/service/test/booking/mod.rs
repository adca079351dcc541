use chrono::Utc;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

use super::business_tz;
use crate::server::{
    error::{auth::AuthError, AppError},
    model::booking::Booking,
    service::booking::{
        check_booking_admission, BookingService, ALREADY_BOOKED, BOOKING_NOT_FOUND,
        SCHEDULE_FULL, SCHEDULE_NOT_FOUND,
    },
};

mod admission;
mod book;
mod cancel;
mod get_user_bookings;
