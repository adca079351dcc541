use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

use super::{business_tz, local_time};
use crate::server::{
    error::AppError,
    model::class_schedule::{ClassSchedule, CreateClassScheduleParam},
    service::schedule::{
        check_schedule_admission, ScheduleService, DAILY_LIMIT_REACHED, NOT_A_TRAINER,
        TIME_OVERLAP, TIME_PASSED, TRAINER_NOT_FOUND,
    },
};

mod overview;

fn is_bad_request(result: &Result<impl std::fmt::Debug, AppError>, expected: &str) -> bool {
    matches!(result, Err(AppError::BadRequest(message)) if message == expected)
}
