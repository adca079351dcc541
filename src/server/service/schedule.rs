//! Class scheduling rules and schedule read models.
//!
//! New classes are admitted only when their trainer exists and holds the trainer
//! role, they start in the future, their business day has fewer than
//! [`MAX_CLASSES_PER_DAY`] classes and they overlap no class on that day.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{
        booking::BookingRepository, class_schedule::ClassScheduleRepository,
        user::UserRepository,
    },
    error::AppError,
    model::{
        class_schedule::{
            ClassSchedule, CreateClassScheduleParam, ScheduleOverview, MAX_CLASSES_PER_DAY,
        },
        user::Role,
    },
    util::time::{day_window, start_of_day},
};

pub const TRAINER_NOT_FOUND: &str = "Target trainer not found for the class schedule";
pub const NOT_A_TRAINER: &str = "Target user is not a Trainer";
pub const TIME_PASSED: &str = "Given time has Already Passed";
pub const DAILY_LIMIT_REACHED: &str = "Maximum 5 Classes already Created for the Date";
pub const TIME_OVERLAP: &str = "New Class time overlaps with Other Class";

/// Checks the time-based admission rules for a class running `[start, end)`.
///
/// `same_day` holds the classes already starting on the new class's business day.
pub fn check_schedule_admission(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    now: DateTime<Utc>,
    same_day: &[ClassSchedule],
) -> Result<(), AppError> {
    if start < now {
        return Err(AppError::BadRequest(TIME_PASSED.to_string()));
    }

    if same_day.len() >= MAX_CLASSES_PER_DAY {
        return Err(AppError::BadRequest(DAILY_LIMIT_REACHED.to_string()));
    }

    if same_day.iter().any(|existing| existing.overlaps(start, end)) {
        return Err(AppError::BadRequest(TIME_OVERLAP.to_string()));
    }

    Ok(())
}

pub struct ScheduleService<'a> {
    pub db: &'a DatabaseConnection,
    pub timezone: Tz,
}

impl<'a> ScheduleService<'a> {
    pub fn new(db: &'a DatabaseConnection, timezone: Tz) -> Self {
        Self { db, timezone }
    }

    /// Creates a class after validating the trainer and the admission rules.
    ///
    /// # Returns
    /// - `Ok(ClassSchedule)` - The stored class with its computed end time
    /// - `Err(AppError::NotFound)` - Trainer missing or not a trainer
    /// - `Err(AppError::BadRequest)` - Start time passed, day full, or overlap
    pub async fn create(
        &self,
        param: CreateClassScheduleParam,
        now: DateTime<Utc>,
    ) -> Result<ClassSchedule, AppError> {
        let Some(trainer) = UserRepository::new(self.db)
            .find_by_id(param.trainer_id)
            .await?
        else {
            return Err(AppError::NotFound(TRAINER_NOT_FOUND.to_string()));
        };

        if trainer.role != Role::Trainer {
            return Err(AppError::NotFound(NOT_A_TRAINER.to_string()));
        }

        let schedule_repo = ClassScheduleRepository::new(self.db);

        let (day_start, day_end) = day_window(&self.timezone, param.start_time);
        let same_day = schedule_repo
            .get_starting_between(day_start, day_end)
            .await?;

        check_schedule_admission(param.start_time, param.end_time(), now, &same_day)?;

        let schedule = schedule_repo.create(&param).await?;

        tracing::info!(
            "Created class schedule {} for trainer {} at {}",
            schedule.id,
            schedule.trainer_id,
            schedule.start_time
        );

        Ok(schedule)
    }

    /// Gets every class from the start of today with trainer and booking count.
    pub async fn get_admin_overview(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<ScheduleOverview>, AppError> {
        let overviews = ClassScheduleRepository::new(self.db)
            .get_upcoming_overviews(start_of_day(&self.timezone, now))
            .await?;

        Ok(overviews)
    }

    /// Gets every class from the start of today, marking those `user_id` booked.
    pub async fn get_trainee_overview(
        &self,
        user_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Vec<ScheduleOverview>, AppError> {
        let mut overviews = ClassScheduleRepository::new(self.db)
            .get_upcoming_overviews(start_of_day(&self.timezone, now))
            .await?;

        let schedule_ids: Vec<Uuid> = overviews.iter().map(|o| o.schedule.id).collect();
        let booked = BookingRepository::new(self.db)
            .booked_schedule_ids(user_id, &schedule_ids)
            .await?;

        for overview in &mut overviews {
            overview.is_booked = Some(booked.contains(&overview.schedule.id));
        }

        Ok(overviews)
    }

    /// Gets a trainer's own classes from the start of today.
    pub async fn get_trainer_schedules(
        &self,
        trainer_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<Vec<ClassSchedule>, AppError> {
        let schedules = ClassScheduleRepository::new(self.db)
            .get_by_trainer_from(trainer_id, start_of_day(&self.timezone, now))
            .await?;

        Ok(schedules)
    }
}
