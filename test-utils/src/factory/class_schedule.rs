//! Class schedule factory for creating test schedule entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test class schedules with customizable fields.
///
/// The end time always follows the start time by two hours, matching how the
/// server computes it.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::class_schedule::ScheduleFactory;
///
/// let schedule = ScheduleFactory::new(&db, trainer.id)
///     .start_time(Utc::now() + Duration::days(1))
///     .build()
///     .await?;
/// ```
pub struct ScheduleFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    start_time: DateTime<Utc>,
    trainer_id: Uuid,
}

impl<'a> ScheduleFactory<'a> {
    /// Creates a new ScheduleFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Class {id}"`
    /// - start_time: 1 day from now
    pub fn new(db: &'a DatabaseConnection, trainer_id: Uuid) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Class {}", id),
            start_time: Utc::now() + Duration::days(1),
            trainer_id,
        }
    }

    /// Sets the class title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the class start time.
    pub fn start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = start_time;
        self
    }

    /// Builds and inserts the class schedule entity into the database.
    pub async fn build(self) -> Result<entity::class_schedule::Model, DbErr> {
        entity::class_schedule::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            title: ActiveValue::Set(self.title),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.start_time + Duration::hours(2)),
            trainer_id: ActiveValue::Set(self.trainer_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a class schedule one day from now taught by `trainer_id`.
pub async fn create_schedule(
    db: &DatabaseConnection,
    trainer_id: Uuid,
) -> Result<entity::class_schedule::Model, DbErr> {
    ScheduleFactory::new(db, trainer_id).build().await
}
