//! Booking data repository.
//!
//! Besides plain reads, this repository owns the capacity-checked insert that keeps
//! concurrent bookings from exceeding a class's limit.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbBackend, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, SqlErr, Statement,
};
use uuid::Uuid;

use crate::server::model::{
    booking::{Booking, BookingInsert, BookingOverview},
    class_schedule::{ClassSchedule, TrainerSummary},
};

/// Inserts only while the class holds fewer than the given number of bookings.
const INSERT_UNDER_CAPACITY: &str = "INSERT INTO booking (id, user_id, schedule_id, created_at) \
     SELECT ?, ?, ?, ? \
     WHERE (SELECT COUNT(*) FROM booking WHERE schedule_id = ?) < ?";

pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, DbErr> {
        let entity = entity::prelude::Booking::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Booking::from_entity))
    }

    /// Gets all bookings on a class.
    pub async fn get_by_schedule(&self, schedule_id: Uuid) -> Result<Vec<Booking>, DbErr> {
        let entities = entity::prelude::Booking::find()
            .filter(entity::booking::Column::ScheduleId.eq(schedule_id))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Booking::from_entity).collect())
    }

    /// Stores a booking if the class has room and the user hasn't booked it yet.
    ///
    /// The capacity check and insert run as a single statement, and the unique
    /// (user, schedule) index rejects repeats, so concurrent requests cannot
    /// overfill a class or double-book a user.
    ///
    /// # Returns
    /// - `Ok(BookingInsert::Created(Booking))` - Booking stored
    /// - `Ok(BookingInsert::Full)` - Class already holds `capacity` bookings
    /// - `Ok(BookingInsert::Duplicate)` - User already holds a booking on the class
    /// - `Err(DbErr)` - Any other database error
    pub async fn create_under_capacity(
        &self,
        user_id: Uuid,
        schedule_id: Uuid,
        capacity: u64,
    ) -> Result<BookingInsert, DbErr> {
        let id = Uuid::new_v4();
        let created_at = Utc::now();

        let stmt = Statement::from_sql_and_values(
            DbBackend::Sqlite,
            INSERT_UNDER_CAPACITY,
            [
                id.into(),
                user_id.into(),
                schedule_id.into(),
                created_at.into(),
                schedule_id.into(),
                (capacity as i64).into(),
            ],
        );

        let result = match self.db.execute_raw(stmt).await {
            Ok(result) => result,
            Err(err) => {
                if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
                    return Ok(BookingInsert::Duplicate);
                }
                return Err(err);
            }
        };

        if result.rows_affected() == 0 {
            return Ok(BookingInsert::Full);
        }

        Ok(BookingInsert::Created(Booking {
            id,
            user_id,
            schedule_id,
            created_at,
        }))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DbErr> {
        entity::prelude::Booking::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Counts bookings per class for the given classes.
    ///
    /// Classes without bookings are absent from the returned map.
    pub async fn count_by_schedules(
        &self,
        schedule_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, u64>, DbErr> {
        if schedule_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(Uuid, i64)> = entity::prelude::Booking::find()
            .select_only()
            .column(entity::booking::Column::ScheduleId)
            .column_as(entity::booking::Column::Id.count(), "count")
            .filter(entity::booking::Column::ScheduleId.is_in(schedule_ids.iter().copied()))
            .group_by(entity::booking::Column::ScheduleId)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(schedule_id, count)| (schedule_id, count.max(0) as u64))
            .collect())
    }

    /// Returns which of the given classes `user_id` has booked.
    pub async fn booked_schedule_ids(
        &self,
        user_id: Uuid,
        schedule_ids: &[Uuid],
    ) -> Result<HashSet<Uuid>, DbErr> {
        if schedule_ids.is_empty() {
            return Ok(HashSet::new());
        }

        let rows: Vec<Uuid> = entity::prelude::Booking::find()
            .select_only()
            .column(entity::booking::Column::ScheduleId)
            .filter(entity::booking::Column::UserId.eq(user_id))
            .filter(entity::booking::Column::ScheduleId.is_in(schedule_ids.iter().copied()))
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows.into_iter().collect())
    }

    /// Gets a user's bookings on classes starting at or after `from`, with each
    /// class and its trainer, ordered by class start time.
    pub async fn get_upcoming_for_user(
        &self,
        user_id: Uuid,
        from: DateTime<Utc>,
    ) -> Result<Vec<BookingOverview>, DbErr> {
        let rows = entity::prelude::Booking::find()
            .filter(entity::booking::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::ClassSchedule)
            .filter(entity::class_schedule::Column::StartTime.gte(from))
            .order_by_asc(entity::class_schedule::Column::StartTime)
            .all(self.db)
            .await?;

        let trainer_ids: Vec<Uuid> = rows
            .iter()
            .filter_map(|(_, schedule)| schedule.as_ref().map(|s| s.trainer_id))
            .collect();

        let trainers: HashMap<Uuid, TrainerSummary> = if trainer_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::User::find()
                .filter(entity::user::Column::Id.is_in(trainer_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|user| (user.id, TrainerSummary::from_entity(user)))
                .collect()
        };

        let overviews = rows
            .into_iter()
            .filter_map(|(booking, schedule)| {
                let schedule = schedule?;
                let Some(trainer) = trainers.get(&schedule.trainer_id).cloned() else {
                    tracing::warn!("Class schedule {} has no trainer row", schedule.id);
                    return None;
                };

                Some(BookingOverview {
                    booking: Booking::from_entity(booking),
                    schedule: ClassSchedule::from_entity(schedule),
                    trainer,
                })
            })
            .collect();

        Ok(overviews)
    }
}
