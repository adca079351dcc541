//! Class schedule data repository.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::{
    data::booking::BookingRepository,
    model::class_schedule::{
        ClassSchedule, CreateClassScheduleParam, ScheduleOverview, TrainerSummary,
    },
};

pub struct ClassScheduleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClassScheduleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a class. The end time is derived from the start time.
    pub async fn create(&self, param: &CreateClassScheduleParam) -> Result<ClassSchedule, DbErr> {
        let entity = entity::class_schedule::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            title: ActiveValue::Set(param.title.clone()),
            start_time: ActiveValue::Set(param.start_time),
            end_time: ActiveValue::Set(param.end_time()),
            trainer_id: ActiveValue::Set(param.trainer_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(ClassSchedule::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<ClassSchedule>, DbErr> {
        let entity = entity::prelude::ClassSchedule::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(ClassSchedule::from_entity))
    }

    /// Gets classes whose start time lies within the inclusive `[from, to]` range,
    /// ordered by start time.
    pub async fn get_starting_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<ClassSchedule>, DbErr> {
        let entities = entity::prelude::ClassSchedule::find()
            .filter(entity::class_schedule::Column::StartTime.gte(from))
            .filter(entity::class_schedule::Column::StartTime.lte(to))
            .order_by_asc(entity::class_schedule::Column::StartTime)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ClassSchedule::from_entity).collect())
    }

    /// Gets every class starting at or after `from` with its trainer and booking count.
    ///
    /// Classes are ordered by start time. `is_booked` is left unset for the caller
    /// to fill in when a trainee is viewing.
    pub async fn get_upcoming_overviews(
        &self,
        from: DateTime<Utc>,
    ) -> Result<Vec<ScheduleOverview>, DbErr> {
        let rows = entity::prelude::ClassSchedule::find()
            .filter(entity::class_schedule::Column::StartTime.gte(from))
            .order_by_asc(entity::class_schedule::Column::StartTime)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        let schedule_ids: Vec<Uuid> = rows.iter().map(|(schedule, _)| schedule.id).collect();
        let counts: HashMap<Uuid, u64> = BookingRepository::new(self.db)
            .count_by_schedules(&schedule_ids)
            .await?;

        let overviews = rows
            .into_iter()
            .filter_map(|(schedule, trainer)| {
                let Some(trainer) = trainer else {
                    tracing::warn!("Class schedule {} has no trainer row", schedule.id);
                    return None;
                };

                let booked_count = counts.get(&schedule.id).copied().unwrap_or(0);

                Some(ScheduleOverview {
                    schedule: ClassSchedule::from_entity(schedule),
                    trainer: TrainerSummary::from_entity(trainer),
                    booked_count,
                    is_booked: None,
                })
            })
            .collect();

        Ok(overviews)
    }

    /// Gets a trainer's classes starting at or after `from`, ordered by start time.
    pub async fn get_by_trainer_from(
        &self,
        trainer_id: Uuid,
        from: DateTime<Utc>,
    ) -> Result<Vec<ClassSchedule>, DbErr> {
        let entities = entity::prelude::ClassSchedule::find()
            .filter(entity::class_schedule::Column::TrainerId.eq(trainer_id))
            .filter(entity::class_schedule::Column::StartTime.gte(from))
            .order_by_asc(entity::class_schedule::Column::StartTime)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ClassSchedule::from_entity).collect())
    }
}
