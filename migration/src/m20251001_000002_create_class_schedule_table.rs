use sea_orm_migration::{prelude::*, schema::*};

use super::m20251001_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClassSchedule::Table)
                    .if_not_exists()
                    .col(pk_uuid(ClassSchedule::Id))
                    .col(string(ClassSchedule::Title))
                    .col(timestamp_with_time_zone(ClassSchedule::StartTime))
                    .col(timestamp_with_time_zone(ClassSchedule::EndTime))
                    .col(uuid(ClassSchedule::TrainerId))
                    .col(
                        timestamp_with_time_zone(ClassSchedule::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_class_schedule_trainer_id")
                            .from(ClassSchedule::Table, ClassSchedule::TrainerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Day-window lookups filter on start_time
        manager
            .create_index(
                Index::create()
                    .name("idx_class_schedule_start_time")
                    .table(ClassSchedule::Table)
                    .col(ClassSchedule::StartTime)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ClassSchedule::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ClassSchedule {
    Table,
    Id,
    Title,
    StartTime,
    EndTime,
    TrainerId,
    CreatedAt,
}
