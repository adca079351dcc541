//! Booking factory for creating test booking entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Creates a booking of `schedule_id` held by `user_id`.
///
/// # Returns
/// - `Ok(entity::booking::Model)` - Created booking entity
/// - `Err(DbErr)` - Database error during insert, including unique index
///   violations for a repeated (user, schedule) pair
pub async fn create_booking(
    db: &DatabaseConnection,
    user_id: Uuid,
    schedule_id: Uuid,
) -> Result<entity::booking::Model, DbErr> {
    entity::booking::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4()),
        user_id: ActiveValue::Set(user_id),
        schedule_id: ActiveValue::Set(schedule_id),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
