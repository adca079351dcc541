//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names and emails in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a trainer and one upcoming class schedule taught by them.
///
/// # Returns
/// - `Ok((trainer, schedule))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_schedule_with_trainer(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::class_schedule::Model), DbErr> {
    let trainer = crate::factory::user::create_trainer(db).await?;
    let schedule = crate::factory::class_schedule::create_schedule(db, trainer.id).await?;

    Ok((trainer, schedule))
}

/// Fills a schedule with `count` bookings from freshly created trainees.
///
/// # Returns
/// - `Ok(Vec<booking::Model>)` - The created bookings
/// - `Err(DbErr)` - Database error during creation
pub async fn fill_schedule(
    db: &DatabaseConnection,
    schedule_id: uuid::Uuid,
    count: usize,
) -> Result<Vec<entity::booking::Model>, DbErr> {
    let mut bookings = Vec::with_capacity(count);

    for _ in 0..count {
        let trainee = crate::factory::user::create_user(db).await?;
        bookings.push(crate::factory::booking::create_booking(db, trainee.id, schedule_id).await?);
    }

    Ok(bookings)
}
