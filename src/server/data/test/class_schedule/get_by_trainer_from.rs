use super::*;

/// Tests that only the trainer's own classes from the cutoff are returned.
///
/// Expected: Ok(Vec) with the one upcoming class of that trainer
#[tokio::test]
async fn returns_own_upcoming_classes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::user::create_trainer(db).await?;
    let other = factory::user::create_trainer(db).await?;
    let now = Utc::now();

    let upcoming = factory::create_schedule(db, trainer.id).await?;
    factory::class_schedule::ScheduleFactory::new(db, trainer.id)
        .start_time(now - Duration::days(3))
        .build()
        .await?;
    factory::create_schedule(db, other.id).await?;

    let schedules = ClassScheduleRepository::new(db)
        .get_by_trainer_from(trainer.id, now - Duration::hours(1))
        .await?;

    assert_eq!(schedules.len(), 1);
    assert_eq!(schedules[0].id, upcoming.id);

    Ok(())
}
