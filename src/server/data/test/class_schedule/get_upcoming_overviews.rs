use super::*;

/// Tests that overviews carry trainer details and booking counts, skipping past classes.
///
/// Expected: Ok(Vec<ScheduleOverview>) ordered by start with correct counts
#[tokio::test]
async fn joins_trainer_and_counts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::user::UserFactory::new(db)
        .name("Coach Carter")
        .email("carter@example.com")
        .role("trainer")
        .build()
        .await?;
    let now = Utc::now();

    let later = factory::class_schedule::ScheduleFactory::new(db, trainer.id)
        .start_time(now + Duration::days(2))
        .build()
        .await?;
    let sooner = factory::class_schedule::ScheduleFactory::new(db, trainer.id)
        .start_time(now + Duration::days(1))
        .build()
        .await?;
    let past = factory::class_schedule::ScheduleFactory::new(db, trainer.id)
        .start_time(now - Duration::days(2))
        .build()
        .await?;

    factory::helpers::fill_schedule(db, later.id, 3).await?;
    factory::helpers::fill_schedule(db, past.id, 1).await?;

    let overviews = ClassScheduleRepository::new(db)
        .get_upcoming_overviews(now)
        .await?;

    assert_eq!(overviews.len(), 2);

    assert_eq!(overviews[0].schedule.id, sooner.id);
    assert_eq!(overviews[0].booked_count, 0);
    assert_eq!(overviews[0].trainer.name, "Coach Carter");
    assert_eq!(overviews[0].trainer.email, "carter@example.com");

    assert_eq!(overviews[1].schedule.id, later.id);
    assert_eq!(overviews[1].booked_count, 3);
    assert!(overviews.iter().all(|o| o.is_booked.is_none()));

    Ok(())
}

/// Tests that a class with ten bookings reports itself full.
///
/// Expected: is_full() true
#[tokio::test]
async fn reports_full_class() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_trainer, schedule) = factory::helpers::create_schedule_with_trainer(db).await?;
    factory::helpers::fill_schedule(db, schedule.id, 10).await?;

    let overviews = ClassScheduleRepository::new(db)
        .get_upcoming_overviews(Utc::now())
        .await?;

    assert_eq!(overviews[0].booked_count, 10);
    assert!(overviews[0].is_full());

    Ok(())
}
