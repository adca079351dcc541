use super::*;

/// Tests that a user's upcoming bookings come back with class and trainer details.
///
/// Expected: only the user's bookings on classes from the cutoff, ordered by start
#[tokio::test]
async fn returns_upcoming_bookings_with_details() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::user::UserFactory::new(db)
        .name("Coach")
        .email("coach@example.com")
        .role("trainer")
        .build()
        .await?;
    let now = Utc::now();

    let later = factory::class_schedule::ScheduleFactory::new(db, trainer.id)
        .title("Yoga")
        .start_time(now + Duration::days(2))
        .build()
        .await?;
    let sooner = factory::class_schedule::ScheduleFactory::new(db, trainer.id)
        .title("Spin")
        .start_time(now + Duration::days(1))
        .build()
        .await?;
    let past = factory::class_schedule::ScheduleFactory::new(db, trainer.id)
        .start_time(now - Duration::days(1))
        .build()
        .await?;

    let trainee = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;

    factory::create_booking(db, trainee.id, later.id).await?;
    factory::create_booking(db, trainee.id, sooner.id).await?;
    factory::create_booking(db, trainee.id, past.id).await?;
    factory::create_booking(db, other.id, sooner.id).await?;

    let bookings = BookingRepository::new(db)
        .get_upcoming_for_user(trainee.id, now)
        .await?;

    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings[0].schedule.title, "Spin");
    assert_eq!(bookings[1].schedule.title, "Yoga");
    assert!(bookings.iter().all(|b| b.booking.user_id == trainee.id));
    assert_eq!(bookings[0].trainer.name, "Coach");
    assert_eq!(bookings[0].trainer.email, "coach@example.com");

    Ok(())
}
