use super::*;

/// Tests listing the caller's upcoming bookings.
///
/// Expected: one overview with the class title and trainer
#[tokio::test]
async fn lists_own_bookings() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (trainer, schedule) = factory::helpers::create_schedule_with_trainer(db).await?;
    let trainee = factory::user::create_user(db).await?;
    let booking = factory::create_booking(db, trainee.id, schedule.id).await?;
    factory::helpers::fill_schedule(db, schedule.id, 2).await?;

    let bookings = BookingService::new(db, business_tz())
        .get_user_bookings(trainee.id, Utc::now())
        .await?;

    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].booking.id, booking.id);
    assert_eq!(bookings[0].schedule.title, schedule.title);
    assert_eq!(bookings[0].trainer.email, trainer.email);

    Ok(())
}
