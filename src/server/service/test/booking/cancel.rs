use super::*;

/// Tests cancelling one's own booking.
///
/// Expected: Ok(()) and the booking removed
#[tokio::test]
async fn cancels_own_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_trainer, schedule) = factory::helpers::create_schedule_with_trainer(db).await?;
    let trainee = factory::user::create_user(db).await?;
    let booking = factory::create_booking(db, trainee.id, schedule.id).await?;
    let service = BookingService::new(db, business_tz());

    service.cancel(trainee.id, booking.id).await?;

    let again = service.cancel(trainee.id, booking.id).await;
    assert!(matches!(again, Err(AppError::NotFound(ref m)) if m == BOOKING_NOT_FOUND));

    Ok(())
}

/// Tests cancelling a booking held by someone else.
///
/// Expected: Err(AuthError::NotBookingOwner) and the booking kept
#[tokio::test]
async fn rejects_foreign_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_trainer, schedule) = factory::helpers::create_schedule_with_trainer(db).await?;
    let owner = factory::user::create_user(db).await?;
    let intruder = factory::user::create_user(db).await?;
    let booking = factory::create_booking(db, owner.id, schedule.id).await?;
    let service = BookingService::new(db, business_tz());

    let result = service.cancel(intruder.id, booking.id).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotBookingOwner(_)))
    ));

    service.cancel(owner.id, booking.id).await?;

    Ok(())
}

/// Tests that a cancelled seat can be booked again.
///
/// Expected: Ok(Booking) after cancelling on a full class
#[tokio::test]
async fn frees_seat() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_trainer, schedule) = factory::helpers::create_schedule_with_trainer(db).await?;
    let trainee = factory::user::create_user(db).await?;
    let booking = factory::create_booking(db, trainee.id, schedule.id).await?;
    factory::helpers::fill_schedule(db, schedule.id, 9).await?;
    let service = BookingService::new(db, business_tz());

    service.cancel(trainee.id, booking.id).await?;

    let newcomer = factory::user::create_user(db).await?;
    assert!(service.book(newcomer.id, schedule.id).await.is_ok());

    Ok(())
}
