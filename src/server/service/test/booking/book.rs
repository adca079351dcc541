use super::*;

/// Tests booking a class with room.
///
/// Expected: Ok(Booking) for the caller and class
#[tokio::test]
async fn books_class() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_trainer, schedule) = factory::helpers::create_schedule_with_trainer(db).await?;
    let trainee = factory::user::create_user(db).await?;

    let booking = BookingService::new(db, business_tz())
        .book(trainee.id, schedule.id)
        .await?;

    assert_eq!(booking.user_id, trainee.id);
    assert_eq!(booking.schedule_id, schedule.id);

    Ok(())
}

/// Tests booking a class that doesn't exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_missing_schedule() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainee = factory::user::create_user(db).await?;

    let result = BookingService::new(db, business_tz())
        .book(trainee.id, Uuid::new_v4())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(ref m)) if m == SCHEDULE_NOT_FOUND));

    Ok(())
}

/// Tests booking the same class twice.
///
/// Expected: Err(AppError::BadRequest) with the duplicate message
#[tokio::test]
async fn rejects_repeat_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_trainer, schedule) = factory::helpers::create_schedule_with_trainer(db).await?;
    let trainee = factory::user::create_user(db).await?;
    let service = BookingService::new(db, business_tz());

    service.book(trainee.id, schedule.id).await?;
    let result = service.book(trainee.id, schedule.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(ref m)) if m == ALREADY_BOOKED));

    Ok(())
}

/// Tests that the tenth booking succeeds and the eleventh is refused.
///
/// Expected: Ok for the tenth, Err(AppError::BadRequest) with the full message after
#[tokio::test]
async fn enforces_capacity() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_trainer, schedule) = factory::helpers::create_schedule_with_trainer(db).await?;
    factory::helpers::fill_schedule(db, schedule.id, 9).await?;
    let service = BookingService::new(db, business_tz());

    let tenth = factory::user::create_user(db).await?;
    assert!(service.book(tenth.id, schedule.id).await.is_ok());

    let eleventh = factory::user::create_user(db).await?;
    let result = service.book(eleventh.id, schedule.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(ref m)) if m == SCHEDULE_FULL));

    Ok(())
}

/// Tests that a repeat booking on a full class reports the duplicate.
///
/// Expected: Err(AppError::BadRequest) with the duplicate message
#[tokio::test]
async fn duplicate_wins_over_full() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_trainer, schedule) = factory::helpers::create_schedule_with_trainer(db).await?;
    let trainee = factory::user::create_user(db).await?;
    factory::create_booking(db, trainee.id, schedule.id).await?;
    factory::helpers::fill_schedule(db, schedule.id, 9).await?;

    let result = BookingService::new(db, business_tz())
        .book(trainee.id, schedule.id)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(ref m)) if m == ALREADY_BOOKED));

    Ok(())
}

/// Tests that concurrent bookings never overfill a class.
///
/// Expected: exactly ten of fifteen simultaneous bookings succeed
#[tokio::test]
async fn concurrent_bookings_respect_capacity() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.connection().await.unwrap();

    let (_trainer, schedule) = factory::helpers::create_schedule_with_trainer(&db).await?;

    let mut handles = Vec::new();
    for _ in 0..15 {
        let trainee = factory::user::create_user(&db).await?;
        let db = db.clone();
        let schedule_id = schedule.id;

        handles.push(tokio::spawn(async move {
            BookingService::new(&db, business_tz())
                .book(trainee.id, schedule_id)
                .await
        }));
    }

    let mut booked = 0;
    let mut full = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => booked += 1,
            Err(AppError::BadRequest(ref m)) if m == SCHEDULE_FULL => full += 1,
            Err(other) => panic!("unexpected error: {:?}", other),
        }
    }

    assert_eq!(booked, 10);
    assert_eq!(full, 5);

    Ok(())
}
