use super::*;

/// Tests that a deleted booking can no longer be found.
///
/// Expected: Ok(None) after delete
#[tokio::test]
async fn deletes_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_trainer, schedule) = factory::helpers::create_schedule_with_trainer(db).await?;
    let trainee = factory::user::create_user(db).await?;
    let booking = factory::create_booking(db, trainee.id, schedule.id).await?;

    let repo = BookingRepository::new(db);
    repo.delete(booking.id).await?;

    assert!(repo.find_by_id(booking.id).await?.is_none());

    Ok(())
}
