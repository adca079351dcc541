use super::*;

/// Tests that creating a class derives a two hour end time.
///
/// Expected: Ok(ClassSchedule) ending two hours after it starts
#[tokio::test]
async fn creates_two_hour_class() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::user::create_trainer(db).await?;
    let start_time = Utc::now() + Duration::days(3);

    let schedule = ClassScheduleRepository::new(db)
        .create(&CreateClassScheduleParam {
            title: "Spin".to_string(),
            start_time,
            trainer_id: trainer.id,
        })
        .await?;

    assert_eq!(schedule.title, "Spin");
    assert_eq!(schedule.trainer_id, trainer.id);
    assert_eq!(schedule.end_time - schedule.start_time, Duration::hours(2));

    let found = ClassScheduleRepository::new(db)
        .find_by_id(schedule.id)
        .await?;
    assert_eq!(found, Some(schedule));

    Ok(())
}
