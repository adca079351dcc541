use super::*;
use crate::server::util::time::start_of_day;

/// Tests the admin view includes classes from earlier today but not yesterday.
///
/// Expected: the class starting at today's local midnight only
#[tokio::test]
async fn admin_overview_starts_at_local_midnight() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::user::create_trainer(db).await?;
    let now = Utc::now();
    let today = start_of_day(&business_tz(), now);

    let todays = factory::class_schedule::ScheduleFactory::new(db, trainer.id)
        .start_time(today)
        .build()
        .await?;
    factory::class_schedule::ScheduleFactory::new(db, trainer.id)
        .start_time(today - Duration::minutes(1))
        .build()
        .await?;

    let overviews = ScheduleService::new(db, business_tz())
        .get_admin_overview(now)
        .await?;

    assert_eq!(overviews.len(), 1);
    assert_eq!(overviews[0].schedule.id, todays.id);
    assert_eq!(overviews[0].is_booked, None);

    Ok(())
}

/// Tests the trainee view marks the classes the viewer booked.
///
/// Expected: is_booked true only for the viewer's class; counts include everyone
#[tokio::test]
async fn trainee_overview_marks_booked_classes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::user::create_trainer(db).await?;
    let booked = factory::class_schedule::ScheduleFactory::new(db, trainer.id)
        .start_time(local_time(2, 10, 0))
        .build()
        .await?;
    let open = factory::class_schedule::ScheduleFactory::new(db, trainer.id)
        .start_time(local_time(2, 14, 0))
        .build()
        .await?;

    let trainee = factory::user::create_user(db).await?;
    factory::create_booking(db, trainee.id, booked.id).await?;
    factory::helpers::fill_schedule(db, open.id, 2).await?;

    let overviews = ScheduleService::new(db, business_tz())
        .get_trainee_overview(trainee.id, Utc::now())
        .await?;

    assert_eq!(overviews.len(), 2);

    assert_eq!(overviews[0].schedule.id, booked.id);
    assert_eq!(overviews[0].is_booked, Some(true));
    assert_eq!(overviews[0].booked_count, 1);

    assert_eq!(overviews[1].schedule.id, open.id);
    assert_eq!(overviews[1].is_booked, Some(false));
    assert_eq!(overviews[1].booked_count, 2);

    Ok(())
}

/// Tests the trainer view lists only the trainer's own classes.
///
/// Expected: one class
#[tokio::test]
async fn trainer_sees_own_classes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let trainer = factory::user::create_trainer(db).await?;
    let other = factory::user::create_trainer(db).await?;
    let own = factory::create_schedule(db, trainer.id).await?;
    factory::create_schedule(db, other.id).await?;

    let schedules = ScheduleService::new(db, business_tz())
        .get_trainer_schedules(trainer.id, Utc::now())
        .await?;

    assert_eq!(schedules.len(), 1);
    assert_eq!(schedules[0].id, own.id);

    Ok(())
}
