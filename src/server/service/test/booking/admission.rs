use super::*;

fn bookings_by(users: &[Uuid]) -> Vec<Booking> {
    let schedule_id = Uuid::new_v4();

    users
        .iter()
        .map(|&user_id| Booking {
            id: Uuid::new_v4(),
            user_id,
            schedule_id,
            created_at: Utc::now(),
        })
        .collect()
}

#[test]
fn admits_tenth_booking() {
    let others: Vec<_> = (0..9).map(|_| Uuid::new_v4()).collect();

    assert!(check_booking_admission(Uuid::new_v4(), &bookings_by(&others)).is_ok());
}

#[test]
fn rejects_eleventh_booking() {
    let others: Vec<_> = (0..10).map(|_| Uuid::new_v4()).collect();

    let result = check_booking_admission(Uuid::new_v4(), &bookings_by(&others));

    assert!(matches!(result, Err(AppError::BadRequest(ref m)) if m == SCHEDULE_FULL));
}

#[test]
fn duplicate_reported_before_capacity() {
    let user_id = Uuid::new_v4();
    let mut users: Vec<_> = (0..9).map(|_| Uuid::new_v4()).collect();
    users.push(user_id);

    let result = check_booking_admission(user_id, &bookings_by(&users));

    assert!(matches!(result, Err(AppError::BadRequest(ref m)) if m == ALREADY_BOOKED));
}
