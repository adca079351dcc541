use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use chrono::Utc;

use crate::{
    model::api::IdDto,
    server::{
        controller::{respond, respond_message},
        error::AppError,
        model::user::User,
        service::{booking::BookingService, schedule::ScheduleService},
        state::AppState,
        util::validate::parse_id,
    },
};

/// GET /api/users/me/schedules - Upcoming classes with the caller's booking state
///
/// # Authentication
/// Requires trainee role
///
/// # Returns
/// - `200 OK`: Classes from the start of today, each with `isBooked`
pub async fn get_schedules(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> Result<impl IntoResponse, AppError> {
    let schedule_service = ScheduleService::new(&state.db, state.timezone);
    let schedules = schedule_service
        .get_trainee_overview(user.id, Utc::now())
        .await?;

    let schedules_dto: Vec<_> = schedules.into_iter().map(|s| s.into_dto()).collect();

    Ok(respond(StatusCode::OK, "Schedules Parsed", schedules_dto))
}

/// POST /api/users/me/schedules/book - Book a class
///
/// # Authentication
/// Requires trainee role
///
/// # Returns
/// - `201 Created`: The booking
/// - `400 Bad Request`: Invalid id, already booked, or class full
/// - `404 Not Found`: No such class
pub async fn book_schedule(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    payload: Result<Json<IdDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(dto) = payload?;
    let schedule_id = parse_id("id", dto.id.as_deref(), "Invalid schedule ID provided")?;

    let booking_service = BookingService::new(&state.db, state.timezone);
    let booking = booking_service.book(user.id, schedule_id).await?;

    Ok(respond(
        StatusCode::CREATED,
        "Schedule Booked Successfully",
        booking.into_dto(),
    ))
}

/// GET /api/users/me/bookings - The caller's upcoming bookings
///
/// # Authentication
/// Requires trainee role
pub async fn get_bookings(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> Result<impl IntoResponse, AppError> {
    let booking_service = BookingService::new(&state.db, state.timezone);
    let bookings = booking_service
        .get_user_bookings(user.id, Utc::now())
        .await?;

    let bookings_dto: Vec<_> = bookings.into_iter().map(|b| b.into_dto()).collect();

    Ok(respond(StatusCode::OK, "Schedules Parsed", bookings_dto))
}

/// POST /api/users/me/bookings/cancel - Cancel one of the caller's bookings
///
/// # Authentication
/// Requires trainee role
///
/// # Returns
/// - `200 OK`: Booking deleted
/// - `400 Bad Request`: Invalid id
/// - `401 Unauthorized`: Booking belongs to someone else
/// - `404 Not Found`: No such booking
pub async fn cancel_booking(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    payload: Result<Json<IdDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(dto) = payload?;
    let booking_id = parse_id("id", dto.id.as_deref(), "Invalid booking ID provided")?;

    let booking_service = BookingService::new(&state.db, state.timezone);
    booking_service.cancel(user.id, booking_id).await?;

    Ok(respond_message(StatusCode::OK, "Booking canceled successfully"))
}
