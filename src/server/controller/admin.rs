use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    model::{api::IdDto, schedule::CreateScheduleDto},
    server::{
        controller::{respond, respond_message},
        error::AppError,
        model::class_schedule::CreateClassScheduleParam,
        service::{schedule::ScheduleService, user::UserService},
        state::AppState,
        util::validate::parse_id,
    },
};

const INVALID_USER_ID: &str = "Invalid user ID provided";

/// GET /api/admin/users - List all users
///
/// # Authentication
/// Requires admin role
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let user_service = UserService::new(&state.db);
    let users = user_service.get_all_users().await?;

    let users_dto: Vec<_> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok(respond(StatusCode::OK, "Users Parsed Successfully", users_dto))
}

/// POST /api/admin/trainer/upgrade - Give a user the trainer role
///
/// # Authentication
/// Requires admin role
///
/// # Returns
/// - `200 OK`: Role changed
/// - `400 Bad Request`: Invalid id
/// - `404 Not Found`: No such user
/// - `409 Conflict`: User is already a trainer
pub async fn upgrade_to_trainer(
    State(state): State<AppState>,
    payload: Result<Json<IdDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(dto) = payload?;
    let user_id = parse_id("id", dto.id.as_deref(), INVALID_USER_ID)?;

    UserService::new(&state.db)
        .upgrade_to_trainer(user_id)
        .await?;

    Ok(respond_message(StatusCode::OK, "User upgraded to Trainer"))
}

/// POST /api/admin/trainer/downgrade - Give a user the trainee role
///
/// # Authentication
/// Requires admin role
///
/// # Returns
/// - `200 OK`: Role changed
/// - `400 Bad Request`: Invalid id
/// - `404 Not Found`: No such user
/// - `409 Conflict`: User is already a trainee
pub async fn downgrade_to_trainee(
    State(state): State<AppState>,
    payload: Result<Json<IdDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(dto) = payload?;
    let user_id = parse_id("id", dto.id.as_deref(), INVALID_USER_ID)?;

    UserService::new(&state.db)
        .downgrade_to_trainee(user_id)
        .await?;

    Ok(respond_message(StatusCode::OK, "User downgraded to Trainee"))
}

/// POST /api/admin/schedules/new - Create a class
///
/// # Authentication
/// Requires admin role
///
/// # Returns
/// - `201 Created`: The class with its computed end time
/// - `400 Bad Request`: Invalid field, start time passed, day full, or overlap
/// - `404 Not Found`: Trainer missing or not a trainer
pub async fn create_schedule(
    State(state): State<AppState>,
    payload: Result<Json<CreateScheduleDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(dto) = payload?;
    let param = CreateClassScheduleParam::from_dto(dto)?;

    let schedule_service = ScheduleService::new(&state.db, state.timezone);
    let schedule = schedule_service.create(param, Utc::now()).await?;

    Ok(respond(
        StatusCode::CREATED,
        "Schedule Created Successfully",
        schedule.into_dto(),
    ))
}

/// GET /api/admin/schedules - Upcoming classes with trainers and booking counts
///
/// # Authentication
/// Requires admin role
pub async fn get_schedules(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let schedule_service = ScheduleService::new(&state.db, state.timezone);
    let schedules = schedule_service.get_admin_overview(Utc::now()).await?;

    let schedules_dto: Vec<_> = schedules.into_iter().map(|s| s.into_dto()).collect();

    Ok(respond(StatusCode::OK, "Schedules Parsed", schedules_dto))
}
