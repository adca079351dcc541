use axum::{extract::State, http::StatusCode, response::IntoResponse, Extension};
use chrono::Utc;

use crate::server::{
    controller::respond, error::AppError, model::user::User, service::schedule::ScheduleService,
    state::AppState,
};

/// GET /api/trainer/schedules - The caller's own upcoming classes
///
/// # Authentication
/// Requires trainer role
pub async fn get_schedules(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> Result<impl IntoResponse, AppError> {
    let schedule_service = ScheduleService::new(&state.db, state.timezone);
    let schedules = schedule_service
        .get_trainer_schedules(user.id, Utc::now())
        .await?;

    let schedules_dto: Vec<_> = schedules.into_iter().map(|s| s.into_dto()).collect();

    Ok(respond(StatusCode::OK, "Schedules Parsed", schedules_dto))
}
