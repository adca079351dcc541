use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use tower_cookies::Cookies;

use crate::{
    model::user::{LoginUserDto, RegisterUserDto},
    server::{
        controller::{respond, respond_message},
        error::{auth::AuthError, AppError},
        middleware::{auth::AuthGuard, session::AuthCookie},
        model::user::{LoginParam, RegisterUserParam, User},
        service::auth::AuthService,
        state::AppState,
    },
};

/// POST /api/users/register - Create a trainee account and log it in
///
/// # Returns
/// - `201 Created`: The new user, with the access token cookie set
/// - `400 Bad Request`: Invalid field, or request already logged in
/// - `409 Conflict`: Email already registered
pub async fn register(
    State(state): State<AppState>,
    cookies: Cookies,
    payload: Result<Json<RegisterUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &cookies).ensure_logged_out()?;

    let Json(dto) = payload?;
    let param = RegisterUserParam::from_dto(dto)?;

    let auth_service = AuthService::new(&state.db, &state.tokens);
    let (user, token) = auth_service.register(param).await?;

    AuthCookie::new(&cookies, state.cookie).set_token(token);

    Ok(respond(
        StatusCode::CREATED,
        "Registration Successful!",
        user.into_dto(),
    ))
}

/// POST /api/users/login - Log in with email and password
///
/// # Returns
/// - `200 OK`: The user, with the access token cookie set
/// - `400 Bad Request`: Request already logged in
/// - `401 Unauthorized`: Malformed form, unknown email, or wrong password
pub async fn login(
    State(state): State<AppState>,
    cookies: Cookies,
    payload: Result<Json<LoginUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &cookies).ensure_logged_out()?;

    let Json(dto) = payload.map_err(|_| AuthError::InvalidCredentials)?;
    let param = LoginParam::from_dto(dto)?;

    let auth_service = AuthService::new(&state.db, &state.tokens);
    let (user, token) = auth_service.login(param).await?;

    AuthCookie::new(&cookies, state.cookie).set_token(token);

    Ok(respond(StatusCode::OK, "Login Successful!", user.into_dto()))
}

/// GET /api/users/logout - Clear the access token cookie
///
/// # Authentication
/// Requires any logged in user
pub async fn logout(
    State(state): State<AppState>,
    cookies: Cookies,
    Extension(user): Extension<User>,
) -> Result<impl IntoResponse, AppError> {
    AuthCookie::new(&cookies, state.cookie).clear();

    tracing::debug!("User {} logged out", user.id);

    Ok(respond_message(StatusCode::OK, "Logout Successful"))
}
