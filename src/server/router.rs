use axum::{
    http::{header, Method},
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_cookies::CookieManagerLayer;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::server::{
    controller::{admin, auth, health, trainer, user},
    middleware::auth::{require_admin, require_authenticated, require_trainee, require_trainer},
    state::AppState,
};

/// Builds the application router.
///
/// Each route table carries the guard for the role it serves, so handlers only
/// run for callers holding that role.
pub fn router(state: AppState) -> Router {
    let public = Router::new()
        .route("/test", get(health))
        .route("/api/users/register", post(auth::register))
        .route("/api/users/login", post(auth::login));

    let authenticated = Router::new()
        .route("/api/users/logout", get(auth::logout))
        .route_layer(from_fn_with_state(state.clone(), require_authenticated));

    let trainee = Router::new()
        .route("/api/users/me/schedules", get(user::get_schedules))
        .route("/api/users/me/schedules/book", post(user::book_schedule))
        .route("/api/users/me/bookings", get(user::get_bookings))
        .route("/api/users/me/bookings/cancel", post(user::cancel_booking))
        .route_layer(from_fn_with_state(state.clone(), require_trainee));

    let admin = Router::new()
        .route("/api/admin/users", get(admin::get_users))
        .route("/api/admin/trainer/upgrade", post(admin::upgrade_to_trainer))
        .route("/api/admin/trainer/downgrade", post(admin::downgrade_to_trainee))
        .route("/api/admin/schedules/new", post(admin::create_schedule))
        .route("/api/admin/schedules", get(admin::get_schedules))
        .route_layer(from_fn_with_state(state.clone(), require_admin));

    let trainer = Router::new()
        .route("/api/trainer/schedules", get(trainer::get_schedules))
        .route_layer(from_fn_with_state(state.clone(), require_trainer));

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .merge(public)
        .merge(authenticated)
        .merge(trainee)
        .merge(admin)
        .merge(trainer)
        .layer(CookieManagerLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
