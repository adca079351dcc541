mod model;
mod server;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, router, service::auth::token::TokenService, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    startup::check_for_admin(&db, &config).await?;

    let state = AppState::new(
        db,
        TokenService::new(&config.jwt_secret),
        config.cookie(),
        config.timezone,
    );

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;

    tracing::info!(
        "Starting server on port {} (business timezone {})",
        config.port,
        config.timezone
    );

    axum::serve(listener, router::router(state)).await?;

    Ok(())
}
