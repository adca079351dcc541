//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Token service for signing and verifying access tokens
//! - Cookie attributes for the access token cookie
//! - Business timezone for calendar-day calculations

use chrono_tz::Tz;
use sea_orm::DatabaseConnection;

use crate::server::{config::CookieConfig, service::auth::token::TokenService};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a connection pool whose
/// clones share the pool, and the token keys are small byte buffers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Issues and verifies the JWTs carried in the access token cookie.
    pub tokens: TokenService,

    /// Attributes applied whenever the access token cookie is set or cleared.
    pub cookie: CookieConfig,

    /// Zone whose calendar days bound the daily class limit and the upcoming views.
    pub timezone: Tz,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `tokens` - Access token service
    /// - `cookie` - Access token cookie attributes
    /// - `timezone` - Business timezone
    pub fn new(
        db: DatabaseConnection,
        tokens: TokenService,
        cookie: CookieConfig,
        timezone: Tz,
    ) -> Self {
        Self {
            db,
            tokens,
            cookie,
            timezone,
        }
    }
}
