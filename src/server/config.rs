use chrono_tz::Tz;
use tower_cookies::cookie::SameSite;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_TIMEZONE: &str = "Asia/Dhaka";
const DEFAULT_ADMIN_NAME: &str = "Administrator";

pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub port: u16,

    /// Set when `NODE_ENV=production`; switches cookies to `Secure; SameSite=None`.
    pub production: bool,
    /// Zone whose midnights delimit the calendar days used by schedule limits.
    pub timezone: Tz,

    pub admin: Option<AdminSeed>,
}

/// Credentials for the admin account created on first start.
pub struct AdminSeed {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Attributes applied to the access token cookie.
#[derive(Clone, Copy, Debug)]
pub struct CookieConfig {
    pub secure: bool,
    pub same_site: SameSite,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let port = match optional_var("PORT") {
            Some(port) => port.parse::<u16>().map_err(|e| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let timezone_name =
            optional_var("BUSINESS_TIMEZONE").unwrap_or_else(|| DEFAULT_TIMEZONE.to_string());
        let timezone = timezone_name
            .parse::<Tz>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "BUSINESS_TIMEZONE".to_string(),
                reason: e.to_string(),
            })?;

        let admin = match (optional_var("ADMIN_EMAIL"), optional_var("ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => {
                Some(AdminSeed::new(optional_var("ADMIN_NAME"), &email, password))
            }
            _ => None,
        };

        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            jwt_secret: required_var("JWT_SECRET")?,
            port,
            production: optional_var("NODE_ENV").as_deref() == Some("production"),
            timezone,
            admin,
        })
    }

    pub fn cookie(&self) -> CookieConfig {
        CookieConfig::new(self.production)
    }
}

impl AdminSeed {
    /// Normalises the email the same way registration and login do, so the seeded
    /// account can log in and an already registered account is found.
    pub fn new(name: Option<String>, email: &str, password: String) -> Self {
        Self {
            name: name.unwrap_or_else(|| DEFAULT_ADMIN_NAME.to_string()),
            email: email.trim().to_lowercase(),
            password,
        }
    }
}

impl CookieConfig {
    pub fn new(production: bool) -> Self {
        if production {
            Self {
                secure: true,
                same_site: SameSite::None,
            }
        } else {
            Self {
                secure: false,
                same_site: SameSite::Strict,
            }
        }
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads an environment variable, treating empty values as unset.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}
