//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` so every failure leaves the server in the same JSON envelope.

pub mod auth;
pub mod config;
pub mod internal;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::{
        api::{ErrorDetailsDto, ErrorDto},
        validate::MISSING_FIELD,
    },
    server::error::{auth::AuthError, config::ConfigError, internal::InternalError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. Domain-specific errors like `AuthError` handle their own response
/// mapping, while generic variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for custom status code mapping
    /// (400, 401 or 403).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Unexpected internal state, such as an unknown role stored for a user.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Failure to sign an access token.
    #[error(transparent)]
    TokenErr(#[from] jsonwebtoken::errors::Error),

    /// Failure to bind or serve the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Request body was missing, not JSON, or did not match the expected shape.
    ///
    /// Results in 400 Bad Request using the same envelope as field validation errors.
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),

    /// A request field failed validation.
    ///
    /// Results in 400 Bad Request with the field and reason attached as details.
    #[error("{field}: {message}")]
    Validation { field: String, message: String },

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Request violated a business rule.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Request conflicts with the current state of a resource.
    ///
    /// Results in 409 Conflict with the provided error message.
    #[error("{0}")]
    Conflict(String),
}

impl AppError {
    /// Builds a validation error for `field`.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Reports the first failing field of a DTO.
impl From<garde::Report> for AppError {
    fn from(report: garde::Report) -> Self {
        let Some((path, error)) = report.iter().next() else {
            return Self::BadRequest("Validation error occurred.".to_string());
        };

        let field = wire_name(&path.to_string());
        let message = if error.message() == MISSING_FIELD {
            format!("{} {}", field, MISSING_FIELD)
        } else {
            error.message().to_string()
        };

        Self::validation(field, message)
    }
}

/// camelCase spelling of a struct field, as clients send it.
fn wire_name(field: &str) -> String {
    let mut name = String::with_capacity(field.len());
    let mut upper = false;

    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            name.extend(c.to_uppercase());
            upper = false;
        } else {
            name.push(c);
        }
    }

    name
}

/// Builds an error response in the shared envelope.
pub(crate) fn error_response(
    status: StatusCode,
    message: impl Into<String>,
    details: Option<ErrorDetailsDto>,
) -> Response {
    (
        status,
        Json(ErrorDto::new(status.as_u16(), message, details)),
    )
        .into_response()
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `Validation`, `JsonRejection` and `BadRequest`
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `Conflict`
/// - 500 Internal Server Error - For all other error types (DbErr, TokenErr, etc.)
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::Validation { field, message } => error_response(
                StatusCode::BAD_REQUEST,
                "Validation error occurred.",
                Some(ErrorDetailsDto::Field { field, message }),
            ),
            Self::JsonRejection(rejection) => error_response(
                StatusCode::BAD_REQUEST,
                "Validation error occurred.",
                Some(ErrorDetailsDto::Message(rejection.body_text())),
            ),
            Self::NotFound(msg) => error_response(StatusCode::NOT_FOUND, msg, None),
            Self::BadRequest(msg) => error_response(StatusCode::BAD_REQUEST, msg, None),
            Self::Conflict(msg) => error_response(StatusCode::CONFLICT, msg, None),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal Server Error" message
/// to the client. Used as a fallback for errors that don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error",
            None,
        )
    }
}
