use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use uuid::Uuid;

use crate::{model::api::ErrorDetailsDto, server::error::error_response};

#[derive(Error, Debug)]
pub enum AuthError {
    /// No access token cookie was sent with a protected request.
    ///
    /// Results in a 401 Unauthorized response asking the user to log in.
    #[error("Request has no access token")]
    Unauthenticated,

    /// The access token was malformed, expired, or signed with another secret.
    ///
    /// Results in a 401 Unauthorized response. The cookie is cleared by the guard.
    #[error("Access token failed verification")]
    InvalidToken,

    /// The access token names a user that no longer exists.
    #[error("User {0} from access token not found in database")]
    UserNotInDatabase(Uuid),

    /// Register or login was attempted while a valid session cookie is present.
    #[error("User is already logged in")]
    AlreadyLoggedIn,

    /// Email unknown, password mismatch, or a malformed login form.
    ///
    /// These cases share one response so that callers cannot probe which emails exist.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The authenticated user does not hold the role the route requires.
    ///
    /// Results in a 403 Forbidden response naming the required role.
    #[error("User {user_id} lacks required role {required}")]
    AccessDenied { user_id: Uuid, required: String },

    /// A trainee tried to cancel a booking held by someone else.
    #[error("User {0} does not own the booking")]
    NotBookingOwner(Uuid),
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level for diagnostics while keeping client-facing
/// messages generic.
///
/// # Returns
/// - 400 Bad Request - For `AlreadyLoggedIn`
/// - 401 Unauthorized - For missing, invalid, or orphaned tokens, bad credentials
///   and foreign bookings
/// - 403 Forbidden - For `AccessDenied`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::Unauthenticated => error_response(
                StatusCode::UNAUTHORIZED,
                "Unauthenticated Request",
                Some(ErrorDetailsDto::Message(
                    "You need to login to perform this action".to_string(),
                )),
            ),
            Self::InvalidToken | Self::UserNotInDatabase(_) => error_response(
                StatusCode::UNAUTHORIZED,
                "Authentication failed!",
                Some(ErrorDetailsDto::Message(
                    "Your session is invalid or has expired, please login again".to_string(),
                )),
            ),
            Self::AlreadyLoggedIn => error_response(
                StatusCode::BAD_REQUEST,
                "You are already Logged In",
                None,
            ),
            Self::InvalidCredentials => {
                error_response(StatusCode::UNAUTHORIZED, "Invalid Credentials", None)
            }
            Self::AccessDenied { required, .. } => error_response(
                StatusCode::FORBIDDEN,
                "Unauthorized Request",
                Some(ErrorDetailsDto::Message(format!(
                    "You must be {} to perform this action",
                    with_article(&required)
                ))),
            ),
            Self::NotBookingOwner(_) => error_response(
                StatusCode::UNAUTHORIZED,
                "Unauthorized Request",
                Some(ErrorDetailsDto::Message(
                    "You can only cancel your own bookings".to_string(),
                )),
            ),
        }
    }
}

fn with_article(role: &str) -> String {
    match role.chars().next() {
        Some('a' | 'e' | 'i' | 'o' | 'u') => format!("an {}", role),
        _ => format!("a {}", role),
    }
}
