use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Stored role string does not name a known role.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to parse role from String '{value}'")]
    ParseRole {
        /// The string value that failed to parse
        value: String,
    },

    /// Password hashing or hash parsing failed.
    ///
    /// Occurs when argon2 cannot hash a new password or the stored hash is not a
    /// valid PHC string.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// A blocking task (password hashing) panicked or was cancelled.
    #[error("Blocking task failed: {0}")]
    BlockingTask(#[from] tokio::task::JoinError),
}
