//! Account registration and login.

pub mod password;
pub mod token;

use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParam, LoginParam, RegisterUserParam, Role, User},
    service::auth::token::TokenService,
};

pub const EMAIL_TAKEN: &str = "Email is already registered";

/// Service for password-based authentication.
///
/// Verifies credentials against stored argon2 hashes and issues the signed access
/// token the controller places in the session cookie.
pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
    pub tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Creates a trainee account and issues its access token.
    ///
    /// # Returns
    /// - `Ok((User, token))` - Account created
    /// - `Err(AppError::Conflict)` - Email already registered
    /// - `Err(AppError)` - Database, hashing, or signing error
    pub async fn register(&self, param: RegisterUserParam) -> Result<(User, String), AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&param.email).await?.is_some() {
            return Err(AppError::Conflict(EMAIL_TAKEN.to_string()));
        }

        let password_hash = password::hash_password(&param.password).await?;

        let user = user_repo
            .create(CreateUserParam {
                name: param.name,
                email: param.email,
                password_hash,
                role: Role::Trainee,
            })
            .await
            .map_err(|err| match err {
                AppError::DbErr(db_err)
                    if matches!(db_err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) =>
                {
                    AppError::Conflict(EMAIL_TAKEN.to_string())
                }
                other => other,
            })?;

        let token = self.tokens.issue(&user)?;

        tracing::info!("Registered user {}", user.id);

        Ok((user, token))
    }

    /// Verifies credentials and issues an access token.
    ///
    /// Unknown emails and wrong passwords both fail with `InvalidCredentials`.
    pub async fn login(&self, param: LoginParam) -> Result<(User, String), AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(credentials) = user_repo.find_by_email(&param.email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !password::verify_password(&param.password, &credentials.password_hash).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.tokens.issue(&credentials.user)?;

        Ok((credentials.user, token))
    }
}
