//! User domain models and parameter types.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use garde::Validate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    model::user::{LoginUserDto, RegisterUserDto, UserDto},
    server::{
        error::{auth::AuthError, AppError},
        util::parse::parse_role_from_string,
    },
};

/// Access level of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Trainer,
    Trainee,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Trainer => "trainer",
            Self::Trainee => "trainee",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "trainer" => Ok(Self::Trainer),
            "trainee" => Ok(Self::Trainee),
            _ => Err(()),
        }
    }
}

/// Account as seen by the rest of the application. Never carries the password hash.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role.to_string(),
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - Successfully converted user
    /// - `Err(AppError::InternalErr(ParseRole))` - Stored role is not a known role
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let role = parse_role_from_string(entity.role)?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            role,
            created_at: entity.created_at,
        })
    }
}

/// A user together with their stored password hash, used only during login.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

impl UserCredentials {
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let password_hash = entity.password_hash.clone();

        Ok(Self {
            user: User::from_entity(entity)?,
            password_hash,
        })
    }
}

/// Parameters for inserting a new user row.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Validated registration form.
#[derive(Debug, Clone)]
pub struct RegisterUserParam {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterUserParam {
    /// Validates a registration DTO, reporting the first failing field.
    ///
    /// # Returns
    /// - `Ok(RegisterUserParam)` - Name, email and password are all acceptable
    /// - `Err(AppError::Validation)` - A field is missing or malformed
    pub fn from_dto(dto: RegisterUserDto) -> Result<Self, AppError> {
        dto.validate()?;

        let (Some(name), Some(email), Some(password)) = (dto.name, dto.email, dto.password)
        else {
            return Err(AppError::BadRequest("Validation error occurred.".to_string()));
        };

        Ok(Self {
            name: name.trim().to_string(),
            email: email.to_lowercase(),
            password,
        })
    }
}

/// Validated login form.
#[derive(Debug, Clone)]
pub struct LoginParam {
    pub email: String,
    pub password: String,
}

impl LoginParam {
    /// Validates a login DTO.
    ///
    /// Any failure is reported as invalid credentials rather than a field error.
    pub fn from_dto(dto: LoginUserDto) -> Result<Self, AppError> {
        dto.validate().map_err(|_| AuthError::InvalidCredentials)?;

        let (Some(email), Some(password)) = (dto.email, dto.password) else {
            return Err(AuthError::InvalidCredentials.into());
        };

        Ok(Self {
            email: email.to_lowercase(),
            password,
        })
    }
}
