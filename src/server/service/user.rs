//! User service for business logic.
//!
//! This module provides the `UserService` for listing accounts and moving users
//! between the trainer and trainee roles.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{Role, User},
};

pub const USER_NOT_FOUND: &str = "User not found";
pub const ALREADY_TRAINER: &str = "User is already a Trainer";
pub const ALREADY_TRAINEE: &str = "User is already a Trainee";

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all users ordered by name.
    pub async fn get_all_users(&self) -> Result<Vec<User>, AppError> {
        UserRepository::new(self.db).get_all().await
    }

    /// Gives a user the trainer role.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::Conflict)` - User is already a trainer
    pub async fn upgrade_to_trainer(&self, user_id: Uuid) -> Result<User, AppError> {
        self.change_role(user_id, Role::Trainer, ALREADY_TRAINER)
            .await
    }

    /// Gives a user the trainee role.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::Conflict)` - User is already a trainee
    pub async fn downgrade_to_trainee(&self, user_id: Uuid) -> Result<User, AppError> {
        self.change_role(user_id, Role::Trainee, ALREADY_TRAINEE)
            .await
    }

    async fn change_role(
        &self,
        user_id: Uuid,
        role: Role,
        already_message: &str,
    ) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AppError::NotFound(USER_NOT_FOUND.to_string()));
        };

        if user.role == role {
            return Err(AppError::Conflict(already_message.to_string()));
        }

        let updated = user_repo.set_role(user_id, role).await?;

        tracing::info!("Changed role of user {} from {} to {}", user_id, user.role, role);

        Ok(updated)
    }
}
