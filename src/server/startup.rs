use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParam, Role},
    service::auth::password,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Ensures an admin account exists.
///
/// When no admin exists and admin credentials are configured, either promotes the
/// account already registered under that email or creates a new admin account.
/// Without configured credentials a warning is logged instead, since admin-only
/// routes are unreachable until an admin exists.
///
/// # Returns
/// - `Ok(())` - An admin exists or none could be seeded
/// - `Err(AppError)` - Database or password hashing error
pub async fn check_for_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let user_repo = UserRepository::new(db);

    if user_repo.admin_exists().await? {
        return Ok(());
    }

    let Some(seed) = &config.admin else {
        tracing::warn!(
            "No admin account exists. Set ADMIN_EMAIL and ADMIN_PASSWORD to create one on startup."
        );
        return Ok(());
    };

    if let Some(existing) = user_repo.find_by_email(&seed.email).await? {
        user_repo.set_role(existing.user.id, Role::Admin).await?;
        tracing::info!("Promoted existing user {} to admin", seed.email);
        return Ok(());
    }

    let password_hash = password::hash_password(&seed.password).await?;
    user_repo
        .create(CreateUserParam {
            name: seed.name.clone(),
            email: seed.email.clone(),
            password_hash,
            role: Role::Admin,
        })
        .await?;

    tracing::info!("Created admin account {}", seed.email);

    Ok(())
}
