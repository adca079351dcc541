use super::*;
use sea_orm::EntityTrait;

/// Tests creating a user stores every field and returns the domain model.
///
/// Expected: Ok(User) with the given role
#[tokio::test]
async fn creates_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            name: "Tess".to_string(),
            email: "tess@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: Role::Trainee,
        })
        .await?;

    assert_eq!(user.name, "Tess");
    assert_eq!(user.email, "tess@example.com");
    assert_eq!(user.role, Role::Trainee);

    let stored = entity::prelude::User::find_by_id(user.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.password_hash, "hash");
    assert_eq!(stored.role, "trainee");

    Ok(())
}

/// Tests that the unique email constraint rejects a second account.
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let result = UserRepository::new(db)
        .create(CreateUserParam {
            name: "Other".to_string(),
            email: "taken@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: Role::Trainee,
        })
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
