use super::*;

/// Tests that setting a role persists it and returns the updated user.
///
/// Expected: Ok(User) with the new role
#[tokio::test]
async fn updates_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = UserRepository::new(db);

    let updated = repo.set_role(user.id, Role::Trainer).await?;
    assert_eq!(updated.role, Role::Trainer);
    assert_eq!(updated.email, user.email);

    let reloaded = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(reloaded.role, Role::Trainer);

    Ok(())
}

/// Tests that setting the role of a missing user fails.
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .set_role(uuid::Uuid::new_v4(), Role::Trainer)
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
