use super::*;

/// Tests finding an existing user by ID.
///
/// Expected: Ok(Some(User)) with matching user data
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .username("testuser")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo.find_by_id(created.id).await;

    assert!(result.is_ok());
    let user_opt = result.unwrap();
    assert!(user_opt.is_some());
    let user = user_opt.unwrap();
    assert_eq!(user.id, created.id);
    assert_eq!(user.username, "testuser");
    assert_eq!(user.token, created.token);

    Ok(())
}

/// Tests querying for a non-existent user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.find_by_id(999).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());

    Ok(())
}
