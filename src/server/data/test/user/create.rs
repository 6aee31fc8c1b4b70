use super::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

/// Tests creating a new user.
///
/// Verifies that the repository inserts a row with the given username and token
/// and stamps both timestamps with the same instant.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParam {
            username: "testuser".to_string(),
            token: "abcd1234".to_string(),
        })
        .await;

    assert!(result.is_ok());
    let user = result.unwrap();
    assert!(user.id > 0);
    assert_eq!(user.username, "testuser");
    assert_eq!(user.token, "abcd1234");
    assert_eq!(user.created_at, user.updated_at);

    // Exactly one row carries the token
    let count = entity::prelude::User::find()
        .filter(entity::user::Column::Token.eq("abcd1234"))
        .count(db)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests creating a user whose token is already taken.
///
/// Verifies that the unique constraint on token rejects the second insert
/// and leaves only the first row in place.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_for_duplicate_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .token("abcd1234")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParam {
            username: "someone_else".to_string(),
            token: "abcd1234".to_string(),
        })
        .await;

    assert!(result.is_err());

    let count = entity::prelude::User::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
