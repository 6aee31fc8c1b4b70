use super::*;

/// Tests posting a message to an existing group.
///
/// Expected: Ok with message stored against the group and user
#[tokio::test]
async fn creates_message_in_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let group = factory::create_group(db).await?;

    let repo = MessageRepository::new(db);
    let result = repo
        .create(SendMessageParam {
            group_id: group.id,
            user_id: user.id,
            content: "Hello Group".to_string(),
        })
        .await;

    assert!(result.is_ok());
    let message = result.unwrap();
    assert_eq!(message.group_id, group.id);
    assert_eq!(message.user_id, user.id);
    assert_eq!(message.content, "Hello Group");
    assert_eq!(message.created_at, message.updated_at);

    Ok(())
}

/// Tests posting a message that references a user who does not exist.
///
/// The sender is stored as given; nothing ties `user_id` to the users table.
///
/// Expected: Ok with the unknown user ID stored
#[tokio::test]
async fn accepts_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;

    let result = MessageRepository::new(db)
        .create(SendMessageParam {
            group_id: group.id,
            user_id: 999,
            content: "Hello Group".to_string(),
        })
        .await?;

    assert_eq!(result.user_id, 999);
    assert_eq!(result.group_id, group.id);

    Ok(())
}
