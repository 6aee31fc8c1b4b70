use super::*;

/// Tests listing the messages of a single group.
///
/// Verifies that messages of other groups are excluded and that the
/// remaining messages come back oldest first.
///
/// Expected: Ok with only the group's messages, ordered by ID
#[tokio::test]
async fn returns_only_messages_of_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, group, first) = factory::helpers::create_message_with_dependencies(db).await?;
    let second = factory::message::MessageFactory::new(db, group.id, user.id)
        .content("second")
        .build()
        .await?;

    let other_group = factory::create_group(db).await?;
    factory::create_message(db, other_group.id, user.id).await?;

    let messages = MessageRepository::new(db).get_by_group_id(group.id).await?;

    let ids: Vec<i32> = messages.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert!(messages.iter().all(|m| m.group_id == group.id));

    Ok(())
}

/// Tests listing messages for a group that has none.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_group_without_messages() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_chat_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;

    let messages = MessageRepository::new(db).get_by_group_id(group.id).await?;

    assert!(messages.is_empty());

    Ok(())
}
