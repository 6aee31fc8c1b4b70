use super::*;

/// Tests creating a new group.
///
/// Expected: Ok with group created and both timestamps equal
#[tokio::test]
async fn creates_new_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);
    let result = repo
        .create(CreateGroupParam {
            name: "testgroup".to_string(),
        })
        .await;

    assert!(result.is_ok());
    let group = result.unwrap();
    assert!(group.id > 0);
    assert_eq!(group.name, "testgroup");
    assert_eq!(group.created_at, group.updated_at);

    Ok(())
}

/// Tests creating two groups with the same name.
///
/// Group names carry no uniqueness constraint.
///
/// Expected: Ok for both with distinct IDs
#[tokio::test]
async fn allows_duplicate_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);
    let first = repo
        .create(CreateGroupParam {
            name: "general".to_string(),
        })
        .await?;
    let second = repo
        .create(CreateGroupParam {
            name: "general".to_string(),
        })
        .await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
