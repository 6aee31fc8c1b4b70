use super::*;

/// Tests listing all groups.
///
/// Expected: Ok with every group, including one with a known name
#[tokio::test]
async fn returns_all_groups() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_group(db).await?;
    factory::group::GroupFactory::new(db)
        .name("testgroup")
        .build()
        .await?;

    let groups = GroupRepository::new(db).get_all().await?;

    assert_eq!(groups.len(), 2);
    assert!(groups.iter().any(|g| g.name == "testgroup"));

    Ok(())
}

/// Tests listing groups from an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_groups() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let groups = GroupRepository::new(db).get_all().await?;

    assert!(groups.is_empty());

    Ok(())
}
