use super::*;

/// Tests the existence check for a stored group.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_for_existing_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;

    let exists = GroupRepository::new(db).exists(group.id).await?;

    assert!(exists);

    Ok(())
}

/// Tests the existence check for an unknown group ID.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Group)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_group(db).await?;

    let exists = GroupRepository::new(db).exists(999).await?;

    assert!(!exists);

    Ok(())
}
