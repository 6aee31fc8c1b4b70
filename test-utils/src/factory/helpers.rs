//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values across factories.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a message together with the user who sent it and the group it was posted to.
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, group, message))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_message_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::group::Model,
        entity::message::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let group = crate::factory::group::create_group(db).await?;
    let message = crate::factory::message::create_message(db, group.id, user.id).await?;

    Ok((user, group, message))
}
