//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a scout, an event and a pending registration linking the two.
///
/// All entities are created with default values. Use the individual factories
/// if specific fields matter to the test.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((scout, event, registration))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_registration_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::scout::Model,
        entity::event::Model,
        entity::registration::Model,
    ),
    DbErr,
> {
    let scout = crate::factory::scout::create_scout(db).await?;
    let event = crate::factory::event::create_event(db).await?;
    let registration =
        crate::factory::registration::create_registration(db, scout.id, event.id).await?;

    Ok((scout, event, registration))
}
