//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a court that is open on the given weekday.
///
/// The schedule uses the factory defaults: 09:00 to 11:00 with 60 minute slots.
///
/// # Arguments
/// - `db` - Database connection
/// - `weekday` - Day of the week the court opens (0 = Sunday)
///
/// # Returns
/// - `Ok((court, schedule_entry))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_open_court(
    db: &DatabaseConnection,
    weekday: i32,
) -> Result<(entity::court::Model, entity::schedule_entry::Model), DbErr> {
    let court = crate::factory::court::create_court(db).await?;
    let entry =
        crate::factory::schedule_entry::create_schedule_entry(db, court.id, weekday).await?;

    Ok((court, entry))
}
