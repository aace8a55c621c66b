//! Schedule entry factory for creating weekly opening rules.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test schedule entries with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let entry = ScheduleEntryFactory::new(&db, court.id, 6)
///     .hours("08:00", "22:00")
///     .slot_minutes(90)
///     .build()
///     .await?;
/// ```
pub struct ScheduleEntryFactory<'a> {
    db: &'a DatabaseConnection,
    court_id: i32,
    weekday: i32,
    opening: String,
    closing: String,
    slot_minutes: i32,
}

impl<'a> ScheduleEntryFactory<'a> {
    /// Creates a new ScheduleEntryFactory with default values.
    ///
    /// Defaults:
    /// - opening: `"09:00"`
    /// - closing: `"11:00"`
    /// - slot_minutes: `60`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `court_id` - Court the entry belongs to
    /// - `weekday` - Day of the week (0 = Sunday .. 6 = Saturday)
    pub fn new(db: &'a DatabaseConnection, court_id: i32, weekday: i32) -> Self {
        Self {
            db,
            court_id,
            weekday,
            opening: "09:00".to_string(),
            closing: "11:00".to_string(),
            slot_minutes: 60,
        }
    }

    /// Sets the opening and closing times ("HH:MM").
    pub fn hours(mut self, opening: impl Into<String>, closing: impl Into<String>) -> Self {
        self.opening = opening.into();
        self.closing = closing.into();
        self
    }

    /// Sets the slot duration in minutes.
    pub fn slot_minutes(mut self, slot_minutes: i32) -> Self {
        self.slot_minutes = slot_minutes;
        self
    }

    /// Builds and inserts the schedule entry into the database.
    pub async fn build(self) -> Result<entity::schedule_entry::Model, DbErr> {
        entity::schedule_entry::ActiveModel {
            id: ActiveValue::NotSet,
            court_id: ActiveValue::Set(self.court_id),
            weekday: ActiveValue::Set(self.weekday),
            opening: ActiveValue::Set(self.opening),
            closing: ActiveValue::Set(self.closing),
            slot_minutes: ActiveValue::Set(self.slot_minutes),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a schedule entry with default hours for the court and weekday.
pub async fn create_schedule_entry(
    db: &DatabaseConnection,
    court_id: i32,
    weekday: i32,
) -> Result<entity::schedule_entry::Model, DbErr> {
    ScheduleEntryFactory::new(db, court_id, weekday)
        .build()
        .await
}
