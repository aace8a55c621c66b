//! Booking factory for creating test booking entities.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let booking = BookingFactory::new(&db, court.id, "user-a")
///     .start_at(date.and_hms_opt(10, 0, 0).unwrap())
///     .status("Cancelled")
///     .build()
///     .await?;
/// ```
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    court_id: i32,
    owner_id: String,
    start_at: NaiveDateTime,
    duration: Duration,
    status: String,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - start_at: 2030-01-07 09:00 (a Monday)
    /// - duration: 60 minutes
    /// - status: `"Confirmed"`
    pub fn new(db: &'a DatabaseConnection, court_id: i32, owner_id: impl Into<String>) -> Self {
        let start_at = NaiveDate::from_ymd_opt(2030, 1, 7)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(9, 0, 0).unwrap());

        Self {
            db,
            court_id,
            owner_id: owner_id.into(),
            start_at,
            duration: Duration::minutes(60),
            status: "Confirmed".to_string(),
        }
    }

    /// Sets the slot start time.
    pub fn start_at(mut self, start_at: NaiveDateTime) -> Self {
        self.start_at = start_at;
        self
    }

    /// Sets the slot duration used to derive the end time.
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the booking status ("Confirmed" or "Cancelled").
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the booking entity into the database.
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        let now = Utc::now();

        entity::booking::ActiveModel {
            id: ActiveValue::NotSet,
            court_id: ActiveValue::Set(self.court_id),
            owner_id: ActiveValue::Set(self.owner_id),
            start_at: ActiveValue::Set(self.start_at),
            end_at: ActiveValue::Set(self.start_at + self.duration),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a confirmed booking with default timing for the court and owner.
pub async fn create_booking(
    db: &DatabaseConnection,
    court_id: i32,
    owner_id: impl Into<String>,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, court_id, owner_id).build().await
}
