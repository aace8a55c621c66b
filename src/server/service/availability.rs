//! Free slot computation for a court on a calendar date.
//!
//! Candidate slots come from the court's schedule entry for the date's weekday. A slot is
//! taken when a non-cancelled booking starts at exactly the same instant.

use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::DatabaseConnection;
use std::collections::HashSet;

use crate::server::{
    data::{
        booking::BookingRepository, court::CourtRepository,
        schedule_entry::ScheduleEntryRepository,
    },
    error::AppError,
    model::{availability::AvailableSlot, schedule::Slots},
    service::court::court_not_found,
    util::time::{at_minutes, day_bounds, weekday_index},
};

pub struct AvailabilityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AvailabilityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Candidate slot starts for a court on a date
    ///
    /// # Returns
    /// - `Ok(Slots)`: Slot starts in minutes since midnight; empty when the court has no
    ///   schedule for the date's weekday
    pub async fn candidate_slots(&self, court_id: i32, date: NaiveDate) -> Result<Slots, AppError> {
        let repo = ScheduleEntryRepository::new(self.db);

        let entry = repo
            .find_by_court_and_weekday(court_id, weekday_index(date))
            .await?;

        Ok(entry.map(|e| e.slots()).unwrap_or_default())
    }

    /// Free slots for a court on a date, in ascending order
    ///
    /// # Returns
    /// - `Ok(Vec<AvailableSlot>)`: Unbooked slots
    /// - `Err(AppError::NotFound)`: Court does not exist
    pub async fn get_available(
        &self,
        court_id: i32,
        date: NaiveDate,
    ) -> Result<Vec<AvailableSlot>, AppError> {
        if !CourtRepository::new(self.db).exists(court_id).await? {
            return Err(court_not_found(court_id));
        }

        let slots = self.candidate_slots(court_id, date).await?;

        let (from, to) = day_bounds(date);
        let occupied: HashSet<NaiveDateTime> = BookingRepository::new(self.db)
            .get_active_by_court_between(court_id, from, to)
            .await?
            .into_iter()
            .map(|b| b.start_at)
            .collect();

        Ok(free_slots(date, slots, &occupied))
    }
}

/// Keeps the slots whose start instant on `date` is not in `occupied`.
pub fn free_slots(
    date: NaiveDate,
    slots: impl Iterator<Item = u32>,
    occupied: &HashSet<NaiveDateTime>,
) -> Vec<AvailableSlot> {
    slots
        .filter(|start| !occupied.contains(&at_minutes(date, *start)))
        .map(|start| AvailableSlot { start })
        .collect()
}
