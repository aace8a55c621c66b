use sea_orm::DatabaseConnection;

use crate::server::{
    data::{court::CourtRepository, schedule_entry::ScheduleEntryRepository},
    error::AppError,
    model::schedule::{ScheduleEntry, UpsertScheduleEntryParams},
    service::court::court_not_found,
};

pub struct ScheduleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScheduleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the weekly schedule of a court
    pub async fn get_by_court(&self, court_id: i32) -> Result<Vec<ScheduleEntry>, AppError> {
        if !CourtRepository::new(self.db).exists(court_id).await? {
            return Err(court_not_found(court_id));
        }

        let repo = ScheduleEntryRepository::new(self.db);

        Ok(repo.get_by_court(court_id).await?)
    }

    /// Sets the opening window of a court for one weekday
    ///
    /// Existing bookings are left as they are even if they no longer fit the new window.
    ///
    /// # Returns
    /// - `Ok((ScheduleEntry, true))`: A new entry was created
    /// - `Ok((ScheduleEntry, false))`: The weekday's existing entry was replaced
    /// - `Err(AppError::NotFound)`: Court does not exist
    pub async fn upsert(
        &self,
        params: UpsertScheduleEntryParams,
    ) -> Result<(ScheduleEntry, bool), AppError> {
        if !CourtRepository::new(self.db).exists(params.court_id).await? {
            return Err(court_not_found(params.court_id));
        }

        let repo = ScheduleEntryRepository::new(self.db);
        let (entry, created) = repo.upsert(params).await?;

        tracing::info!(
            "{} schedule entry {} for court {} on weekday {}",
            if created { "Created" } else { "Updated" },
            entry.id,
            entry.court_id,
            entry.weekday
        );

        Ok((entry, created))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = ScheduleEntryRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(AppError::NotFound(format!(
                "Schedule entry {} not found",
                id
            )));
        }

        Ok(())
    }
}
