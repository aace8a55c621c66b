use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    data::is_unique_violation,
    model::schedule::{ScheduleEntry, UpsertScheduleEntryParams},
    util::time::format_minutes,
};

pub struct ScheduleEntryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScheduleEntryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the schedule entry of a court for one day of the week
    ///
    /// # Arguments
    /// - `court_id`: ID of the court
    /// - `weekday`: Day of the week, 0 = Sunday
    ///
    /// # Returns
    /// - `Ok(Some(ScheduleEntry))`: The court opens on that weekday
    /// - `Ok(None)`: The court is closed on that weekday
    /// - `Err(DbErr)`: Database error or malformed stored times
    pub async fn find_by_court_and_weekday(
        &self,
        court_id: i32,
        weekday: i32,
    ) -> Result<Option<ScheduleEntry>, DbErr> {
        self.find_model(court_id, weekday)
            .await?
            .map(ScheduleEntry::from_entity)
            .transpose()
    }

    /// Gets all schedule entries of a court ordered by weekday then opening time
    pub async fn get_by_court(&self, court_id: i32) -> Result<Vec<ScheduleEntry>, DbErr> {
        entity::prelude::ScheduleEntry::find()
            .filter(entity::schedule_entry::Column::CourtId.eq(court_id))
            .order_by_asc(entity::schedule_entry::Column::Weekday)
            .order_by_asc(entity::schedule_entry::Column::Opening)
            .all(self.db)
            .await?
            .into_iter()
            .map(ScheduleEntry::from_entity)
            .collect()
    }

    /// Creates the schedule entry for a (court, weekday) pair or replaces the existing one
    ///
    /// A concurrent insert for the same pair hits the unique (court, weekday) index; the
    /// losing call then updates the row the other one created.
    ///
    /// # Returns
    /// - `Ok((ScheduleEntry, true))`: A new entry was created
    /// - `Ok((ScheduleEntry, false))`: The existing entry was updated in place
    /// - `Err(DbErr)`: Database error
    pub async fn upsert(
        &self,
        params: UpsertScheduleEntryParams,
    ) -> Result<(ScheduleEntry, bool), DbErr> {
        if let Some(entry) = self.find_model(params.court_id, params.weekday).await? {
            return Ok((self.update_model(entry, &params).await?, false));
        }

        let inserted = entity::schedule_entry::ActiveModel {
            court_id: ActiveValue::Set(params.court_id),
            weekday: ActiveValue::Set(params.weekday),
            opening: ActiveValue::Set(format_minutes(params.opening)),
            closing: ActiveValue::Set(format_minutes(params.closing)),
            slot_minutes: ActiveValue::Set(params.slot_minutes as i32),
            ..Default::default()
        }
        .insert(self.db)
        .await;

        match inserted {
            Ok(entry) => Ok((ScheduleEntry::from_entity(entry)?, true)),
            Err(err) if is_unique_violation(&err) => {
                let entry = self
                    .find_model(params.court_id, params.weekday)
                    .await?
                    .ok_or(err)?;

                Ok((self.update_model(entry, &params).await?, false))
            }
            Err(err) => Err(err),
        }
    }

    async fn find_model(
        &self,
        court_id: i32,
        weekday: i32,
    ) -> Result<Option<entity::schedule_entry::Model>, DbErr> {
        entity::prelude::ScheduleEntry::find()
            .filter(entity::schedule_entry::Column::CourtId.eq(court_id))
            .filter(entity::schedule_entry::Column::Weekday.eq(weekday))
            .one(self.db)
            .await
    }

    async fn update_model(
        &self,
        entry: entity::schedule_entry::Model,
        params: &UpsertScheduleEntryParams,
    ) -> Result<ScheduleEntry, DbErr> {
        let mut active_model: entity::schedule_entry::ActiveModel = entry.into();
        active_model.opening = ActiveValue::Set(format_minutes(params.opening));
        active_model.closing = ActiveValue::Set(format_minutes(params.closing));
        active_model.slot_minutes = ActiveValue::Set(params.slot_minutes as i32);

        ScheduleEntry::from_entity(active_model.update(self.db).await?)
    }

    /// Deletes a schedule entry, returning whether a row was removed
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ScheduleEntry::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
