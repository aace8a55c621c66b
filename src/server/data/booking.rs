use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::booking::{
    Booking, BookingStatus, BookingWithCourt, CreateBookingParams,
};

pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a confirmed booking
    ///
    /// # Returns
    /// - `Ok(Booking)`: The created booking
    /// - `Err(DbErr)`: Database error. An active booking already holding the same court and
    ///   start time surfaces as a unique constraint violation.
    pub async fn create(&self, params: CreateBookingParams) -> Result<Booking, DbErr> {
        let now = Utc::now();

        let booking = entity::booking::ActiveModel {
            court_id: ActiveValue::Set(params.court_id),
            owner_id: ActiveValue::Set(params.owner_id),
            start_at: ActiveValue::Set(params.start_at),
            end_at: ActiveValue::Set(params.end_at),
            status: ActiveValue::Set(BookingStatus::Confirmed.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Booking::from_entity(booking)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Booking>, DbErr> {
        entity::prelude::Booking::find_by_id(id)
            .one(self.db)
            .await?
            .map(Booking::from_entity)
            .transpose()
    }

    /// Finds the non-cancelled booking holding a court at an exact start time
    pub async fn find_active_at(
        &self,
        court_id: i32,
        start_at: NaiveDateTime,
    ) -> Result<Option<Booking>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::CourtId.eq(court_id))
            .filter(entity::booking::Column::StartAt.eq(start_at))
            .filter(entity::booking::Column::Status.ne(BookingStatus::Cancelled.as_str()))
            .one(self.db)
            .await?
            .map(Booking::from_entity)
            .transpose()
    }

    /// Gets non-cancelled bookings of a court starting within `[from, to]`, ordered by start
    pub async fn get_active_by_court_between(
        &self,
        court_id: i32,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Vec<Booking>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::CourtId.eq(court_id))
            .filter(entity::booking::Column::StartAt.between(from, to))
            .filter(entity::booking::Column::Status.ne(BookingStatus::Cancelled.as_str()))
            .order_by_asc(entity::booking::Column::StartAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(Booking::from_entity)
            .collect()
    }

    /// Gets every booking of an owner, in any status, with its court, ordered by start
    pub async fn get_by_owner_with_court(
        &self,
        owner_id: &str,
    ) -> Result<Vec<BookingWithCourt>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::OwnerId.eq(owner_id))
            .order_by_asc(entity::booking::Column::StartAt)
            .order_by_asc(entity::booking::Column::Id)
            .find_also_related(entity::prelude::Court)
            .all(self.db)
            .await?
            .into_iter()
            .map(|(booking, court)| BookingWithCourt::from_entity(booking, court))
            .collect()
    }

    /// Gets bookings of all courts, in any status, starting within `[from, to]`
    pub async fn get_between_with_court(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Vec<BookingWithCourt>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::StartAt.between(from, to))
            .order_by_asc(entity::booking::Column::StartAt)
            .order_by_asc(entity::booking::Column::CourtId)
            .order_by_asc(entity::booking::Column::Id)
            .find_also_related(entity::prelude::Court)
            .all(self.db)
            .await?
            .into_iter()
            .map(|(booking, court)| BookingWithCourt::from_entity(booking, court))
            .collect()
    }

    /// Sets the status of a booking and refreshes its update timestamp
    ///
    /// # Returns
    /// - `Ok(Some(Booking))`: The updated booking
    /// - `Ok(None)`: No booking with the given ID
    pub async fn update_status(
        &self,
        id: i32,
        status: BookingStatus,
    ) -> Result<Option<Booking>, DbErr> {
        let Some(booking) = entity::prelude::Booking::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::booking::ActiveModel = booking.into();
        active_model.status = ActiveValue::Set(status.as_str().to_string());
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let booking = active_model.update(self.db).await?;

        Booking::from_entity(booking).map(Some)
    }
}
