//! Reservation admission and cancellation.
//!
//! A reservation is checked in a fixed order: past date, past time today, court closed,
//! slot taken. The pre-insert lookup only short-circuits the common case; the partial
//! unique index on active `(court_id, start_at)` pairs decides races between concurrent
//! requests, and its violation is reported as the same slot-taken error.

use chrono::{Duration, NaiveDate};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        booking::BookingRepository, court::CourtRepository, is_unique_violation,
        schedule_entry::ScheduleEntryRepository,
    },
    error::{booking::BookingError, AppError},
    model::{
        auth::Identity,
        booking::{
            Booking, BookingStatus, BookingWithCourt, CreateBookingParams, ReserveSlotParams,
        },
    },
    service::court::court_not_found,
    util::{
        clock::Clock,
        time::{day_bounds, weekday_index},
    },
};

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
    clock: &'a dyn Clock,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection, clock: &'a dyn Clock) -> Self {
        Self { db, clock }
    }

    /// Books a slot for the calling identity
    ///
    /// # Arguments
    /// - `params`: Court, date and time of day of the requested slot
    /// - `identity`: Caller, recorded as the booking owner
    ///
    /// # Returns
    /// - `Ok(Booking)`: Confirmed booking ending one slot length after its start
    /// - `Err(BookingError::PastDate)`: Date is before today
    /// - `Err(BookingError::PastTimeToday)`: Date is today and the start is not in the future
    /// - `Err(AppError::NotFound)`: Court does not exist
    /// - `Err(BookingError::CourtClosed)`: No schedule for the date's weekday
    /// - `Err(BookingError::SlotTaken)`: An active booking holds the same start
    pub async fn reserve(
        &self,
        params: ReserveSlotParams,
        identity: &impl Identity,
    ) -> Result<Booking, AppError> {
        let now = self.clock.now();
        let today = now.date();

        if params.date < today {
            return Err(BookingError::PastDate(params.date).into());
        }

        let start_at = params.date.and_time(params.time);

        if params.date == today && start_at <= now {
            return Err(BookingError::PastTimeToday(start_at).into());
        }

        if !CourtRepository::new(self.db).exists(params.court_id).await? {
            return Err(court_not_found(params.court_id));
        }

        let weekday = weekday_index(params.date);
        let Some(schedule) = ScheduleEntryRepository::new(self.db)
            .find_by_court_and_weekday(params.court_id, weekday)
            .await?
        else {
            return Err(BookingError::CourtClosed {
                court_id: params.court_id,
                weekday,
            }
            .into());
        };

        let end_at = start_at + Duration::minutes(schedule.slot_minutes as i64);
        let slot_taken = BookingError::SlotTaken {
            court_id: params.court_id,
            start_at,
        };

        let repo = BookingRepository::new(self.db);

        if repo.find_active_at(params.court_id, start_at).await?.is_some() {
            tracing::debug!("Rejected booking: {}", slot_taken);
            return Err(slot_taken.into());
        }

        let booking = match repo
            .create(CreateBookingParams {
                court_id: params.court_id,
                owner_id: identity.subject_id().to_string(),
                start_at,
                end_at,
            })
            .await
        {
            Ok(booking) => booking,
            Err(e) if is_unique_violation(&e) => {
                tracing::debug!("Rejected concurrent booking: {}", slot_taken);
                return Err(slot_taken.into());
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!(
            "Booking {} confirmed: court {} at {} for {}",
            booking.id,
            booking.court_id,
            booking.start_at,
            booking.owner_id
        );

        Ok(booking)
    }

    /// Cancels a booking owned by the calling identity
    ///
    /// # Returns
    /// - `Ok(Booking)`: The booking, now cancelled
    /// - `Err(AppError::NotFound)`: No booking with the given ID
    /// - `Err(BookingError::NotOwner)`: Booking belongs to another identity
    /// - `Err(BookingError::AlreadyCancelled)`: Booking was cancelled before
    pub async fn cancel(&self, id: i32, identity: &impl Identity) -> Result<Booking, AppError> {
        let repo = BookingRepository::new(self.db);

        let booking = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| booking_not_found(id))?;

        if booking.owner_id != identity.subject_id() {
            return Err(BookingError::NotOwner(id).into());
        }

        if booking.status == BookingStatus::Cancelled {
            return Err(BookingError::AlreadyCancelled(id).into());
        }

        let booking = repo
            .update_status(id, BookingStatus::Cancelled)
            .await?
            .ok_or_else(|| booking_not_found(id))?;

        tracing::info!("Booking {} cancelled by {}", booking.id, booking.owner_id);

        Ok(booking)
    }

    /// Gets every booking of the calling identity with its court
    pub async fn get_mine(
        &self,
        identity: &impl Identity,
    ) -> Result<Vec<BookingWithCourt>, AppError> {
        let repo = BookingRepository::new(self.db);

        Ok(repo.get_by_owner_with_court(identity.subject_id()).await?)
    }

    /// Gets all bookings starting on a date, across courts and statuses
    pub async fn get_by_date(&self, date: NaiveDate) -> Result<Vec<BookingWithCourt>, AppError> {
        let repo = BookingRepository::new(self.db);
        let (from, to) = day_bounds(date);

        Ok(repo.get_between_with_court(from, to).await?)
    }
}

fn booking_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Booking {} not found", id))
}
