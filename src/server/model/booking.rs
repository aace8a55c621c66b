//! Booking domain models and parameters.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use sea_orm::DbErr;
use std::{fmt, str::FromStr};

use crate::{
    model::booking::{BookingDto, BookingWithCourtDto, CreateBookingDto},
    server::{
        error::AppError,
        model::court::Court,
        util::time::{parse_date, parse_time_of_day},
    },
};

/// Lifecycle state of a booking. Bookings start `Confirmed` and may only move to
/// `Cancelled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    /// Value stored in the `status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "Confirmed",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Confirmed" => Ok(Self::Confirmed),
            "Cancelled" => Ok(Self::Cancelled),
            other => Err(format!("Unknown booking status '{}'", other)),
        }
    }
}

/// A reservation of one slot on one court.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub court_id: i32,
    /// Subject ID of the identity that made the booking.
    pub owner_id: String,
    pub start_at: NaiveDateTime,
    pub end_at: NaiveDateTime,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Converts an entity model to a booking domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Booking)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Stored status is not a known booking status
    pub fn from_entity(entity: entity::booking::Model) -> Result<Self, DbErr> {
        let status = entity.status.parse::<BookingStatus>().map_err(|e| {
            DbErr::Custom(format!("Failed to parse status of booking {}: {}", entity.id, e))
        })?;

        Ok(Self {
            id: entity.id,
            court_id: entity.court_id,
            owner_id: entity.owner_id,
            start_at: entity.start_at,
            end_at: entity.end_at,
            status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.id,
            court_id: self.court_id,
            owner_id: self.owner_id,
            start_at: self.start_at,
            end_at: self.end_at,
            status: self.status.to_string(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Booking together with the court it was made on, for listings.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingWithCourt {
    pub booking: Booking,
    /// Absent only if the court row disappeared between queries.
    pub court: Option<Court>,
}

impl BookingWithCourt {
    /// Converts entity models fetched with `find_also_related`.
    pub fn from_entity(
        booking: entity::booking::Model,
        court: Option<entity::court::Model>,
    ) -> Result<Self, DbErr> {
        Ok(Self {
            booking: Booking::from_entity(booking)?,
            court: court.map(Court::from_entity),
        })
    }

    pub fn into_dto(self) -> BookingWithCourtDto {
        BookingWithCourtDto {
            id: self.booking.id,
            owner_id: self.booking.owner_id,
            start_at: self.booking.start_at,
            end_at: self.booking.end_at,
            status: self.booking.status.to_string(),
            court: self.court.map(Court::into_summary_dto),
        }
    }
}

/// Parameters for inserting a confirmed booking.
#[derive(Debug, Clone)]
pub struct CreateBookingParams {
    pub court_id: i32,
    pub owner_id: String,
    pub start_at: NaiveDateTime,
    pub end_at: NaiveDateTime,
}

/// A reservation request for one slot.
#[derive(Debug, Clone, PartialEq)]
pub struct ReserveSlotParams {
    pub court_id: i32,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl ReserveSlotParams {
    /// Validates and converts the request DTO.
    ///
    /// # Returns
    /// - `Ok(ReserveSlotParams)` - All fields present and well formed
    /// - `Err(AppError::BadRequest)` - A field is missing, the date is not `YYYY-MM-DD`, or
    ///   the time is not a valid `HH:MM` time of day
    pub fn from_dto(dto: CreateBookingDto) -> Result<Self, AppError> {
        let (Some(court_id), Some(date), Some(time)) = (dto.court_id, dto.date, dto.time) else {
            return Err(AppError::BadRequest(
                "court_id, date and time are required".to_string(),
            ));
        };

        let date = parse_date(&date)
            .ok_or_else(|| AppError::BadRequest(format!("Invalid date '{}'", date)))?;
        let time = parse_time_of_day(&time)
            .ok_or_else(|| AppError::BadRequest(format!("Invalid time '{}'", time)))?;

        Ok(Self {
            court_id,
            date,
            time,
        })
    }
}
