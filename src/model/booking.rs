use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::court::CourtSummaryDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookingDto {
    pub id: i32,
    pub court_id: i32,
    pub owner_id: String,
    pub start_at: NaiveDateTime,
    pub end_at: NaiveDateTime,
    /// "Confirmed" or "Cancelled"
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Booking listing entry including the court it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookingWithCourtDto {
    pub id: i32,
    pub owner_id: String,
    pub start_at: NaiveDateTime,
    pub end_at: NaiveDateTime,
    pub status: String,
    pub court: Option<CourtSummaryDto>,
}

/// Reservation request. Fields are optional so that missing values are reported as a
/// validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateBookingDto {
    pub court_id: Option<i32>,
    /// "YYYY-MM-DD"
    pub date: Option<String>,
    /// "HH:MM"
    pub time: Option<String>,
}
