use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Rejections produced by the reservation and cancellation rules.
///
/// Each variant is a distinct, client-visible condition.
#[derive(Error, Debug, PartialEq)]
pub enum BookingError {
    /// Requested date lies before the current calendar date.
    #[error("Bookings cannot be made for past dates ({0})")]
    PastDate(NaiveDate),

    /// Requested slot is today and has already started.
    #[error("The selected time ({0}) has already passed for today")]
    PastTimeToday(NaiveDateTime),

    /// The court has no schedule entry for the requested weekday.
    #[error("Court {court_id} is closed on weekday {weekday}")]
    CourtClosed { court_id: i32, weekday: i32 },

    /// Another active booking already holds the slot.
    #[error("Slot {start_at} on court {court_id} is already booked")]
    SlotTaken {
        court_id: i32,
        start_at: NaiveDateTime,
    },

    /// Caller tried to cancel a booking owned by someone else.
    #[error("Booking {0} does not belong to the requester")]
    NotOwner(i32),

    /// Booking was already cancelled.
    #[error("Booking {0} is already cancelled")]
    AlreadyCancelled(i32),
}

/// Converts booking rule violations into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - `PastDate`, `PastTimeToday`, `CourtClosed`, `AlreadyCancelled`
/// - 403 Forbidden - `NotOwner`
/// - 409 Conflict - `SlotTaken`
impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::PastDate(_)
            | Self::PastTimeToday(_)
            | Self::CourtClosed { .. }
            | Self::AlreadyCancelled(_) => StatusCode::BAD_REQUEST,
            Self::NotOwner(_) => StatusCode::FORBIDDEN,
            Self::SlotTaken { .. } => StatusCode::CONFLICT,
        };

        let error = match self {
            Self::PastDate(_) => "Bookings cannot be made for past dates.".to_string(),
            Self::PastTimeToday(_) => {
                "The selected time has already passed for today.".to_string()
            }
            Self::CourtClosed { .. } => "The court is closed on the selected day.".to_string(),
            Self::SlotTaken { .. } => "The selected slot is already booked.".to_string(),
            Self::NotOwner(_) => "You cannot cancel a booking that is not yours.".to_string(),
            Self::AlreadyCancelled(_) => "The booking is already cancelled.".to_string(),
        };

        (status, Json(ErrorDto { error })).into_response()
    }
}
