use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        booking::{BookingDto, BookingWithCourtDto, CreateBookingDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::booking::ReserveSlotParams,
        service::booking::BookingService,
        state::AppState,
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

/// Book a slot.
///
/// Reserves the slot starting at `time` on `date` for the calling identity. The booking
/// ends one slot length (from the court's schedule for that weekday) after its start.
///
/// # Access Control
/// - Any authenticated caller
///
/// # Returns
/// - `201 Created` - Confirmed booking
/// - `400 Bad Request` - Missing or malformed fields, past date, time already passed
///   today, or court closed that day
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - Court does not exist
/// - `409 Conflict` - Slot already booked
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Booking confirmed", body = BookingDto),
        (status = 400, description = "Invalid or rejected booking request", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Court not found", body = ErrorDto),
        (status = 409, description = "Slot already booked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.token_verifier, &headers).require(&[])?;

    let params = ReserveSlotParams::from_dto(payload)?;

    let service = BookingService::new(&state.db, state.clock.as_ref());

    let booking = service.reserve(params, &principal).await?;

    Ok((StatusCode::CREATED, Json(booking.into_dto())))
}

/// Cancel one of the caller's bookings.
///
/// # Access Control
/// - `ClubUser` - Members can cancel bookings they own
///
/// # Returns
/// - `200 OK` - The cancelled booking
/// - `400 Bad Request` - Booking was already cancelled
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Caller is not a member or does not own the booking
/// - `404 Not Found` - Booking does not exist
#[utoipa::path(
    put,
    path = "/api/bookings/{booking_id}/cancel",
    tag = BOOKING_TAG,
    params(
        ("booking_id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Booking cancelled", body = BookingDto),
        (status = 400, description = "Booking already cancelled", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Booking belongs to someone else", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(booking_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let principal =
        AuthGuard::new(&state.token_verifier, &headers).require(&[Permission::ClubUser])?;

    let service = BookingService::new(&state.db, state.clock.as_ref());

    let booking = service.cancel(booking_id, &principal).await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// List the caller's bookings.
///
/// Includes cancelled bookings. Each entry carries the court's ID and name.
///
/// # Access Control
/// - `ClubUser` - Members can list their own bookings
///
/// # Returns
/// - `200 OK` - Bookings ordered by start time
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Caller is not a member
#[utoipa::path(
    get,
    path = "/api/bookings/mine",
    tag = BOOKING_TAG,
    responses(
        (status = 200, description = "The caller's bookings", body = Vec<BookingWithCourtDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Caller is not a member", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_bookings(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let principal =
        AuthGuard::new(&state.token_verifier, &headers).require(&[Permission::ClubUser])?;

    let service = BookingService::new(&state.db, state.clock.as_ref());

    let bookings = service.get_mine(&principal).await?;

    Ok((
        StatusCode::OK,
        Json(bookings.into_iter().map(|b| b.into_dto()).collect::<Vec<_>>()),
    ))
}
