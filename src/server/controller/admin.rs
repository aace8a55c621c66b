use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{api::ErrorDto, booking::BookingWithCourtDto},
    server::{
        controller::required_date,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::booking::BookingService,
        state::AppState,
    },
};

/// Tag for grouping administration endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DashboardQuery {
    /// Day to list bookings for, "YYYY-MM-DD"
    pub date: Option<String>,
}

/// List every booking of a day.
///
/// Covers all courts and statuses, ordered by start time, each with its court.
///
/// # Access Control
/// - `ClubAdmin` - Only club administrators can see other members' bookings
///
/// # Returns
/// - `200 OK` - Bookings starting on the date
/// - `400 Bad Request` - Missing or malformed `date`
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Caller is not a club administrator
#[utoipa::path(
    get,
    path = "/api/admin/bookings",
    tag = ADMIN_TAG,
    params(DashboardQuery),
    responses(
        (status = 200, description = "Bookings of the day", body = Vec<BookingWithCourtDto>),
        (status = 400, description = "Missing or malformed date", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Caller is not a club administrator", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bookings_by_date(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<DashboardQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.token_verifier, &headers).require(&[Permission::ClubAdmin])?;

    let date = required_date(query.date.as_deref())?;

    let service = BookingService::new(&state.db, state.clock.as_ref());

    let bookings = service.get_by_date(date).await?;

    Ok((
        StatusCode::OK,
        Json(bookings.into_iter().map(|b| b.into_dto()).collect::<Vec<_>>()),
    ))
}
