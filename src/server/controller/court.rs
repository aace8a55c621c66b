use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        court::{CourtDto, CreateCourtDto, UpdateCourtDto},
        schedule::AvailableSlotDto,
    },
    server::{
        controller::required_date,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::court::{CreateCourtParams, UpdateCourtParams},
        service::{availability::AvailabilityService, court::CourtService},
        state::AppState,
    },
};

/// Tag for grouping court endpoints in OpenAPI documentation
pub static COURT_TAG: &str = "court";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AvailabilityQuery {
    /// Date to list free slots for, "YYYY-MM-DD"
    pub date: Option<String>,
}

/// List all courts.
///
/// Public endpoint used to pick a court before checking availability.
///
/// # Returns
/// - `200 OK` - Courts ordered by ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/courts",
    tag = COURT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved courts", body = Vec<CourtDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_courts(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = CourtService::new(&state.db);

    let courts = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(courts.into_iter().map(|c| c.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Create a new court.
///
/// # Access Control
/// - `ClubAdmin` - Only club administrators can create courts
///
/// # Returns
/// - `201 Created` - Successfully created court
/// - `400 Bad Request` - Empty court name
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Caller is not a club administrator
/// - `409 Conflict` - A court with this name already exists
#[utoipa::path(
    post,
    path = "/api/courts",
    tag = COURT_TAG,
    request_body = CreateCourtDto,
    responses(
        (status = 201, description = "Successfully created court", body = CourtDto),
        (status = 400, description = "Invalid court data", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Caller is not a club administrator", body = ErrorDto),
        (status = 409, description = "Court name already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_court(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateCourtDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.token_verifier, &headers).require(&[Permission::ClubAdmin])?;

    let service = CourtService::new(&state.db);

    let court = service.create(CreateCourtParams::from_dto(payload)).await?;

    Ok((StatusCode::CREATED, Json(court.into_dto())))
}

/// Update a court's name and/or surface.
///
/// # Access Control
/// - `ClubAdmin` - Only club administrators can modify courts
///
/// # Returns
/// - `200 OK` - Updated court
/// - `400 Bad Request` - Empty name or surface
/// - `404 Not Found` - Court does not exist
/// - `409 Conflict` - Another court already uses the new name
#[utoipa::path(
    put,
    path = "/api/courts/{court_id}",
    tag = COURT_TAG,
    params(
        ("court_id" = i32, Path, description = "Court ID")
    ),
    request_body = UpdateCourtDto,
    responses(
        (status = 200, description = "Successfully updated court", body = CourtDto),
        (status = 400, description = "Invalid court data", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Caller is not a club administrator", body = ErrorDto),
        (status = 404, description = "Court not found", body = ErrorDto),
        (status = 409, description = "Court name already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_court(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(court_id): Path<i32>,
    Json(payload): Json<UpdateCourtDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.token_verifier, &headers).require(&[Permission::ClubAdmin])?;

    let service = CourtService::new(&state.db);

    let court = service
        .update(UpdateCourtParams::from_dto(court_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(court.into_dto())))
}

/// Delete a court.
///
/// Removes the court together with its weekly schedule and all of its bookings.
///
/// # Access Control
/// - `ClubAdmin` - Only club administrators can delete courts
///
/// # Returns
/// - `204 No Content` - Court deleted
/// - `404 Not Found` - Court does not exist
#[utoipa::path(
    delete,
    path = "/api/courts/{court_id}",
    tag = COURT_TAG,
    params(
        ("court_id" = i32, Path, description = "Court ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted court"),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Caller is not a club administrator", body = ErrorDto),
        (status = 404, description = "Court not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_court(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(court_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.token_verifier, &headers).require(&[Permission::ClubAdmin])?;

    let service = CourtService::new(&state.db);

    service.delete(court_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List the free slots of a court on a date.
///
/// Slots come from the court's schedule for the date's weekday; slots already held by a
/// non-cancelled booking are left out. A court that is closed that day yields an empty list.
///
/// # Access Control
/// - Any authenticated caller
///
/// # Returns
/// - `200 OK` - Free slots in ascending order
/// - `400 Bad Request` - Missing or malformed `date`
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `404 Not Found` - Court does not exist
#[utoipa::path(
    get,
    path = "/api/courts/{court_id}/availability",
    tag = COURT_TAG,
    params(
        ("court_id" = i32, Path, description = "Court ID"),
        AvailabilityQuery
    ),
    responses(
        (status = 200, description = "Free slots for the date", body = Vec<AvailableSlotDto>),
        (status = 400, description = "Missing or malformed date", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Court not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_availability(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(court_id): Path<i32>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.token_verifier, &headers).require(&[])?;

    let date = required_date(query.date.as_deref())?;

    let service = AvailabilityService::new(&state.db);

    let slots = service.get_available(court_id, date).await?;

    Ok((
        StatusCode::OK,
        Json(slots.into_iter().map(|s| s.into_dto()).collect::<Vec<_>>()),
    ))
}
