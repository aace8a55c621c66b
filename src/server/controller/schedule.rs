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
        schedule::{ScheduleEntryDto, UpsertScheduleEntryDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::schedule::UpsertScheduleEntryParams,
        service::schedule::ScheduleService,
        state::AppState,
    },
};

/// Tag for grouping schedule endpoints in OpenAPI documentation
pub static SCHEDULE_TAG: &str = "schedule";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ScheduleQuery {
    /// Court to list the weekly schedule of
    pub court_id: Option<i32>,
}

/// Get the weekly schedule of a court.
///
/// # Access Control
/// - `ClubAdmin` - Only club administrators can manage schedules
///
/// # Returns
/// - `200 OK` - Entries ordered by weekday then opening time
/// - `400 Bad Request` - Missing `court_id`
/// - `404 Not Found` - Court does not exist
#[utoipa::path(
    get,
    path = "/api/admin/schedules",
    tag = SCHEDULE_TAG,
    params(ScheduleQuery),
    responses(
        (status = 200, description = "The court's schedule", body = Vec<ScheduleEntryDto>),
        (status = 400, description = "Missing court_id", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Caller is not a club administrator", body = ErrorDto),
        (status = 404, description = "Court not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_schedules(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ScheduleQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.token_verifier, &headers).require(&[Permission::ClubAdmin])?;

    let court_id = query.court_id.ok_or_else(|| {
        AppError::BadRequest("Query parameter 'court_id' is required".to_string())
    })?;

    let service = ScheduleService::new(&state.db);

    let entries = service.get_by_court(court_id).await?;

    Ok((
        StatusCode::OK,
        Json(entries.into_iter().map(|e| e.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Set a court's opening window for one weekday.
///
/// Creates the entry for the (court, weekday) pair or replaces the existing one. Bookings
/// already made are not touched.
///
/// # Access Control
/// - `ClubAdmin` - Only club administrators can manage schedules
///
/// # Returns
/// - `201 Created` - New entry created
/// - `200 OK` - Existing entry for that weekday updated
/// - `400 Bad Request` - Invalid weekday, times, or slot length
/// - `404 Not Found` - Court does not exist
#[utoipa::path(
    post,
    path = "/api/admin/schedules",
    tag = SCHEDULE_TAG,
    request_body = UpsertScheduleEntryDto,
    responses(
        (status = 201, description = "Schedule entry created", body = ScheduleEntryDto),
        (status = 200, description = "Schedule entry updated", body = ScheduleEntryDto),
        (status = 400, description = "Invalid schedule entry", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Caller is not a club administrator", body = ErrorDto),
        (status = 404, description = "Court not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_schedule(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpsertScheduleEntryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.token_verifier, &headers).require(&[Permission::ClubAdmin])?;

    let params = UpsertScheduleEntryParams::from_dto(payload)?;

    let service = ScheduleService::new(&state.db);

    let (entry, created) = service.upsert(params).await?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(entry.into_dto())))
}

/// Remove a schedule entry, closing the court on that weekday.
///
/// # Access Control
/// - `ClubAdmin` - Only club administrators can manage schedules
///
/// # Returns
/// - `204 No Content` - Entry deleted
/// - `404 Not Found` - Entry does not exist
#[utoipa::path(
    delete,
    path = "/api/admin/schedules/{entry_id}",
    tag = SCHEDULE_TAG,
    params(
        ("entry_id" = i32, Path, description = "Schedule entry ID")
    ),
    responses(
        (status = 204, description = "Schedule entry deleted"),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Caller is not a club administrator", body = ErrorDto),
        (status = 404, description = "Schedule entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_schedule(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(entry_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.token_verifier, &headers).require(&[Permission::ClubAdmin])?;

    let service = ScheduleService::new(&state.db);

    service.delete(entry_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
