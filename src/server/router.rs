use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{admin, booking, court, schedule},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Padel Club API",
        description = "Court availability, reservations and club administration"
    ),
    tags(
        (name = "court", description = "Courts and slot availability"),
        (name = "booking", description = "Reservations"),
        (name = "schedule", description = "Weekly opening schedules"),
        (name = "admin", description = "Club administration")
    )
)]
pub struct ApiDoc;

/// Builds the application router with API documentation served at `/api/docs`.
pub fn router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::<AppState>::with_openapi(ApiDoc::openapi())
        .routes(routes!(court::get_courts, court::create_court))
        .routes(routes!(court::update_court, court::delete_court))
        .routes(routes!(court::get_availability))
        .routes(routes!(booking::create_booking))
        .routes(routes!(booking::cancel_booking))
        .routes(routes!(booking::get_my_bookings))
        .routes(routes!(schedule::get_schedules, schedule::upsert_schedule))
        .routes(routes!(schedule::delete_schedule))
        .routes(routes!(admin::get_bookings_by_date))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
