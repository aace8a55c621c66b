use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use test_utils::{
    builder::TestBuilder,
    factory,
    token::{issue_token, TEST_CLIENT_ID, TEST_SECRET},
};
use tower::ServiceExt;

use crate::server::{
    router::router, service::auth::TokenVerifier, state::AppState, util::clock::FixedClock,
};


/// 2030-01-07, a Monday (weekday 1).
fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 1, 7).unwrap()
}

/// Router over `db` with a clock frozen at 08:00 on the given date.
fn app_at(db: &DatabaseConnection, today: NaiveDate) -> Router {
    let clock = FixedClock(today.and_hms_opt(8, 0, 0).unwrap());
    let verifier = TokenVerifier::from_secret(TEST_SECRET, TEST_CLIENT_ID);

    router(AppState::new(db.clone(), verifier, Arc::new(clock)))
}

/// Router with a clock well before every date used in the tests.
fn app(db: &DatabaseConnection) -> Router {
    app_at(db, NaiveDate::from_ymd_opt(2029, 12, 1).unwrap())
}

fn member_token(subject: &str) -> String {
    issue_token(subject, &["club-user"]).unwrap()
}

fn admin_token() -> String {
    issue_token("admin-1", &["club-user", "club-admin"]).unwrap()
}

/// Builds a request with an optional bearer token and JSON body.
fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Sends the request and returns the status with the parsed JSON body (`Null` when empty).
async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}
