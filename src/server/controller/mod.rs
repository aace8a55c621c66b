//! HTTP request handlers.
//!
//! Controllers authenticate the caller through `AuthGuard`, convert request DTOs into
//! domain parameters, call the matching service and convert the result back into DTOs.
//! Every handler is annotated for the OpenAPI document served by the router.

pub mod admin;
pub mod booking;
pub mod court;
pub mod schedule;

#[cfg(test)]
mod test;

use chrono::NaiveDate;

use crate::server::{error::AppError, util::time::parse_date};

/// Parses a required `date` query parameter.
///
/// # Returns
/// - `Ok(NaiveDate)` - The parameter is present and formatted `YYYY-MM-DD`
/// - `Err(AppError::BadRequest)` - The parameter is missing or malformed
pub(crate) fn required_date(value: Option<&str>) -> Result<NaiveDate, AppError> {
    let value = value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::BadRequest("Query parameter 'date' is required".to_string()))?;

    parse_date(value).ok_or_else(|| {
        AppError::BadRequest(format!(
            "Invalid date '{}', expected YYYY-MM-DD",
            value
        ))
    })
}
