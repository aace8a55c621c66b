use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CourtDto {
    pub id: i32,
    pub name: String,
    pub surface: String,
}

/// Minimal court reference embedded in booking listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CourtSummaryDto {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCourtDto {
    pub name: String,
    /// Defaults to "Cemento" when omitted
    pub surface: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateCourtDto {
    pub name: Option<String>,
    pub surface: Option<String>,
}
