//! Court domain models and parameters.

use crate::model::court::{CourtDto, CourtSummaryDto, CreateCourtDto, UpdateCourtDto};

/// Surface recorded when a court is created without one.
pub const DEFAULT_SURFACE: &str = "Cemento";

/// A bookable padel court.
#[derive(Debug, Clone, PartialEq)]
pub struct Court {
    pub id: i32,
    /// Unique display name.
    pub name: String,
    pub surface: String,
}

impl Court {
    /// Converts an entity model to a court domain model at the repository boundary.
    pub fn from_entity(entity: entity::court::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            surface: entity.surface,
        }
    }

    pub fn into_dto(self) -> CourtDto {
        CourtDto {
            id: self.id,
            name: self.name,
            surface: self.surface,
        }
    }

    /// Converts to the reduced `{id, name}` form embedded in booking listings.
    pub fn into_summary_dto(self) -> CourtSummaryDto {
        CourtSummaryDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Parameters for creating a court.
#[derive(Debug, Clone)]
pub struct CreateCourtParams {
    pub name: String,
    pub surface: String,
}

impl CreateCourtParams {
    /// Converts the request DTO, trimming the name and applying the default surface.
    pub fn from_dto(dto: CreateCourtDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            surface: dto
                .surface
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_SURFACE.to_string()),
        }
    }
}

/// Parameters for a partial court update. `None` fields are left untouched.
#[derive(Debug, Clone)]
pub struct UpdateCourtParams {
    pub id: i32,
    pub name: Option<String>,
    pub surface: Option<String>,
}

impl UpdateCourtParams {
    pub fn from_dto(id: i32, dto: UpdateCourtDto) -> Self {
        Self {
            id,
            name: dto.name.map(|n| n.trim().to_string()),
            surface: dto.surface.map(|s| s.trim().to_string()),
        }
    }
}
