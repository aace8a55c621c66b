//! Court factory for creating test court entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test courts with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let court = CourtFactory::new(&db)
///     .name("Central")
///     .surface("Blindex")
///     .build()
///     .await?;
/// ```
pub struct CourtFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    surface: String,
}

impl<'a> CourtFactory<'a> {
    /// Creates a new CourtFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Court {id}"` where id is auto-incremented
    /// - surface: `"Cemento"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Court {}", id),
            surface: "Cemento".to_string(),
        }
    }

    /// Sets the court name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the court surface.
    pub fn surface(mut self, surface: impl Into<String>) -> Self {
        self.surface = surface.into();
        self
    }

    /// Builds and inserts the court entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::court::Model)` - Created court entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::court::Model, DbErr> {
        entity::court::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            surface: ActiveValue::Set(self.surface),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a court with default values.
///
/// Shorthand for `CourtFactory::new(db).build().await`.
pub async fn create_court(db: &DatabaseConnection) -> Result<entity::court::Model, DbErr> {
    CourtFactory::new(db).build().await
}
