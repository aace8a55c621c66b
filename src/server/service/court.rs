use sea_orm::DatabaseConnection;

use crate::server::{
    data::{court::CourtRepository, is_unique_violation},
    error::AppError,
    model::court::{Court, CreateCourtParams, UpdateCourtParams},
};

pub struct CourtService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourtService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all courts
    pub async fn get_all(&self) -> Result<Vec<Court>, AppError> {
        let repo = CourtRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Creates a new court
    ///
    /// # Returns
    /// - `Ok(Court)`: The created court
    /// - `Err(AppError::BadRequest)`: Empty name
    /// - `Err(AppError::Conflict)`: A court with the same name exists
    pub async fn create(&self, params: CreateCourtParams) -> Result<Court, AppError> {
        if params.name.is_empty() {
            return Err(AppError::BadRequest("Court name is required".to_string()));
        }

        let repo = CourtRepository::new(self.db);

        if repo.find_by_name(&params.name).await?.is_some() {
            return Err(duplicate_name(&params.name));
        }

        let name = params.name.clone();
        let court = repo.create(params).await.map_err(|e| {
            if is_unique_violation(&e) {
                duplicate_name(&name)
            } else {
                e.into()
            }
        })?;

        tracing::info!("Created court {} ({})", court.id, court.name);

        Ok(court)
    }

    /// Updates a court's name and/or surface
    ///
    /// # Returns
    /// - `Ok(Court)`: The updated court
    /// - `Err(AppError::BadRequest)`: Empty name or surface
    /// - `Err(AppError::NotFound)`: No court with the given ID
    /// - `Err(AppError::Conflict)`: Another court already uses the new name
    pub async fn update(&self, params: UpdateCourtParams) -> Result<Court, AppError> {
        if params.name.as_deref().is_some_and(str::is_empty)
            || params.surface.as_deref().is_some_and(str::is_empty)
        {
            return Err(AppError::BadRequest(
                "Court name and surface cannot be empty".to_string(),
            ));
        }

        let repo = CourtRepository::new(self.db);

        if let Some(name) = &params.name {
            if let Some(existing) = repo.find_by_name(name).await? {
                if existing.id != params.id {
                    return Err(duplicate_name(name));
                }
            }
        }

        let id = params.id;
        let name = params.name.clone().unwrap_or_default();
        repo.update(params)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    duplicate_name(&name)
                } else {
                    AppError::from(e)
                }
            })?
            .ok_or_else(|| court_not_found(id))
    }

    /// Deletes a court together with its schedule and bookings
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = CourtRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(court_not_found(id));
        }

        tracing::info!("Deleted court {}", id);

        Ok(())
    }
}

pub(crate) fn court_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Court {} not found", id))
}

fn duplicate_name(name: &str) -> AppError {
    AppError::Conflict(format!("A court named '{}' already exists", name))
}
