use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::court::{Court, CreateCourtParams, UpdateCourtParams};

pub struct CourtRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourtRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new court
    pub async fn create(&self, params: CreateCourtParams) -> Result<Court, DbErr> {
        let court = entity::court::ActiveModel {
            name: ActiveValue::Set(params.name),
            surface: ActiveValue::Set(params.surface),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Court::from_entity(court))
    }

    /// Gets all courts ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Court>, DbErr> {
        let courts = entity::prelude::Court::find()
            .order_by_asc(entity::court::Column::Id)
            .all(self.db)
            .await?;

        Ok(courts.into_iter().map(Court::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Court>, DbErr> {
        let court = entity::prelude::Court::find_by_id(id).one(self.db).await?;

        Ok(court.map(Court::from_entity))
    }

    /// Finds a court by its exact name
    pub async fn find_by_name(&self, name: &str) -> Result<Option<Court>, DbErr> {
        let court = entity::prelude::Court::find()
            .filter(entity::court::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(court.map(Court::from_entity))
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Court::find()
            .filter(entity::court::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Updates the provided fields of a court
    ///
    /// # Returns
    /// - `Ok(Some(Court))`: The updated court
    /// - `Ok(None)`: No court with the given ID
    /// - `Err(DbErr)`: Database error, including unique name violations
    pub async fn update(&self, params: UpdateCourtParams) -> Result<Option<Court>, DbErr> {
        let Some(court) = entity::prelude::Court::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::court::ActiveModel = court.into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(surface) = params.surface {
            active_model.surface = ActiveValue::Set(surface);
        }

        let court = active_model.update(self.db).await?;

        Ok(Some(Court::from_entity(court)))
    }

    /// Deletes a court along with its schedule entries and bookings
    ///
    /// # Returns
    /// - `Ok(true)`: Court was deleted
    /// - `Ok(false)`: No court with the given ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Court::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
