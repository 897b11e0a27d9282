//! Dental service data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::conflict_on_unique,
    error::AppError,
    model::{
        dental_service::{
            CreateDentalServiceParam, DentalService, DentalServiceFilter,
            UpdateDentalServiceParam,
        },
        StoredEnum,
    },
};

/// Message returned when a service name is already taken.
pub const DUPLICATE_SERVICE_NAME: &str = "Service with this name already exists";

/// Repository providing database operations for the treatment catalog.
pub struct DentalServiceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DentalServiceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new, active service.
    ///
    /// # Returns
    /// - `Ok(DentalService)` - The created service
    /// - `Err(AppError::Conflict)` - A service with the same name exists
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateDentalServiceParam) -> Result<DentalService, AppError> {
        let now = Utc::now();

        let entity = entity::dental_service::ActiveModel {
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            category: ActiveValue::Set(param.category.as_str().to_string()),
            duration: ActiveValue::Set(param.duration),
            price: ActiveValue::Set(param.price),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
        .map_err(|e| conflict_on_unique(e, DUPLICATE_SERVICE_NAME))?;

        DentalService::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<DentalService>, AppError> {
        let entity = entity::prelude::DentalService::find_by_id(id)
            .one(self.db)
            .await?;

        entity.map(DentalService::from_entity).transpose()
    }

    /// Finds several services at once. Ids with no matching service are skipped.
    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<Vec<DentalService>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::DentalService::find()
            .filter(entity::dental_service::Column::Id.is_in(ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(DentalService::from_entity)
            .collect()
    }

    /// Gets services matching the filter ordered by name.
    pub async fn get_all(&self, filter: DentalServiceFilter) -> Result<Vec<DentalService>, AppError> {
        let mut query = entity::prelude::DentalService::find();

        if let Some(category) = filter.category {
            query = query.filter(entity::dental_service::Column::Category.eq(category.as_str()));
        }
        if let Some(is_active) = filter.is_active {
            query = query.filter(entity::dental_service::Column::IsActive.eq(is_active));
        }

        query
            .order_by_asc(entity::dental_service::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(DentalService::from_entity)
            .collect()
    }

    /// Applies a partial update to a service.
    ///
    /// # Returns
    /// - `Ok(Some(DentalService))` - The updated service
    /// - `Ok(None)` - No service with that id
    /// - `Err(AppError::Conflict)` - The new name belongs to another service
    pub async fn update(
        &self,
        param: UpdateDentalServiceParam,
    ) -> Result<Option<DentalService>, AppError> {
        let Some(entity) = entity::prelude::DentalService::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = param.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(category) = param.category {
            active.category = ActiveValue::Set(category.as_str().to_string());
        }
        if let Some(duration) = param.duration {
            active.duration = ActiveValue::Set(duration);
        }
        if let Some(price) = param.price {
            active.price = ActiveValue::Set(Some(price));
        }
        if let Some(is_active) = param.is_active {
            active.is_active = ActiveValue::Set(is_active);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active
            .update(self.db)
            .await
            .map_err(|e| conflict_on_unique(e, DUPLICATE_SERVICE_NAME))?;

        Ok(Some(DentalService::from_entity(entity)?))
    }

    /// Deletes a service. Appointments referencing it keep existing without a service.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::DentalService::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts all services. Used by catalog seeding.
    pub async fn count(&self) -> Result<u64, AppError> {
        Ok(entity::prelude::DentalService::find().count(self.db).await?)
    }
}
