//! Dental service catalog business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::dental_service::DentalServiceRepository,
    error::AppError,
    model::dental_service::{
        CreateDentalServiceParam, DentalService, DentalServiceFilter, UpdateDentalServiceParam,
    },
};

const SERVICE_NOT_FOUND: &str = "Service not found";

/// Service providing business logic for the treatment catalog.
pub struct DentalServiceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DentalServiceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a treatment to the catalog.
    ///
    /// # Returns
    /// - `Ok(DentalService)` - The created entry
    /// - `Err(AppError::Conflict)` - A service with that name already exists
    pub async fn create(&self, param: CreateDentalServiceParam) -> Result<DentalService, AppError> {
        let service = DentalServiceRepository::new(self.db).create(param).await?;

        tracing::info!(service_id = service.id, "Dental service created");

        Ok(service)
    }

    pub async fn get_all(&self, filter: DentalServiceFilter) -> Result<Vec<DentalService>, AppError> {
        DentalServiceRepository::new(self.db).get_all(filter).await
    }

    pub async fn get(&self, id: i32) -> Result<DentalService, AppError> {
        DentalServiceRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(SERVICE_NOT_FOUND.to_string()))
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(DentalService)` - The updated entry
    /// - `Err(AppError::NotFound)` - No service with that id
    /// - `Err(AppError::Conflict)` - The new name belongs to another service
    pub async fn update(&self, param: UpdateDentalServiceParam) -> Result<DentalService, AppError> {
        DentalServiceRepository::new(self.db)
            .update(param)
            .await?
            .ok_or_else(|| AppError::NotFound(SERVICE_NOT_FOUND.to_string()))
    }

    /// Removes a treatment. Appointments that referenced it keep their booking without a service.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !DentalServiceRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(SERVICE_NOT_FOUND.to_string()));
        }

        tracing::info!(service_id = id, "Dental service deleted");

        Ok(())
    }
}
