//! Doctor service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::doctor::DoctorRepository,
    error::AppError,
    model::doctor::{CreateDoctorParam, Doctor, DoctorFilter, UpdateDoctorParam},
};

const DOCTOR_NOT_FOUND: &str = "Doctor not found";

/// Service providing business logic for the doctor directory.
pub struct DoctorService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DoctorService<'a> {
    /// Creates a new DoctorService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateDoctorParam) -> Result<Doctor, AppError> {
        let doctor = DoctorRepository::new(self.db).create(param).await?;

        tracing::info!(doctor_id = doctor.id, "Doctor created");

        Ok(doctor)
    }

    /// Lists doctors matching `filter`, ordered by name.
    pub async fn get_all(&self, filter: DoctorFilter) -> Result<Vec<Doctor>, AppError> {
        DoctorRepository::new(self.db).get_all(filter).await
    }

    /// Retrieves a single doctor.
    ///
    /// # Returns
    /// - `Ok(Doctor)` - The doctor
    /// - `Err(AppError::NotFound)` - No doctor with that id
    pub async fn get(&self, id: i32) -> Result<Doctor, AppError> {
        DoctorRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(DOCTOR_NOT_FOUND.to_string()))
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Doctor)` - The updated doctor
    /// - `Err(AppError::NotFound)` - No doctor with that id
    pub async fn update(&self, param: UpdateDoctorParam) -> Result<Doctor, AppError> {
        DoctorRepository::new(self.db)
            .update(param)
            .await?
            .ok_or_else(|| AppError::NotFound(DOCTOR_NOT_FOUND.to_string()))
    }

    /// Deletes a doctor together with their appointments.
    ///
    /// # Returns
    /// - `Ok(())` - The doctor was deleted
    /// - `Err(AppError::NotFound)` - No doctor with that id
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !DoctorRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(DOCTOR_NOT_FOUND.to_string()));
        }

        tracing::info!(doctor_id = id, "Doctor deleted");

        Ok(())
    }
}
