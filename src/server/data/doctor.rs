//! Doctor data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::doctor::{
        encode_available_times, CreateDoctorParam, Doctor, DoctorFilter, UpdateDoctorParam,
    },
};

/// Repository providing database operations for doctors.
pub struct DoctorRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DoctorRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new, active doctor.
    ///
    /// # Returns
    /// - `Ok(Doctor)` - The created doctor
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateDoctorParam) -> Result<Doctor, AppError> {
        let now = Utc::now();

        let entity = entity::doctor::ActiveModel {
            name: ActiveValue::Set(param.name),
            specialty: ActiveValue::Set(param.specialty),
            image: ActiveValue::Set(param.image),
            available_times: ActiveValue::Set(encode_available_times(&param.available_times)),
            bio: ActiveValue::Set(param.bio),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Doctor::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Doctor>, AppError> {
        let entity = entity::prelude::Doctor::find_by_id(id).one(self.db).await?;

        entity.map(Doctor::from_entity).transpose()
    }

    /// Finds several doctors at once, e.g. to embed summaries in an appointment list.
    ///
    /// Ids with no matching doctor are skipped.
    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<Vec<Doctor>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Doctor::find()
            .filter(entity::doctor::Column::Id.is_in(ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(Doctor::from_entity)
            .collect()
    }

    /// Gets doctors matching the filter ordered by name.
    ///
    /// # Arguments
    /// - `filter` - Exact specialty and active flag filters, each optional
    pub async fn get_all(&self, filter: DoctorFilter) -> Result<Vec<Doctor>, AppError> {
        let mut query = entity::prelude::Doctor::find();

        if let Some(specialty) = filter.specialty {
            query = query.filter(entity::doctor::Column::Specialty.eq(specialty));
        }
        if let Some(is_active) = filter.is_active {
            query = query.filter(entity::doctor::Column::IsActive.eq(is_active));
        }

        query
            .order_by_asc(entity::doctor::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(Doctor::from_entity)
            .collect()
    }

    /// Applies a partial update to a doctor.
    ///
    /// # Returns
    /// - `Ok(Some(Doctor))` - The updated doctor
    /// - `Ok(None)` - No doctor with that id
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update(&self, param: UpdateDoctorParam) -> Result<Option<Doctor>, AppError> {
        let Some(entity) = entity::prelude::Doctor::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(specialty) = param.specialty {
            active.specialty = ActiveValue::Set(specialty);
        }
        if let Some(image) = param.image {
            active.image = ActiveValue::Set(image);
        }
        if let Some(times) = param.available_times {
            active.available_times = ActiveValue::Set(encode_available_times(&times));
        }
        if let Some(bio) = param.bio {
            active.bio = ActiveValue::Set(Some(bio));
        }
        if let Some(is_active) = param.is_active {
            active.is_active = ActiveValue::Set(is_active);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(Doctor::from_entity(entity)?))
    }

    /// Deletes a doctor together with their appointments.
    ///
    /// # Returns
    /// - `Ok(true)` - The doctor was deleted
    /// - `Ok(false)` - No doctor with that id
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Doctor::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts all doctors, active or not. Used by catalog seeding.
    pub async fn count(&self) -> Result<u64, AppError> {
        Ok(entity::prelude::Doctor::find().count(self.db).await?)
    }
}
