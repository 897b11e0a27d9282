//! Appointment data repository for database operations.
//!
//! Provides the `AppointmentRepository` for creating, querying, updating and deleting
//! appointments. Access control is not applied here: callers decide which of the returned
//! appointments the requesting user may see.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::{
        appointment::{
            Appointment, AppointmentFilter, AppointmentStatus, CreateAppointmentParam,
            UpdateAppointmentParam,
        },
        StoredEnum,
    },
};

/// Repository providing database operations for appointments.
pub struct AppointmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AppointmentRepository<'a> {
    /// Creates a new AppointmentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new appointment with status `pending`.
    ///
    /// # Arguments
    /// - `param` - Validated booking; `patient_id` is `None` for guest bookings
    ///
    /// # Returns
    /// - `Ok(Appointment)` - The created appointment
    /// - `Err(AppError::DbErr)` - Database error during insert, including a foreign key
    ///   violation for an unknown doctor or service
    pub async fn create(&self, param: CreateAppointmentParam) -> Result<Appointment, AppError> {
        let now = Utc::now();

        let entity = entity::appointment::ActiveModel {
            patient_id: ActiveValue::Set(param.patient_id),
            doctor_id: ActiveValue::Set(param.doctor_id),
            service_id: ActiveValue::Set(param.service_id),
            date: ActiveValue::Set(param.date),
            time: ActiveValue::Set(param.time),
            status: ActiveValue::Set(AppointmentStatus::Pending.as_str().to_string()),
            appointment_type: ActiveValue::Set(param.appointment_type.as_str().to_string()),
            patient_name: ActiveValue::Set(param.patient_name),
            patient_phone: ActiveValue::Set(param.patient_phone),
            patient_age: ActiveValue::Set(param.patient_age),
            patient_gender: ActiveValue::Set(
                param.patient_gender.map(|g| g.as_str().to_string()),
            ),
            notes: ActiveValue::Set(param.notes),
            emergency_type: ActiveValue::Set(param.emergency_type.map(|e| e.as_str().to_string())),
            emergency_description: ActiveValue::Set(param.emergency_description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Appointment::from_entity(entity)
    }

    /// Finds an appointment by id.
    ///
    /// # Returns
    /// - `Ok(Some(Appointment))` - Appointment found
    /// - `Ok(None)` - No appointment with that id
    /// - `Err(AppError)` - Database error or malformed stored row
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Appointment>, AppError> {
        let entity = entity::prelude::Appointment::find_by_id(id)
            .one(self.db)
            .await?;

        entity.map(Appointment::from_entity).transpose()
    }

    /// Gets appointments matching the filter, soonest first (date then time ascending).
    ///
    /// # Arguments
    /// - `filter` - Optional status, type, doctor and linked patient filters
    pub async fn get_all(&self, filter: AppointmentFilter) -> Result<Vec<Appointment>, AppError> {
        let mut query = entity::prelude::Appointment::find();

        if let Some(status) = filter.status {
            query = query.filter(entity::appointment::Column::Status.eq(status.as_str()));
        }
        if let Some(appointment_type) = filter.appointment_type {
            query = query.filter(
                entity::appointment::Column::AppointmentType.eq(appointment_type.as_str()),
            );
        }
        if let Some(doctor_id) = filter.doctor_id {
            query = query.filter(entity::appointment::Column::DoctorId.eq(doctor_id));
        }
        if let Some(patient_id) = filter.patient_id {
            query = query.filter(entity::appointment::Column::PatientId.eq(patient_id));
        }

        query
            .order_by_asc(entity::appointment::Column::Date)
            .order_by_asc(entity::appointment::Column::Time)
            .all(self.db)
            .await?
            .into_iter()
            .map(Appointment::from_entity)
            .collect()
    }

    /// Gets the appointments explicitly linked to an account, newest first.
    ///
    /// Guest appointments matching the account's contact details are not included.
    pub async fn get_linked_to_patient(&self, patient_id: i32) -> Result<Vec<Appointment>, AppError> {
        entity::prelude::Appointment::find()
            .filter(entity::appointment::Column::PatientId.eq(patient_id))
            .order_by_desc(entity::appointment::Column::Date)
            .order_by_desc(entity::appointment::Column::Time)
            .all(self.db)
            .await?
            .into_iter()
            .map(Appointment::from_entity)
            .collect()
    }

    /// Applies a partial update to an appointment.
    ///
    /// # Returns
    /// - `Ok(Some(Appointment))` - The updated appointment
    /// - `Ok(None)` - No appointment with that id
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update(&self, param: UpdateAppointmentParam) -> Result<Option<Appointment>, AppError> {
        let Some(entity) = entity::prelude::Appointment::find_by_id(param.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(doctor_id) = param.doctor_id {
            active.doctor_id = ActiveValue::Set(doctor_id);
        }
        if let Some(service_id) = param.service_id {
            active.service_id = ActiveValue::Set(Some(service_id));
        }
        if let Some(date) = param.date {
            active.date = ActiveValue::Set(date);
        }
        if let Some(time) = param.time {
            active.time = ActiveValue::Set(time);
        }
        if let Some(status) = param.status {
            active.status = ActiveValue::Set(status.as_str().to_string());
        }
        if let Some(notes) = param.notes {
            active.notes = ActiveValue::Set(Some(notes));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(Appointment::from_entity(entity)?))
    }

    /// Deletes an appointment.
    ///
    /// # Returns
    /// - `Ok(true)` - The appointment was deleted
    /// - `Ok(false)` - No appointment with that id
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Appointment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
