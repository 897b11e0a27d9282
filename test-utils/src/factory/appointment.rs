//! Appointment factory for creating linked and guest bookings.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test appointments.
///
/// Appointments are guest bookings unless `patient()` links them to an account.
///
/// # Example
///
/// ```rust,ignore
/// let appointment = AppointmentFactory::new(&db, doctor.id)
///     .patient_name("Jane Doe")
///     .patient_phone("(012) 345-6789")
///     .build()
///     .await?;
/// ```
pub struct AppointmentFactory<'a> {
    db: &'a DatabaseConnection,
    patient_id: Option<i32>,
    doctor_id: i32,
    service_id: Option<i32>,
    date: NaiveDate,
    time: String,
    status: String,
    appointment_type: String,
    patient_name: String,
    patient_phone: String,
}

impl<'a> AppointmentFactory<'a> {
    /// Creates a new AppointmentFactory with default values.
    ///
    /// Defaults:
    /// - patient_id: `None` (guest booking)
    /// - service_id: `None`
    /// - date: 2026-03-01, time: `"12:00"`
    /// - status: `"pending"`, type: `"regular"`
    /// - patient_name: `"Guest {id}"`, patient_phone: `"555-{id}"`
    pub fn new(db: &'a DatabaseConnection, doctor_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            patient_id: None,
            doctor_id,
            service_id: None,
            date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap_or_default(),
            time: "12:00".to_string(),
            status: "pending".to_string(),
            appointment_type: "regular".to_string(),
            patient_name: format!("Guest {}", id),
            patient_phone: format!("555-{:04}", id),
        }
    }

    /// Links the appointment to an account.
    pub fn patient(mut self, patient_id: i32) -> Self {
        self.patient_id = Some(patient_id);
        self
    }

    pub fn service(mut self, service_id: i32) -> Self {
        self.service_id = Some(service_id);
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn emergency(mut self) -> Self {
        self.appointment_type = "emergency".to_string();
        self
    }

    pub fn patient_name(mut self, name: impl Into<String>) -> Self {
        self.patient_name = name.into();
        self
    }

    pub fn patient_phone(mut self, phone: impl Into<String>) -> Self {
        self.patient_phone = phone.into();
        self
    }

    /// Builds and inserts the appointment entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::appointment::Model)` - Created appointment entity
    /// - `Err(DbErr)` - Database error, e.g. the doctor does not exist
    pub async fn build(self) -> Result<entity::appointment::Model, DbErr> {
        let now = Utc::now();
        entity::appointment::ActiveModel {
            patient_id: ActiveValue::Set(self.patient_id),
            doctor_id: ActiveValue::Set(self.doctor_id),
            service_id: ActiveValue::Set(self.service_id),
            date: ActiveValue::Set(self.date),
            time: ActiveValue::Set(self.time),
            status: ActiveValue::Set(self.status),
            appointment_type: ActiveValue::Set(self.appointment_type),
            patient_name: ActiveValue::Set(self.patient_name),
            patient_phone: ActiveValue::Set(self.patient_phone),
            patient_age: ActiveValue::Set(None),
            patient_gender: ActiveValue::Set(None),
            notes: ActiveValue::Set(None),
            emergency_type: ActiveValue::Set(None),
            emergency_description: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guest appointment with the given doctor.
pub async fn create_guest_appointment(
    db: &DatabaseConnection,
    doctor_id: i32,
) -> Result<entity::appointment::Model, DbErr> {
    AppointmentFactory::new(db, doctor_id).build().await
}

/// Creates an appointment linked to `patient_id` with the given doctor.
pub async fn create_linked_appointment(
    db: &DatabaseConnection,
    doctor_id: i32,
    patient_id: i32,
) -> Result<entity::appointment::Model, DbErr> {
    AppointmentFactory::new(db, doctor_id)
        .patient(patient_id)
        .build()
        .await
}
