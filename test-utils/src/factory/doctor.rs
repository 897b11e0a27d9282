//! Doctor factory for creating test doctors.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test doctors with customizable fields.
pub struct DoctorFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    specialty: String,
    available_times: Vec<String>,
    is_active: bool,
}

impl<'a> DoctorFactory<'a> {
    /// Creates a new DoctorFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Dr. Doctor {id}"`
    /// - specialty: `"General Dentistry"`
    /// - available_times: `["12:00", "14:00"]`
    /// - is_active: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Dr. Doctor {}", id),
            specialty: "General Dentistry".to_string(),
            available_times: vec!["12:00".to_string(), "14:00".to_string()],
            is_active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = specialty.into();
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the doctor entity into the database.
    pub async fn build(self) -> Result<entity::doctor::Model, DbErr> {
        let available_times = serde_json::to_string(&self.available_times)
            .map_err(|e| DbErr::Custom(e.to_string()))?;
        let now = Utc::now();

        entity::doctor::ActiveModel {
            name: ActiveValue::Set(self.name),
            specialty: ActiveValue::Set(self.specialty),
            image: ActiveValue::Set(String::new()),
            available_times: ActiveValue::Set(available_times),
            bio: ActiveValue::Set(None),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active doctor with default values.
pub async fn create_doctor(db: &DatabaseConnection) -> Result<entity::doctor::Model, DbErr> {
    DoctorFactory::new(db).build().await
}
