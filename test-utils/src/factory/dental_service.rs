//! Dental service factory for creating test catalog entries.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test dental services with customizable fields.
pub struct DentalServiceFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    category: String,
    duration: i32,
    price: Option<f64>,
    is_active: bool,
}

impl<'a> DentalServiceFactory<'a> {
    /// Creates a new DentalServiceFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Service {id}"`
    /// - category: `"General"`
    /// - duration: `30`
    /// - price: `None`
    /// - is_active: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Service {}", id),
            category: "General".to_string(),
            duration: 30,
            price: None,
            is_active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the dental service entity into the database.
    pub async fn build(self) -> Result<entity::dental_service::Model, DbErr> {
        let now = Utc::now();
        entity::dental_service::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(None),
            category: ActiveValue::Set(self.category),
            duration: ActiveValue::Set(self.duration),
            price: ActiveValue::Set(self.price),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active General service with default values.
pub async fn create_dental_service(
    db: &DatabaseConnection,
) -> Result<entity::dental_service::Model, DbErr> {
    DentalServiceFactory::new(db).build().await
}
