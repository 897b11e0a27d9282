use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct DentalServiceDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    /// Duration in minutes.
    pub duration: i32,
    pub price: Option<f64>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct DentalServiceListDto {
    pub count: usize,
    pub services: Vec<DentalServiceDto>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct CreateDentalServiceDto {
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub duration: Option<i32>,
    pub price: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, ToSchema)]
pub struct UpdateDentalServiceDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub duration: Option<i32>,
    pub price: Option<f64>,
    pub is_active: Option<bool>,
}
