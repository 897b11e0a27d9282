use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub phone: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub medical_history: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct UserListDto {
    pub count: usize,
    pub users: Vec<UserDto>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct CreateUserDto {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Option<String>,
    pub phone: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
}

/// Partial user update, absent fields are left unchanged.
#[derive(Debug, Serialize, Deserialize, Clone, Default, ToSchema)]
pub struct UpdateUserDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub phone: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub medical_history: Option<String>,
}
