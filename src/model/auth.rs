use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterDto {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    /// One-time code printed at startup while no admin account exists.
    pub admin_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}
