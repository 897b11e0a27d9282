use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct DoctorDto {
    pub id: i32,
    pub name: String,
    pub specialty: String,
    pub image: String,
    pub available_times: Vec<String>,
    pub bio: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct DoctorListDto {
    pub count: usize,
    pub doctors: Vec<DoctorDto>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct CreateDoctorDto {
    pub name: String,
    pub specialty: String,
    pub image: Option<String>,
    #[serde(default)]
    pub available_times: Vec<String>,
    pub bio: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, ToSchema)]
pub struct UpdateDoctorDto {
    pub name: Option<String>,
    pub specialty: Option<String>,
    pub image: Option<String>,
    pub available_times: Option<Vec<String>>,
    pub bio: Option<String>,
    pub is_active: Option<bool>,
}
