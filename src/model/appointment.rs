use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct AppointmentDoctorDto {
    pub id: i32,
    pub name: String,
    pub specialty: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct AppointmentServiceDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct AppointmentDto {
    pub id: i32,
    pub patient_id: Option<i32>,
    pub doctor_id: i32,
    pub doctor: Option<AppointmentDoctorDto>,
    pub service_id: Option<i32>,
    pub service: Option<AppointmentServiceDto>,
    pub date: NaiveDate,
    pub time: String,
    pub status: String,
    #[serde(rename = "type")]
    pub appointment_type: String,
    pub patient_name: String,
    pub patient_phone: String,
    pub patient_age: Option<i32>,
    pub patient_gender: Option<String>,
    pub notes: Option<String>,
    pub emergency_type: Option<String>,
    pub emergency_description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct AppointmentListDto {
    pub count: usize,
    pub appointments: Vec<AppointmentDto>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct CreateAppointmentDto {
    pub doctor_id: i32,
    pub service_id: Option<i32>,
    pub date: NaiveDate,
    pub time: String,
    #[serde(rename = "type")]
    pub appointment_type: Option<String>,
    pub patient_name: String,
    pub patient_phone: String,
    pub patient_age: Option<i32>,
    pub patient_gender: Option<String>,
    pub notes: Option<String>,
    pub emergency_type: Option<String>,
    pub emergency_description: Option<String>,
}

/// Partial appointment update, absent fields are left unchanged.
#[derive(Debug, Serialize, Deserialize, Clone, Default, ToSchema)]
pub struct UpdateAppointmentDto {
    pub doctor_id: Option<i32>,
    pub service_id: Option<i32>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
}
