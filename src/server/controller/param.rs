//! Query string parameters shared by list endpoints.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::server::{
    error::AppError,
    model::{
        appointment::{AppointmentFilter, AppointmentStatus, AppointmentType},
        dental_service::{DentalServiceFilter, ServiceCategory},
        doctor::DoctorFilter,
        parse_optional,
    },
};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DoctorQueryParam {
    /// Exact specialty to match.
    pub specialty: Option<String>,
    pub is_active: Option<bool>,
}

impl DoctorQueryParam {
    pub fn into_filter(self) -> DoctorFilter {
        DoctorFilter {
            specialty: self.specialty.filter(|s| !s.trim().is_empty()),
            is_active: self.is_active,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DentalServiceQueryParam {
    /// One of General, Cosmetic, Emergency or Specialty.
    pub category: Option<String>,
    pub is_active: Option<bool>,
}

impl DentalServiceQueryParam {
    pub fn into_filter(self) -> Result<DentalServiceFilter, AppError> {
        Ok(DentalServiceFilter {
            category: parse_optional::<ServiceCategory>(self.category.as_deref())?,
            is_active: self.is_active,
        })
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AppointmentQueryParam {
    /// One of pending, confirmed, completed or cancelled.
    pub status: Option<String>,
    /// Either regular or emergency.
    #[serde(rename = "type")]
    pub appointment_type: Option<String>,
    pub doctor_id: Option<i32>,
    pub patient_id: Option<i32>,
}

impl AppointmentQueryParam {
    pub fn into_filter(self) -> Result<AppointmentFilter, AppError> {
        Ok(AppointmentFilter {
            status: parse_optional::<AppointmentStatus>(self.status.as_deref())?,
            appointment_type: parse_optional::<AppointmentType>(self.appointment_type.as_deref())?,
            doctor_id: self.doctor_id,
            patient_id: self.patient_id,
        })
    }
}
