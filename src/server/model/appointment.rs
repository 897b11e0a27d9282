//! Appointment domain models and parameters.
//!
//! Appointments are either linked to a patient account (`patient_id` set) or are guest
//! bookings that only carry the name and phone number entered in the booking form.
//! [`AppointmentOwnership`] is the narrow view of an appointment used by access control.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::appointment::{
        AppointmentDoctorDto, AppointmentDto, AppointmentServiceDto, CreateAppointmentDto,
        UpdateAppointmentDto,
    },
    server::{
        error::AppError,
        model::{
            dental_service::DentalService, doctor::Doctor, optional_from_stored,
            parse_optional, user::Gender, StoredEnum,
        },
        util::parse::{parse_time_slot, require_non_blank},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl StoredEnum for AppointmentStatus {
    const FIELD: &'static str = "status";
    const VARIANTS: &'static [Self] = &[
        AppointmentStatus::Pending,
        AppointmentStatus::Confirmed,
        AppointmentStatus::Completed,
        AppointmentStatus::Cancelled,
    ];

    fn as_str(self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentType {
    Regular,
    Emergency,
}

impl StoredEnum for AppointmentType {
    const FIELD: &'static str = "type";
    const VARIANTS: &'static [Self] = &[AppointmentType::Regular, AppointmentType::Emergency];

    fn as_str(self) -> &'static str {
        match self {
            AppointmentType::Regular => "regular",
            AppointmentType::Emergency => "emergency",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmergencyType {
    SevereToothPain,
    Bleeding,
    BrokenTooth,
    Swelling,
    AccidentTrauma,
}

impl StoredEnum for EmergencyType {
    const FIELD: &'static str = "emergency type";
    const VARIANTS: &'static [Self] = &[
        EmergencyType::SevereToothPain,
        EmergencyType::Bleeding,
        EmergencyType::BrokenTooth,
        EmergencyType::Swelling,
        EmergencyType::AccidentTrauma,
    ];

    fn as_str(self) -> &'static str {
        match self {
            EmergencyType::SevereToothPain => "Severe Tooth Pain",
            EmergencyType::Bleeding => "Bleeding",
            EmergencyType::BrokenTooth => "Broken Tooth",
            EmergencyType::Swelling => "Swelling",
            EmergencyType::AccidentTrauma => "Accident Trauma",
        }
    }
}

/// The fields of an appointment that decide who may access it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentOwnership {
    /// Account the appointment is linked to. Authoritative when present.
    pub linked_patient_id: Option<i32>,
    pub patient_name: String,
    pub patient_phone: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Appointment {
    pub id: i32,
    pub patient_id: Option<i32>,
    pub doctor_id: i32,
    pub service_id: Option<i32>,
    pub date: NaiveDate,
    pub time: String,
    pub status: AppointmentStatus,
    pub appointment_type: AppointmentType,
    pub patient_name: String,
    pub patient_phone: String,
    pub patient_age: Option<i32>,
    pub patient_gender: Option<Gender>,
    pub notes: Option<String>,
    pub emergency_type: Option<EmergencyType>,
    pub emergency_description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Appointment {
    /// Converts an entity model to an appointment domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Appointment)` - The converted appointment
    /// - `Err(AppError::InternalErr(UnknownStoredValue))` - A stored enum column holds an
    ///   unknown value
    pub fn from_entity(entity: entity::appointment::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            patient_id: entity.patient_id,
            doctor_id: entity.doctor_id,
            service_id: entity.service_id,
            date: entity.date,
            time: entity.time,
            status: AppointmentStatus::from_stored(entity.status)?,
            appointment_type: AppointmentType::from_stored(entity.appointment_type)?,
            patient_name: entity.patient_name,
            patient_phone: entity.patient_phone,
            patient_age: entity.patient_age,
            patient_gender: optional_from_stored(entity.patient_gender)?,
            notes: entity.notes,
            emergency_type: optional_from_stored(entity.emergency_type)?,
            emergency_description: entity.emergency_description,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn ownership(&self) -> AppointmentOwnership {
        AppointmentOwnership {
            linked_patient_id: self.patient_id,
            patient_name: self.patient_name.clone(),
            patient_phone: self.patient_phone.clone(),
        }
    }

    /// Converts the appointment to a DTO, embedding doctor and service summaries.
    ///
    /// # Arguments
    /// - `doctor` - The appointment's doctor, if it could be loaded
    /// - `service` - The appointment's service, if one is set and could be loaded
    pub fn into_dto(self, doctor: Option<&Doctor>, service: Option<&DentalService>) -> AppointmentDto {
        AppointmentDto {
            id: self.id,
            patient_id: self.patient_id,
            doctor_id: self.doctor_id,
            doctor: doctor.map(|d| AppointmentDoctorDto {
                id: d.id,
                name: d.name.clone(),
                specialty: d.specialty.clone(),
            }),
            service_id: self.service_id,
            service: service.map(|s| AppointmentServiceDto {
                id: s.id,
                name: s.name.clone(),
                description: s.description.clone(),
            }),
            date: self.date,
            time: self.time,
            status: self.status.as_str().to_string(),
            appointment_type: self.appointment_type.as_str().to_string(),
            patient_name: self.patient_name,
            patient_phone: self.patient_phone,
            patient_age: self.patient_age,
            patient_gender: self.patient_gender.map(|g| g.as_str().to_string()),
            notes: self.notes,
            emergency_type: self.emergency_type.map(|e| e.as_str().to_string()),
            emergency_description: self.emergency_description,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// An appointment together with its doctor and service, as returned by the API.
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentDetails {
    pub appointment: Appointment,
    pub doctor: Option<Doctor>,
    pub service: Option<DentalService>,
}

impl AppointmentDetails {
    pub fn into_dto(self) -> AppointmentDto {
        self.appointment
            .into_dto(self.doctor.as_ref(), self.service.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateAppointmentParam {
    pub patient_id: Option<i32>,
    pub doctor_id: i32,
    pub service_id: Option<i32>,
    pub date: NaiveDate,
    pub time: String,
    pub appointment_type: AppointmentType,
    pub patient_name: String,
    pub patient_phone: String,
    pub patient_age: Option<i32>,
    pub patient_gender: Option<Gender>,
    pub notes: Option<String>,
    pub emergency_type: Option<EmergencyType>,
    pub emergency_description: Option<String>,
}

impl CreateAppointmentParam {
    /// Validates a booking request.
    ///
    /// Existence of the referenced doctor and service is checked by the service layer.
    ///
    /// # Arguments
    /// - `dto` - The booking form
    /// - `patient_id` - Logged in account making the booking, `None` for guests
    ///
    /// # Returns
    /// - `Ok(CreateAppointmentParam)` - Validated parameters
    /// - `Err(AppError::BadRequest)` - Blank patient name or phone, malformed time, or an
    ///   unknown type, gender or emergency type
    pub fn from_dto(dto: CreateAppointmentDto, patient_id: Option<i32>) -> Result<Self, AppError> {
        if let Some(age) = dto.patient_age {
            if !(0..=150).contains(&age) {
                return Err(AppError::BadRequest(
                    "Patient age must be between 0 and 150".to_string(),
                ));
            }
        }

        Ok(Self {
            patient_id,
            doctor_id: dto.doctor_id,
            service_id: dto.service_id,
            date: dto.date,
            time: parse_time_slot(&dto.time)?,
            appointment_type: parse_optional(dto.appointment_type.as_deref())?
                .unwrap_or(AppointmentType::Regular),
            patient_name: require_non_blank("Patient name", &dto.patient_name)?,
            patient_phone: require_non_blank("Patient phone", &dto.patient_phone)?,
            patient_age: dto.patient_age,
            patient_gender: parse_optional(dto.patient_gender.as_deref())?,
            notes: dto.notes,
            emergency_type: parse_optional(dto.emergency_type.as_deref())?,
            emergency_description: dto.emergency_description,
        })
    }
}

/// Partial appointment update. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateAppointmentParam {
    pub id: i32,
    pub doctor_id: Option<i32>,
    pub service_id: Option<i32>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub status: Option<AppointmentStatus>,
    pub notes: Option<String>,
}

impl UpdateAppointmentParam {
    pub fn from_dto(id: i32, dto: UpdateAppointmentDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            doctor_id: dto.doctor_id,
            service_id: dto.service_id,
            date: dto.date,
            time: dto.time.as_deref().map(parse_time_slot).transpose()?,
            status: parse_optional(dto.status.as_deref())?,
            notes: dto.notes,
        })
    }
}

/// Optional filters for listing appointments.
#[derive(Debug, Clone, Default)]
pub struct AppointmentFilter {
    pub status: Option<AppointmentStatus>,
    pub appointment_type: Option<AppointmentType>,
    pub doctor_id: Option<i32>,
    pub patient_id: Option<i32>,
}
