//! Doctor domain models and parameters.
//!
//! Doctors are bookable practitioners with a specialty and a list of `HH:MM` slots they
//! are usually available at. The slot list is stored JSON encoded in a single column and
//! decoded at the repository boundary.

use chrono::{DateTime, Utc};

use crate::{
    model::doctor::{CreateDoctorDto, DoctorDto, UpdateDoctorDto},
    server::{
        error::{internal::InternalError, AppError},
        util::parse::{parse_time_slot, require_non_blank},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Doctor {
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

impl Doctor {
    /// Converts an entity model to a doctor domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Doctor)` - The converted doctor
    /// - `Err(AppError::InternalErr(DecodeColumn))` - Stored availability is not a JSON
    ///   list of strings
    pub fn from_entity(entity: entity::doctor::Model) -> Result<Self, AppError> {
        let available_times = decode_available_times(&entity.available_times)?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            specialty: entity.specialty,
            image: entity.image,
            available_times,
            bio: entity.bio,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> DoctorDto {
        DoctorDto {
            id: self.id,
            name: self.name,
            specialty: self.specialty,
            image: self.image,
            available_times: self.available_times,
            bio: self.bio,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

pub fn decode_available_times(value: &str) -> Result<Vec<String>, InternalError> {
    serde_json::from_str(value).map_err(|source| InternalError::DecodeColumn {
        field: "available_times",
        source,
    })
}

pub fn encode_available_times(times: &[String]) -> String {
    // Serializing a slice of strings cannot fail.
    serde_json::to_string(times).unwrap_or_else(|_| "[]".to_string())
}

/// Validates a list of availability slots, dropping duplicates and keeping order.
fn parse_available_times(times: Vec<String>) -> Result<Vec<String>, AppError> {
    let mut slots: Vec<String> = Vec::with_capacity(times.len());
    for time in times {
        let slot = parse_time_slot(&time)?;
        if !slots.contains(&slot) {
            slots.push(slot);
        }
    }
    Ok(slots)
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateDoctorParam {
    pub name: String,
    pub specialty: String,
    pub image: String,
    pub available_times: Vec<String>,
    pub bio: Option<String>,
}

impl CreateDoctorParam {
    /// Validates a doctor creation request.
    ///
    /// # Returns
    /// - `Ok(CreateDoctorParam)` - Validated parameters
    /// - `Err(AppError::BadRequest)` - Blank name or specialty, or a malformed slot
    pub fn from_dto(dto: CreateDoctorDto) -> Result<Self, AppError> {
        Ok(Self {
            name: require_non_blank("Doctor name", &dto.name)?,
            specialty: require_non_blank("Doctor specialty", &dto.specialty)?,
            image: dto.image.unwrap_or_default(),
            available_times: parse_available_times(dto.available_times)?,
            bio: dto.bio,
        })
    }
}

/// Partial doctor update. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateDoctorParam {
    pub id: i32,
    pub name: Option<String>,
    pub specialty: Option<String>,
    pub image: Option<String>,
    pub available_times: Option<Vec<String>>,
    pub bio: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateDoctorParam {
    pub fn from_dto(id: i32, dto: UpdateDoctorDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            name: dto
                .name
                .map(|name| require_non_blank("Doctor name", &name))
                .transpose()?,
            specialty: dto
                .specialty
                .map(|specialty| require_non_blank("Doctor specialty", &specialty))
                .transpose()?,
            image: dto.image,
            available_times: dto.available_times.map(parse_available_times).transpose()?,
            bio: dto.bio,
            is_active: dto.is_active,
        })
    }
}

/// Optional filters for listing doctors.
#[derive(Debug, Clone, Default)]
pub struct DoctorFilter {
    pub specialty: Option<String>,
    pub is_active: Option<bool>,
}
