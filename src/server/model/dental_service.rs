//! Dental service (treatment catalog) domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::dental_service::{CreateDentalServiceDto, DentalServiceDto, UpdateDentalServiceDto},
    server::{
        error::AppError,
        model::{parse_optional, StoredEnum},
        util::parse::require_non_blank,
    },
};

/// Default treatment length in minutes.
pub const DEFAULT_DURATION_MINUTES: i32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceCategory {
    General,
    Cosmetic,
    Emergency,
    Specialty,
}

impl StoredEnum for ServiceCategory {
    const FIELD: &'static str = "category";
    const VARIANTS: &'static [Self] = &[
        ServiceCategory::General,
        ServiceCategory::Cosmetic,
        ServiceCategory::Emergency,
        ServiceCategory::Specialty,
    ];

    fn as_str(self) -> &'static str {
        match self {
            ServiceCategory::General => "General",
            ServiceCategory::Cosmetic => "Cosmetic",
            ServiceCategory::Emergency => "Emergency",
            ServiceCategory::Specialty => "Specialty",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DentalService {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub category: ServiceCategory,
    pub duration: i32,
    pub price: Option<f64>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DentalService {
    pub fn from_entity(entity: entity::dental_service::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            category: ServiceCategory::from_stored(entity.category)?,
            duration: entity.duration,
            price: entity.price,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> DentalServiceDto {
        DentalServiceDto {
            id: self.id,
            name: self.name,
            description: self.description,
            category: self.category.as_str().to_string(),
            duration: self.duration,
            price: self.price,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

fn validate_duration(duration: i32) -> Result<i32, AppError> {
    if duration <= 0 {
        return Err(AppError::BadRequest(
            "Duration must be a positive number of minutes".to_string(),
        ));
    }
    Ok(duration)
}

fn validate_price(price: f64) -> Result<f64, AppError> {
    if !price.is_finite() || price < 0.0 {
        return Err(AppError::BadRequest(
            "Price must be zero or greater".to_string(),
        ));
    }
    Ok(price)
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateDentalServiceParam {
    pub name: String,
    pub description: Option<String>,
    pub category: ServiceCategory,
    pub duration: i32,
    pub price: Option<f64>,
}

impl CreateDentalServiceParam {
    /// Validates a service creation request, applying catalog defaults.
    ///
    /// # Returns
    /// - `Ok(CreateDentalServiceParam)` - Validated parameters
    /// - `Err(AppError::BadRequest)` - Blank name, unknown category, non-positive duration
    ///   or negative price
    pub fn from_dto(dto: CreateDentalServiceDto) -> Result<Self, AppError> {
        Ok(Self {
            name: require_non_blank("Service name", &dto.name)?,
            description: dto.description.map(|d| d.trim().to_string()),
            category: parse_optional(dto.category.as_deref())?
                .unwrap_or(ServiceCategory::General),
            duration: validate_duration(dto.duration.unwrap_or(DEFAULT_DURATION_MINUTES))?,
            price: dto.price.map(validate_price).transpose()?,
        })
    }
}

/// Partial service update. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateDentalServiceParam {
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<ServiceCategory>,
    pub duration: Option<i32>,
    pub price: Option<f64>,
    pub is_active: Option<bool>,
}

impl UpdateDentalServiceParam {
    pub fn from_dto(id: i32, dto: UpdateDentalServiceDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            name: dto
                .name
                .map(|name| require_non_blank("Service name", &name))
                .transpose()?,
            description: dto.description.map(|d| d.trim().to_string()),
            category: parse_optional(dto.category.as_deref())?,
            duration: dto.duration.map(validate_duration).transpose()?,
            price: dto.price.map(validate_price).transpose()?,
            is_active: dto.is_active,
        })
    }
}

/// Optional filters for listing services.
#[derive(Debug, Clone, Default)]
pub struct DentalServiceFilter {
    pub category: Option<ServiceCategory>,
    pub is_active: Option<bool>,
}
