//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! They provide type-safe representations with business logic separated from database
//! and API concerns.

pub mod appointment;
pub mod auth;
pub mod dental_service;
pub mod doctor;
pub mod user;

use crate::server::error::{internal::InternalError, AppError};

/// Closed set of values persisted as text.
///
/// Implemented by the enums that are stored in plain string columns (roles, statuses,
/// categories). Request values are parsed with [`StoredEnum::parse`], which reports a
/// 400 listing the accepted values, while values read back from the database go through
/// [`StoredEnum::from_stored`], where an unknown value indicates corrupt data.
pub trait StoredEnum: Sized + Copy + 'static {
    /// Human readable field name used in error messages.
    const FIELD: &'static str;
    /// Every variant, in the order they are listed to clients.
    const VARIANTS: &'static [Self];

    /// The stored and serialized representation.
    fn as_str(self) -> &'static str;

    /// Parses a client supplied value.
    ///
    /// # Returns
    /// - `Ok(Self)` - The matching variant
    /// - `Err(AppError::BadRequest)` - No variant matches exactly
    fn parse(value: &str) -> Result<Self, AppError> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.as_str() == value)
            .ok_or_else(|| {
                let allowed: Vec<&str> = Self::VARIANTS.iter().map(|v| v.as_str()).collect();
                AppError::BadRequest(format!(
                    "Invalid {} '{}', expected one of: {}",
                    Self::FIELD,
                    value,
                    allowed.join(", ")
                ))
            })
    }

    /// Converts a value read from the database.
    ///
    /// # Returns
    /// - `Ok(Self)` - The matching variant
    /// - `Err(InternalError::UnknownStoredValue)` - The column holds an unknown value
    fn from_stored(value: String) -> Result<Self, InternalError> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.as_str() == value)
            .ok_or(InternalError::UnknownStoredValue {
                field: Self::FIELD,
                value,
            })
    }
}

/// Parses an optional client supplied enum value.
pub fn parse_optional<T: StoredEnum>(value: Option<&str>) -> Result<Option<T>, AppError> {
    value.map(T::parse).transpose()
}

/// Converts an optional stored enum value.
pub fn optional_from_stored<T: StoredEnum>(
    value: Option<String>,
) -> Result<Option<T>, InternalError> {
    value.map(T::from_stored).transpose()
}
