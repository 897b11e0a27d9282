use chrono::NaiveTime;

use crate::server::error::AppError;

/// Validates an appointment or availability slot in `HH:MM` form.
///
/// # Arguments
/// - `value` - The slot string to validate
///
/// # Returns
/// - `Ok(String)` - The slot, trimmed, in canonical `HH:MM` form
/// - `Err(AppError::BadRequest)` - The value is not a valid 24 hour `HH:MM` time
pub fn parse_time_slot(value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();

    let time = NaiveTime::parse_from_str(trimmed, "%H:%M")
        .map_err(|_| AppError::BadRequest(format!("Invalid time '{}', expected HH:MM", value)))?;

    Ok(time.format("%H:%M").to_string())
}

/// Requires a non-blank string field, returning it trimmed.
///
/// # Arguments
/// - `field` - Field name used in the error message
/// - `value` - The submitted value
///
/// # Returns
/// - `Ok(String)` - Trimmed value
/// - `Err(AppError::BadRequest)` - The value is empty or whitespace only
pub fn require_non_blank(field: &str, value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}
