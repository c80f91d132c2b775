use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use thiserror::Error;

pub const DEFAULT_RADIUS_KM: u32 = 20;

/// Rejected parameter with a human-readable message
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

fn date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("static pattern"))
}

/// Exactly 3 ASCII letters, normalized to uppercase.
pub fn validate_city_code(raw: &str, field: &'static str) -> Result<String, ValidationError> {
    if raw.len() != 3 || !raw.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ValidationError::new(
            field,
            format!("{field} must be exactly 3 letters"),
        ));
    }
    Ok(raw.to_ascii_uppercase())
}

/// Literal `YYYY-MM-DD` shape, then calendar validity.
pub fn validate_date(raw: &str, field: &'static str) -> Result<String, ValidationError> {
    if !date_pattern().is_match(raw) {
        return Err(ValidationError::new(
            field,
            format!("{field} must be in YYYY-MM-DD format"),
        ));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|_| raw.to_owned())
        .map_err(|_| ValidationError::new(field, format!("{field} is not a valid date")))
}

/// Integer in `[min, max]`. Out-of-range values report the range, not a
/// parse failure, so the parse happens on a wide type first.
pub fn validate_positive_int(
    raw: &str,
    field: &'static str,
    min: u32,
    max: u32,
) -> Result<u32, ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::new(field, format!("{field} is required")));
    }
    let value: i64 = raw.parse().map_err(|_| {
        ValidationError::new(field, format!("{field} must be a valid integer"))
    })?;
    if value < i64::from(min) || value > i64::from(max) {
        return Err(ValidationError::new(
            field,
            format!("{field} must be between {min} and {max}"),
        ));
    }
    Ok(value as u32)
}

pub fn validate_latitude(raw: &str) -> Result<f64, ValidationError> {
    validate_float_range(raw, "latitude", "Latitude", -90.0, 90.0)
}

pub fn validate_longitude(raw: &str) -> Result<f64, ValidationError> {
    validate_float_range(raw, "longitude", "Longitude", -180.0, 180.0)
}

fn validate_float_range(
    raw: &str,
    field: &'static str,
    label: &str,
    min: f64,
    max: f64,
) -> Result<f64, ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::new(field, format!("{label} is required")));
    }
    let value: f64 = raw.parse().map_err(|_| {
        ValidationError::new(field, format!("{label} must be a valid number"))
    })?;
    if !(min..=max).contains(&value) {
        return Err(ValidationError::new(
            field,
            format!("{label} must be between {min} and {max}"),
        ));
    }
    Ok(value)
}

/// Optional; empty input takes the 20 km default.
pub fn validate_radius(raw: &str) -> Result<u32, ValidationError> {
    if raw.is_empty() {
        return Ok(DEFAULT_RADIUS_KM);
    }
    let value: i64 = raw.parse().map_err(|_| {
        ValidationError::new("radius", "Radius must be a valid integer")
    })?;
    if !(1..=100).contains(&value) {
        return Err(ValidationError::new(
            "radius",
            "Radius must be between 1 and 100 km",
        ));
    }
    Ok(value as u32)
}
