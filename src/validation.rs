use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::AppError;

pub fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Logged quantities multiply catalog values, so they must be finite and positive.
pub fn validate_quantity(quantity: f64) -> Result<f64, AppError> {
    if !quantity.is_finite() || quantity <= 0.0 {
        return Err(AppError::validation(
            "Please enter a valid quantity greater than 0.",
        ));
    }
    Ok(quantity)
}

pub fn validate_non_negative(field: &str, value: f64) -> Result<f64, AppError> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::validation(format!(
            "{} must be a non-negative number",
            field
        )));
    }
    Ok(value)
}

/// Upper bound for a raw macro value in grams.
pub const MAX_MACRO_GRAMS: f64 = 10_000.0;

pub fn validate_grams(field: &str, value: f64) -> Result<f64, AppError> {
    let value = validate_non_negative(field, value)?;
    if value > MAX_MACRO_GRAMS {
        return Err(AppError::validation(format!(
            "{} must be at most {} g",
            field, MAX_MACRO_GRAMS
        )));
    }
    Ok(value)
}

pub fn validate_range(field: &str, value: f64, min: f64, max: f64) -> Result<f64, AppError> {
    if !value.is_finite() || value < min || value > max {
        return Err(AppError::validation(format!(
            "{} must be between {} and {}",
            field, min, max
        )));
    }
    Ok(value)
}

pub fn validate_name(name: &str) -> Result<String, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::validation("Name is required"));
    }
    Ok(name.to_string())
}

/// Rounds to one decimal place, the precision macros are stored with.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
