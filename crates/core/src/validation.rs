//! Field rules for brands, models and cars.
//!
//! The `validate_*` functions plug into `#[validate(custom(...))]` on the
//! input DTOs. The `check_*` functions return plain messages for callers
//! that validate raw form input.

use std::borrow::Cow;

use validator::ValidationError;

use crate::fuel::FuelType;

pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2030;

pub const MIN_DOORS: i32 = 2;
pub const MAX_DOORS: i32 = 5;

pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 100;

/// Reject strings that are empty once trimmed.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error("blank", "must not be blank".to_string()));
    }
    Ok(())
}

/// Reject fuel values outside the [`FuelType`] enumeration.
pub fn validate_fuel(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<FuelType>()
        .map(|_| ())
        .map_err(|e| error("fuel", e.to_string()))
}

pub fn check_year(year: i32) -> Result<(), String> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(format!("Year must be between {MIN_YEAR} and {MAX_YEAR}, got {year}"))
    }
}

pub fn check_doors(doors: i32) -> Result<(), String> {
    if (MIN_DOORS..=MAX_DOORS).contains(&doors) {
        Ok(())
    } else {
        Err(format!("Door count must be between {MIN_DOORS} and {MAX_DOORS}, got {doors}"))
    }
}

pub fn check_price(price: f64) -> Result<(), String> {
    if price.is_finite() && price > 0.0 {
        Ok(())
    } else {
        Err(format!("Price must be greater than zero, got {price}"))
    }
}

/// Trim a name and enforce the length bounds shared by brands and models.
pub fn normalize_name(name: &str) -> Result<String, String> {
    let trimmed = name.trim();
    let len = trimmed.chars().count();
    if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&len) {
        return Err(format!(
            "Name must be between {NAME_MIN_LEN} and {NAME_MAX_LEN} characters"
        ));
    }
    Ok(trimmed.to_string())
}

fn error(code: &'static str, message: String) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Owned(message));
    err
}
