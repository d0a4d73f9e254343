use crate::utils::error::{OnboardingError, Result};
use regex::Regex;

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$";

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: &str, reason: impl Into<String>) -> OnboardingError {
    OnboardingError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_email(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    let re = Regex::new(EMAIL_PATTERN).map_err(|e| OnboardingError::ConfigValidationError {
        field: field_name.to_string(),
        message: format!("email pattern failed to compile: {}", e),
    })?;

    if !re.is_match(value) {
        return Err(invalid(field_name, value, "Not a valid email address"));
    }
    Ok(())
}

pub fn validate_pattern(field_name: &str, value: &str, pattern: &str, reason: &str) -> Result<()> {
    let re = Regex::new(pattern).map_err(|e| OnboardingError::ConfigValidationError {
        field: field_name.to_string(),
        message: format!("pattern '{}' failed to compile: {}", pattern, e),
    })?;

    if !re.is_match(value) {
        return Err(invalid(field_name, value, reason));
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(invalid(
            field_name,
            &value.to_string(),
            format!("Value must be at least {}", min_value),
        ));
    }
    Ok(())
}
