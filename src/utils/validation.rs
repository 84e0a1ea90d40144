use crate::utils::error::{CustomizerError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_negative(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(CustomizerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number >= 0".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CustomizerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number > 0".to_string(),
        });
    }
    Ok(())
}

pub fn validate_finite(field_name: &str, value: Option<f64>) -> Result<()> {
    match value {
        Some(v) if !v.is_finite() => Err(CustomizerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: v.to_string(),
            reason: "Modifier must be a finite number".to_string(),
        }),
        _ => Ok(()),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CustomizerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[String]) -> Result<()> {
    if !allowed.iter().any(|a| a == value) {
        return Err(CustomizerError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: if allowed.is_empty() {
                "No values are available here".to_string()
            } else {
                format!("Expected one of: {}", allowed.join(", "))
            },
        });
    }
    Ok(())
}
