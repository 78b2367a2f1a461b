use thiserror::Error;

use crate::config::{GenerationSettings, Settings};

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(settings: &Settings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = Self::validate_generation(&settings.generation) {
            errors.extend(e);
        }

        if let Err(e) = Self::validate_overrides(settings) {
            errors.extend(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_generation(generation: &GenerationSettings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if generation.count < 1 {
            errors.push(ValidationError::InvalidValue {
                field: "generation.count".to_string(),
                reason: "Count must be a positive number".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_overrides(settings: &Settings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        for (index, entry) in settings.overrides.iter().enumerate() {
            if entry.field.trim().is_empty() {
                errors.push(ValidationError::MissingField(format!("overrides[{}].field", index)));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
