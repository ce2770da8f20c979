//! Validation rules for form and filter fields

use thiserror::Error;

/// A client-side rule violation, reported inline next to the offending field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{label} is required")]
    Required { field: String, label: String },

    #[error("{label} must contain at least {min} characters")]
    TooShort {
        field: String,
        label: String,
        min: usize,
    },

    #[error("{label} must not exceed {max} characters")]
    TooLong {
        field: String,
        label: String,
        max: usize,
    },

    #[error("{label} must be a number")]
    NotANumber { field: String, label: String },

    #[error("{label} must be at least {min}")]
    BelowMin {
        field: String,
        label: String,
        min: f64,
    },

    #[error("{label} must be at most {max}")]
    AboveMax {
        field: String,
        label: String,
        max: f64,
    },

    #[error("{label} must be one of the listed options")]
    UnknownOption { field: String, label: String },

    #[error("{from_label} must not be later than {to_label}")]
    InvertedRange {
        field: String,
        from_label: String,
        to_label: String,
    },
}

impl ValidationError {
    /// Name of the field the message belongs to.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field, .. }
            | ValidationError::TooShort { field, .. }
            | ValidationError::TooLong { field, .. }
            | ValidationError::NotANumber { field, .. }
            | ValidationError::BelowMin { field, .. }
            | ValidationError::AboveMax { field, .. }
            | ValidationError::UnknownOption { field, .. }
            | ValidationError::InvertedRange { field, .. } => field,
        }
    }
}

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub numeric: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            numeric: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    /// Optional numeric field bounded by `min..=max`
    pub const fn numeric(min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            numeric: true,
            min,
            max,
            ..Self::none()
        }
    }

    pub const fn with_min_length(self, min: usize) -> Self {
        Self {
            min_length: Some(min),
            ..self
        }
    }

    pub const fn with_max_length(self, max: usize) -> Self {
        Self {
            max_length: Some(max),
            ..self
        }
    }

    /// Check if field is required
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Validate a string value against the rules.
    ///
    /// An empty optional value passes without further checks.
    pub fn validate_string(&self, field: &str, label: &str, value: &str) -> Result<(), ValidationError> {
        let value = value.trim();
        if value.is_empty() {
            return if self.required {
                Err(ValidationError::Required {
                    field: field.to_string(),
                    label: label.to_string(),
                })
            } else {
                Ok(())
            };
        }

        let length = value.chars().count();
        if let Some(min) = self.min_length {
            if length < min {
                return Err(ValidationError::TooShort {
                    field: field.to_string(),
                    label: label.to_string(),
                    min,
                });
            }
        }

        if let Some(max) = self.max_length {
            if length > max {
                return Err(ValidationError::TooLong {
                    field: field.to_string(),
                    label: label.to_string(),
                    max,
                });
            }
        }

        if self.numeric {
            let number = value.parse::<f64>().map_err(|_| ValidationError::NotANumber {
                field: field.to_string(),
                label: label.to_string(),
            })?;
            self.validate_number(field, label, number)?;
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules
    pub fn validate_number(&self, field: &str, label: &str, value: f64) -> Result<(), ValidationError> {
        if let Some(min) = self.min {
            if value < min {
                return Err(ValidationError::BelowMin {
                    field: field.to_string(),
                    label: label.to_string(),
                    min,
                });
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return Err(ValidationError::AboveMax {
                    field: field.to_string(),
                    label: label.to_string(),
                    max,
                });
            }
        }

        Ok(())
    }
}
