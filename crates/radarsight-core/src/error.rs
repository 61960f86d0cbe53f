//! Configuration errors raised at the session boundary.

use thiserror::Error;

/// A configuration value the engine refuses to compute with.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must exceed {min}, got {value}")]
    TooSmall {
        field: &'static str,
        value: f64,
        min: f64,
    },

    #[error("{field} must lie in [{min}, {max}), got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("target position coincides with the radar")]
    TargetAtRadar,
}

/// Failure to load a session document.
#[derive(Debug, Error)]
pub enum SessionLoadError {
    #[error("malformed session document: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] ConfigurationError),
}

pub fn require_finite(field: &'static str, value: f64) -> Result<f64, ConfigurationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigurationError::NonFinite { field, value })
    }
}

pub fn require_positive(field: &'static str, value: f64) -> Result<f64, ConfigurationError> {
    require_finite(field, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigurationError::NonPositive { field, value })
    }
}

pub fn require_non_negative(field: &'static str, value: f64) -> Result<f64, ConfigurationError> {
    require_finite(field, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigurationError::Negative { field, value })
    }
}

/// Strict lower bound, `value > min`.
pub fn require_above(field: &'static str, value: f64, min: f64) -> Result<f64, ConfigurationError> {
    require_finite(field, value)?;
    if value > min {
        Ok(value)
    } else {
        Err(ConfigurationError::TooSmall { field, value, min })
    }
}

/// Half-open range check, `min <= value < max`.
pub fn require_in_range(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<f64, ConfigurationError> {
    require_finite(field, value)?;
    if (min..max).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigurationError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}
