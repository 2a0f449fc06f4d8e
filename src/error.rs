//! Error types for slider construction and configuration loading.
//!
//! Only construction can fail. Gesture handling and painting never return
//! errors: a gesture without an active selection is ignored, and degenerate
//! geometry puts the slider into its disabled mode.

use thiserror::Error;

/// Errors that reject a slider configuration or value list.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The value list has no handles
    #[error("Value list must contain at least one value")]
    EmptyValues,

    /// The bounds are inverted
    #[error("Maximum {max} is below minimum {min}")]
    MaxBelowMin {
        /// Configured minimum
        min: f32,
        /// Configured maximum
        max: f32,
    },

    /// A numeric field is NaN or infinite
    #[error("Field '{field}' must be finite")]
    NonFinite {
        /// Name of the offending field
        field: String,
    },

    /// Divisions were given but are zero
    #[error("Divisions must be a positive integer")]
    ZeroDivisions,

    /// A value is smaller than its predecessor
    #[error("Value {value} at index {index} is below the previous value {previous}")]
    NotAscending {
        /// Index of the offending value
        index: usize,
        /// Value at `index - 1`
        previous: f32,
        /// Value at `index`
        value: f32,
    },

    /// A value lies outside the slider bounds
    #[error("Value {value} at index {index} is outside [{min}, {max}]")]
    OutOfRange {
        /// Index of the offending value
        index: usize,
        /// The offending value
        value: f32,
        /// Configured minimum
        min: f32,
        /// Configured maximum
        max: f32,
    },

    /// A size or padding is negative
    #[error("Field '{field}' must not be negative, got {value}")]
    NegativeSize {
        /// Name of the offending field
        field: String,
        /// The negative value
        value: f32,
    },

    /// The host tried to change the number of handles
    #[error("Expected {expected} values, got {found}")]
    LengthMismatch {
        /// Handle count fixed at construction
        expected: usize,
        /// Length of the new list
        found: usize,
    },

    /// I/O error while reading a config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConfigError {
    /// Create a non-finite field error.
    pub fn non_finite(field: impl Into<String>) -> Self {
        Self::NonFinite {
            field: field.into(),
        }
    }

    /// Create a negative size error.
    pub fn negative_size(field: impl Into<String>, value: f32) -> Self {
        Self::NegativeSize {
            field: field.into(),
            value,
        }
    }
}
