use thiserror::Error;

/// Validation errors for canonical primitives.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// When a value does not match the required pattern.
    #[error("{field} ('{value}') is not allowed")]
    PatternMismatch {
        /// Field name that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
    },
    /// When a date/time string cannot be read as an ISO-8601 instant.
    #[error("'{value}' is not an ISO-8601 instant: {reason}")]
    InvalidTimestamp {
        /// Offending value.
        value: String,
        /// Parser message.
        reason: String,
    },
}
