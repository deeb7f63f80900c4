use thiserror::Error;

/// Validation failures surfaced to the host before any scoring runs.
///
/// Every variant is an expected condition — a calculator never panics on
/// bad input, it returns one of these and the host renders the message.
#[derive(Debug, Clone, Error)]
pub enum InputError {
    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("{field}: {value} is outside the valid range [{min}, {max}]")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("{field} is required when {condition}")]
    MissingConditional { field: String, condition: String },

    #[error("{field}: expected an ISO date (YYYY-MM-DD): {message}")]
    InvalidDate { field: String, message: String },
}
