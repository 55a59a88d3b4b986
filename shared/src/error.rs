use thiserror::Error;
use validator::ValidationErrors;
use serde_json::Error as JsonError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq)]
pub enum SharedError {
    #[error("All fields are required")]
    RequiredFields,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid date/time: {0}")]
    InvalidDateTime(String),

    #[error("Unknown timezone: {0}")]
    InvalidTimezone(String),

    #[error("Conversion error: {0}")]
    Conversion(String),

    #[error("Network error: {0}")]
    Network(String),
}

impl From<ValidationErrors> for SharedError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl From<JsonError> for SharedError {
    fn from(error: JsonError) -> Self {
        Self::Conversion(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;
