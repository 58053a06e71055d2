use super::types::Field;
use crate::core::RecordId;
use thiserror::Error;

/// Reasons a draft is refused before it reaches the collection.
///
/// Every variant is recoverable: the write is aborted, the collection stays
/// untouched and the message is shown to the user as a warning.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all fields: {0} is required")]
    MissingField(Field),

    #[error("Mobile number must contain digits only")]
    InvalidMobile,

    #[error("Age must be a positive whole number")]
    InvalidAge,

    #[error("{0} must contain letters and spaces only")]
    InvalidName(Field),
}

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Page size {0} is not one of the allowed options")]
    InvalidPageSize(usize),

    #[error("Duplicate record id {0}")]
    DuplicateId(RecordId),

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

pub type Result<T> = std::result::Result<T, RosterError>;

impl From<serde_json::Error> for RosterError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for RosterError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}
