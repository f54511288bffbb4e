use std::path::PathBuf;
use thiserror::Error;

/// Reasons a candidate record is rejected by `add`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name cannot be empty.")]
    EmptyName,

    #[error("Age must be a whole number, got '{0}'.")]
    AgeNotANumber(String),

    #[error("Invalid age: {0} (must be between 0 and 150).")]
    AgeOutOfRange(i64),

    #[error("Invalid email: '{0}'.")]
    InvalidEmail(String),

    #[error("This email is already registered: {0}")]
    DuplicateEmail(String),
}

#[derive(Error, Debug)]
pub enum UserbookError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backing file is valid JSON but not a list of users.
    #[error("Data file {} has unexpected content: {source}", path.display())]
    UnexpectedData {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, UserbookError>;
