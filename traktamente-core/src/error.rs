//! Error types for the allowance directory

use thiserror::Error;

/// Errors raised while loading a dataset
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// Dataset file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset is not valid JSON or a record has the wrong field types
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Dataset parsed but its shape is unusable
    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),
}

/// Result type alias for dataset loading
pub type Result<T> = std::result::Result<T, DirectoryError>;

/// How a failed lookup should be reported to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupErrorKind {
    /// The request itself was unusable
    BadRequest,
    /// The request was fine but nothing matched
    NotFound,
}

/// A query that produced no record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// Listing matched no records
    #[error("Bad request! No data found.")]
    NoRecords,

    /// Code lookup was given an empty code
    #[error("Bad request! Please provide a valid code.")]
    MissingCode,

    /// No record carries the requested code
    #[error("No data found for the provided code.")]
    CodeNotFound,

    /// Country lookup was given an empty name
    #[error("Bad request! Please provide a valid country or territory name.")]
    MissingCountry,

    /// No record carries the requested country or territory name
    #[error("No data found for the provided country or territory.")]
    CountryNotFound,
}

impl LookupError {
    /// Classify the error for the transport layer
    pub fn kind(&self) -> LookupErrorKind {
        match self {
            LookupError::MissingCode | LookupError::MissingCountry => LookupErrorKind::BadRequest,
            LookupError::NoRecords | LookupError::CodeNotFound | LookupError::CountryNotFound => {
                LookupErrorKind::NotFound
            }
        }
    }
}
