//! Error types for Pinecamp Core

use thiserror::Error;

use crate::flow::Missing;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Missing selection: {0}")]
    MissingSelection(Missing),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Rejected payment slip: {0}")]
    Slip(String),

    #[error("Fixture error: {0}")]
    Fixture(#[from] toml::de::Error),

    #[error("Submission failed: {0}")]
    Submission(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
