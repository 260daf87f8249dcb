//! Error types for SimpliGis

use thiserror::Error;

/// Main error type for SimpliGis operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Algorithm error: {0}")]
    Algorithm(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for SimpliGis operations
pub type Result<T> = std::result::Result<T, Error>;
