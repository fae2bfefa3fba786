//! Error types for STINT

use thiserror::Error;

/// Core STINT errors
#[derive(Error, Debug)]
pub enum StintError {
    // Color table errors
    #[error("Color table has no header row")]
    EmptyTable,

    #[error("Missing column: {0:?}")]
    MissingColumn(&'static str),

    #[error("Invalid color cell: {0:?}")]
    InvalidColorCell(String),

    #[error("Unknown position label: {0:?}")]
    UnknownPosition(String),

    // I/O and terminal errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for STINT operations
pub type StintResult<T> = Result<T, StintError>;
