//! Unified error handling for the service layer.
//!
//! Wraps domain failures and storage failures in a single type so that
//! session errors reach the caller unchanged.

use domain::DomainError;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Domain rule violations (index ranges, password hashing)
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Storage
    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // Setup
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Stable error code for callers
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Domain(
                DomainError::CatalogNumberOutOfRange { .. }
                | DomainError::PokedexIndexOutOfRange { .. },
            ) => "OUT_OF_RANGE",
            AppError::Domain(DomainError::Password(_)) => "PASSWORD_ERROR",
            AppError::Domain(DomainError::InvalidPokedex(_)) => "INVALID_DATA",
            AppError::Persistence(_) => "PERSISTENCE_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// True when a catalog number or Pokedex index was out of range
    pub fn is_range_error(&self) -> bool {
        matches!(self, AppError::Domain(e) if e.is_range_error())
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn persistence(msg: impl Into<String>) -> Self {
        AppError::Persistence(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Config(msg.into())
    }
}
