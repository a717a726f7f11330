//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (storage, logging).

use thiserror::Error;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// 1-based species number outside `1..=max`
    #[error("Catalog number {number} is out of range (expected 1..={max})")]
    CatalogNumberOutOfRange { number: usize, max: usize },

    /// 0-based Pokedex position outside `0..size`
    #[error("Pokedex index {index} is out of range (expected 0..{size})")]
    PokedexIndexOutOfRange { index: usize, size: usize },

    /// Password-related errors
    #[error("Password error: {0}")]
    Password(String),

    /// Stored capture data could not be decoded
    #[error("Invalid pokedex data: {0}")]
    InvalidPokedex(String),
}

impl DomainError {
    /// Create a password error
    pub fn password(msg: impl Into<String>) -> Self {
        DomainError::Password(msg.into())
    }

    /// Create an invalid pokedex error
    pub fn invalid_pokedex(msg: impl Into<String>) -> Self {
        DomainError::InvalidPokedex(msg.into())
    }

    /// True for either flavour of index range violation.
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            DomainError::CatalogNumberOutOfRange { .. } | DomainError::PokedexIndexOutOfRange { .. }
        )
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
