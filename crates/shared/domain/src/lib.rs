//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! the user record, its capture bitset and the comparison rules between two
//! users' captures.

pub mod capture;
pub mod constants;
pub mod error;
pub mod password;
pub mod user;

pub use capture::{CapturedState, ComparisonResult, Pokedex};
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use password::Password;
pub use user::User;
