//! User domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::capture::{CapturedState, Pokedex};
use crate::error::DomainResult;
use crate::password::Password;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub hashed_password: Password,
    /// Opaque device/phone identifier, stored as given
    pub identifier: String,
    /// One capture bit per catalog entry
    pub captures: Pokedex,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user who has caught nothing yet
    pub fn new(username: String, hashed_password: Password, identifier: String) -> Self {
        let now = Utc::now();
        Self {
            username,
            hashed_password,
            identifier,
            captures: Pokedex::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Capture state at a 0-based Pokedex position
    pub fn capture_state(&self, index: usize) -> DomainResult<CapturedState> {
        self.captures.get(index)
    }

    /// Write the capture state at a 0-based Pokedex position.
    ///
    /// Nothing changes (including `updated_at`) if the index is out of range.
    pub fn set_capture_state(&mut self, index: usize, state: CapturedState) -> DomainResult<()> {
        self.captures.set(index, state)?;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Number of species this user has caught
    pub fn caught_count(&self) -> usize {
        self.captures.caught_count()
    }

    /// Check a raw password against the stored hash
    pub fn verify_password(&self, plain_text: &str) -> bool {
        self.hashed_password.verify(plain_text)
    }
}
