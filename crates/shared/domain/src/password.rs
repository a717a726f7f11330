//! Password value object.
//!
//! Registration only needs a hash to be present before the record is handed
//! to storage; what the hash looks like is this module's business alone.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Argon2 password hash, stored and compared as an opaque PHC string.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Hash a raw password with a fresh salt.
    ///
    /// # Errors
    /// Returns a password error if Argon2 rejects the input.
    pub fn new(plain_text: &str) -> DomainResult<Self> {
        let hash = Self::hash(plain_text)?;
        Ok(Self { hash })
    }

    /// Wrap a hash previously produced by [`Password::new`].
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Verify a plain text password against this hash.
    pub fn verify(&self, plain_text: &str) -> bool {
        Self::verify_hash(plain_text, &self.hash).unwrap_or(false)
    }

    fn hash(plain_text: &str) -> DomainResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::argon2()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| DomainError::password(format!("hash failed: {}", e)))?;
        Ok(hash.to_string())
    }

    fn verify_hash(plain_text: &str, hash: &str) -> DomainResult<bool> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| DomainError::password(format!("invalid hash format: {}", e)))?;
        Ok(Self::argon2()
            .verify_password(plain_text.as_bytes(), &parsed)
            .is_ok())
    }

    #[inline]
    fn argon2() -> Argon2<'static> {
        Argon2::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_and_verify() {
        let password = Password::new("pallettown123").unwrap();

        assert!(password.verify("pallettown123"));
        assert!(!password.verify("cerulean456"));
        assert_ne!(password.as_str(), "pallettown123");
    }

    #[test]
    fn test_password_from_hash() {
        let password = Password::new("cerulean456").unwrap();
        let restored = Password::from_hash(password.as_str().to_string());

        assert!(restored.verify("cerulean456"));
    }

    #[test]
    fn test_same_password_different_salts() {
        let pass1 = Password::new("pikachu").unwrap();
        let pass2 = Password::new("pikachu").unwrap();

        // Different salts produce different hashes
        assert_ne!(pass1, pass2);
        assert!(pass1.verify("pikachu"));
        assert!(pass2.verify("pikachu"));
    }

    #[test]
    fn test_garbage_hash_never_verifies() {
        let password = Password::from_hash("not-a-phc-string".to_string());
        assert!(!password.verify("anything"));
    }

    #[test]
    fn test_debug_is_redacted() {
        let password = Password::new("secret").unwrap();
        let debug = format!("{:?}", password);

        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains(password.as_str()));
    }
}
