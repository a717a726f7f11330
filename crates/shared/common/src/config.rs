//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default location of the JSON user store
pub const DEFAULT_STORE_PATH: &str = "pokedex.json";

/// Default tracing filter level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Settings for the storage adapter and logging.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PokedexConfig {
    /// Path of the JSON user store
    pub store_path: PathBuf,
    /// Tracing filter used when `RUST_LOG` is unset
    pub log_level: String,
}

impl PokedexConfig {
    /// Load configuration from `.env` and the process environment.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            store_path: lookup("POKEDEX_STORE_PATH")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_PATH)),
            log_level: lookup("POKEDEX_LOG_LEVEL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        }
    }
}

impl Default for PokedexConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
