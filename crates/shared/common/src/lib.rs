//! Common utilities shared across the workspace.
//!
//! This crate provides:
//! - Unified error handling for the service layer
//! - Configuration loaded from the environment
//! - Tracing subscriber setup

pub mod config;
pub mod error;
pub mod logging;

pub use config::PokedexConfig;
pub use error::{AppError, AppResult};
pub use logging::init_tracing;
