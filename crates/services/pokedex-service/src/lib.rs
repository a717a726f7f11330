//! Pokedex service library.
//!
//! Registers users and tracks which species each one has caught. Storage is
//! never ambient: every mutating call receives the [`Session`] to write to.
//!
//! ```no_run
//! use pokedex_service::{MemorySession, UserDatabase};
//!
//! let db = UserDatabase::new();
//! let mut session = MemorySession::new();
//! let mut ash = db.register_user("AshKetchum", "pallettown123", "000000000000", &mut session)?;
//! db.catch_pokemon_for_user(&mut ash, 25, &mut session)?;
//! # Ok::<(), common::AppError>(())
//! ```

pub mod repository;
pub mod service;

pub use repository::{JsonFileStore, MemorySession, Session};
pub use service::UserDatabase;
