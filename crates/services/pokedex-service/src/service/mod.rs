//! Service layer: registration and capture tracking.

mod user_database;

pub use user_database::UserDatabase;
