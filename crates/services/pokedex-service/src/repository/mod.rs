//! Session adapters: where registered users and their captures are kept.

mod json_store;
mod memory;
mod session;

pub use json_store::JsonFileStore;
pub use memory::MemorySession;
#[cfg(any(test, feature = "test-utils"))]
pub use session::MockSession;
pub use session::Session;
