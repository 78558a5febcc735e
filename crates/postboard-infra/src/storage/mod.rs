//! Key-value storage implementations - a data directory and an in-memory fallback.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::InMemoryStorage;
