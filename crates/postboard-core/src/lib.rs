//! # Postboard Core
//!
//! The domain layer of Postboard: the post record, its validation rules,
//! and the store that owns the collection.
//! Storage and time are reached only through the traits in [`ports`].

pub mod domain;
pub mod error;
pub mod ports;
pub mod store;

pub use error::{DomainError, PersistenceError, StorageError};
pub use store::{DEFAULT_SLOT, PostStore};
