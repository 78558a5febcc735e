//! # Postboard Infrastructure
//!
//! Concrete implementations of the ports defined in `postboard-core`:
//! where the post slot is stored and where "now" comes from.

pub mod clock;
pub mod storage;


pub use clock::{ManualClock, SystemClock};
pub use storage::{FileStorage, InMemoryStorage};
