//! Storage layer for sbudget
//!
//! Budget classes are persisted one JSON file per class with atomic
//! writes. There is no read-back path; the configuration file stays the
//! source of truth.

pub mod disk;
pub mod file_io;

pub use disk::{ClassStore, SyncReport};
pub use file_io::write_json_atomic;
