//! Storage host implementations
//!
//! Two hosts ship with the crate: an in-memory host for tests and
//! development, and a file-backed host that persists each namespace as a
//! JSON document and survives process restart.

pub mod file;
pub mod memory;

pub use file::{FileBackend, FileHost};
pub use memory::{MemoryBackend, MemoryHost};
