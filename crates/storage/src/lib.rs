//! Storage abstraction and implementations for studytrack.
//!
//! The progress record is persisted as one JSON document under a single
//! logical key. Backends are synchronous; the engine treats them as a
//! passive sink and never lets a failed write escape a mutation.

#![warn(missing_docs)]

pub mod trait_;

pub mod json_file;
pub mod memory;

pub use trait_::{Result, Storage, StorageError};

pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;
