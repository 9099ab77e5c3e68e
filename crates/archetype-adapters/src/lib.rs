//! Infrastructure adapters for Archetype.
//!
//! This crate implements the ports defined in `archetype-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod resources;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use resources::{DirectoryResources, EmbeddedResources};
