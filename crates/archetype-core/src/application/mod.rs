//! Application layer for Archetype.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ArchetypeService, Builder, MergeService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer; the rules about what
//! a project looks like live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    ArchetypeRequest, ArchetypeService, BASE_PATH_PROPERTY, BuildReport, Builder,
    DEFAULT_SOURCE_DIR, MergeService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, ResourceStore};

pub use error::ApplicationError;
