//! Core domain layer for Archetype.
//!
//! Pure logic only. All filesystem access goes through the ports defined in
//! the application layer.
//!
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable values**: catalogs are built once and never mutated
//!
pub mod artifact;
pub mod catalog;
pub mod common;
pub mod error;
pub mod naming;
pub mod requirements;

// Re-exports for convenience
pub use artifact::{
    Artifact, ArtifactKind, DirectoryKind, IGNORE_FILE_TEMPLATE, LICENSE_FILE, Outcome,
    PACKAGE_MARKER, landed_file_name,
};
pub use catalog::{Catalog, CatalogBuilder, CatalogEntry};
pub use common::RelativePath;
pub use error::DomainError;
pub use naming::normalize;
pub use requirements::{MergeSummary, PackageVersion, Requirement, Requirements};
