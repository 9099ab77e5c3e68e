//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `archetype-adapters` crate provides implementations.

use std::path::Path;

use crate::error::ArchetypeResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `archetype_adapters::filesystem::LocalFilesystem` (production)
/// - `archetype_adapters::filesystem::MemoryFilesystem` (testing)
///
/// None of these methods check for existing artifacts; callers test with
/// [`exists`](Self::exists) first.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ArchetypeResult<()>;

    /// Write content to a file, replacing it if present. The parent must exist.
    fn write_file(&self, path: &Path, content: &[u8]) -> ArchetypeResult<()>;

    /// Append content to a file, creating it if absent.
    fn append_file(&self, path: &Path, content: &[u8]) -> ArchetypeResult<()>;

    /// Read a whole file as raw bytes.
    fn read(&self, path: &Path) -> ArchetypeResult<Vec<u8>>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> ArchetypeResult<String>;
}

/// Port for the bundled template tree.
///
/// Paths are relative to the tree's `resources/` root.
///
/// Implemented by:
/// - `archetype_adapters::resources::EmbeddedResources` (compiled in)
/// - `archetype_adapters::resources::DirectoryResources` (`<dir>/resources`)
#[cfg_attr(test, mockall::automock)]
pub trait ResourceStore: Send + Sync {
    /// Read a template's bytes.
    ///
    /// Missing templates yield `ApplicationError::ResourceNotFound`.
    fn read(&self, relative: &Path) -> ArchetypeResult<Vec<u8>>;

    /// Human-readable origin, for logs.
    fn describe(&self) -> String;
}
