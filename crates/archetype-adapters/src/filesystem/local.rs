//! Local filesystem adapter using std::fs.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use archetype_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ArchetypeError, ArchetypeResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> ArchetypeResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> ArchetypeResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn append_file(&self, path: &Path, content: &[u8]) -> ArchetypeResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| map_io_error(path, e, "open file for append"))?;
        file.write_all(content)
            .map_err(|e| map_io_error(path, e, "append to file"))
    }

    fn read(&self, path: &Path) -> ArchetypeResult<Vec<u8>> {
        std::fs::read(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn read_to_string(&self, path: &Path) -> ArchetypeResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> ArchetypeError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
