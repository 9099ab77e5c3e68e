//! Templates read from a directory on disk.

use std::path::{Path, PathBuf};

use tracing::trace;

use archetype_core::{
    application::{ApplicationError, ports::ResourceStore},
    error::ArchetypeResult,
};

/// Subdirectory of a template root that holds the files.
pub const RESOURCES_DIR: &str = "resources";

/// Reads templates from `<root>/resources/`.
#[derive(Debug, Clone)]
pub struct DirectoryResources {
    root: PathBuf,
}

impl DirectoryResources {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, relative: &Path) -> PathBuf {
        self.root.join(RESOURCES_DIR).join(relative)
    }
}

impl ResourceStore for DirectoryResources {
    fn read(&self, relative: &Path) -> ArchetypeResult<Vec<u8>> {
        let path = self.resolve(relative);
        if !path.is_file() {
            return Err(ApplicationError::ResourceNotFound {
                path: relative.to_path_buf(),
            }
            .into());
        }

        let content = std::fs::read(&path).map_err(|e| ApplicationError::FilesystemError {
            path: path.clone(),
            reason: format!("Failed to read template: {}", e),
        })?;
        trace!(path = %path.display(), bytes = content.len(), "template read");
        Ok(content)
    }

    fn describe(&self) -> String {
        self.root.join(RESOURCES_DIR).display().to_string()
    }
}
