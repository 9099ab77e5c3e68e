//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use archetype_core::{
    application::{ApplicationError, ports::Filesystem},
    error::ArchetypeResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep a handle after boxing one into a
/// service.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, Vec<u8>>,
    directories: HashSet<PathBuf>,
    writes: usize,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<Vec<u8>> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.files.keys().cloned().collect()
    }

    /// Number of mutating calls made so far.
    pub fn write_count(&self) -> usize {
        self.inner.read().unwrap().writes
    }

    fn lock_error() -> ApplicationError {
        ApplicationError::StoreLockError
    }

    fn missing_parent(path: &Path) -> ApplicationError {
        ApplicationError::FilesystemError {
            path: path.to_path_buf(),
            reason: "Parent directory does not exist".into(),
        }
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryFilesystemInner {
    fn parent_exists(&self, path: &Path) -> bool {
        match path.parent() {
            Some(parent) => parent.as_os_str().is_empty() || self.directories.contains(parent),
            None => true,
        }
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn create_dir_all(&self, path: &Path) -> ArchetypeResult<()> {
        let mut inner = self.inner.write().map_err(|_| Self::lock_error())?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
        inner.writes += 1;

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> ArchetypeResult<()> {
        let mut inner = self.inner.write().map_err(|_| Self::lock_error())?;

        if !inner.parent_exists(path) {
            return Err(Self::missing_parent(path).into());
        }

        inner.files.insert(path.to_path_buf(), content.to_vec());
        inner.writes += 1;
        Ok(())
    }

    fn append_file(&self, path: &Path, content: &[u8]) -> ArchetypeResult<()> {
        let mut inner = self.inner.write().map_err(|_| Self::lock_error())?;

        if !inner.parent_exists(path) {
            return Err(Self::missing_parent(path).into());
        }

        inner
            .files
            .entry(path.to_path_buf())
            .or_default()
            .extend_from_slice(content);
        inner.writes += 1;
        Ok(())
    }

    fn read(&self, path: &Path) -> ArchetypeResult<Vec<u8>> {
        let inner = self.inner.read().map_err(|_| Self::lock_error())?;

        inner.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "File not found".into(),
            }
            .into()
        })
    }

    fn read_to_string(&self, path: &Path) -> ArchetypeResult<String> {
        let bytes = self.read(path)?;
        String::from_utf8(bytes).map_err(|e| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: format!("File is not valid UTF-8: {e}"),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_dir_all_registers_ancestors() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("a/b/c")).unwrap();
        assert!(fs.exists(Path::new("a")));
        assert!(fs.exists(Path::new("a/b")));
        assert!(fs.exists(Path::new("a/b/c")));
    }

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("nope/file.txt"), b"").is_err());
        fs.create_dir_all(Path::new("nope")).unwrap();
        assert!(fs.write_file(Path::new("nope/file.txt"), b"").is_ok());
    }

    #[test]
    fn non_utf8_content_reads_as_bytes_only() {
        let fs = MemoryFilesystem::new();
        fs.write_file(Path::new("f"), &[0xff, 0x00]).unwrap();
        assert_eq!(fs.read(Path::new("f")).unwrap(), vec![0xff, 0x00]);
        assert!(fs.read_to_string(Path::new("f")).is_err());
    }

    #[test]
    fn append_extends() {
        let fs = MemoryFilesystem::new();
        fs.append_file(Path::new("f"), b"a").unwrap();
        fs.append_file(Path::new("f"), b"b").unwrap();
        assert_eq!(fs.read_to_string(Path::new("f")).unwrap(), "ab");
        assert_eq!(fs.write_count(), 2);
    }
}
