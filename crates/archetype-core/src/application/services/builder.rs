//! Filesystem Builder - idempotent materialization of single artifacts.
//!
//! Every operation tests for the artifact first and leaves an existing one
//! untouched. The test is a plain existence check, not a lock.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    application::ports::{Filesystem, ResourceStore},
    domain::{
        Artifact, DirectoryKind, IGNORE_FILE_TEMPLATE, Outcome, PACKAGE_MARKER, RelativePath,
        landed_file_name,
    },
    error::ArchetypeResult,
};

/// Default directory that holds the project's packages.
pub const DEFAULT_SOURCE_DIR: &str = "src";

/// Creates directories, packages and template files under `root`.
pub struct Builder<'a> {
    filesystem: &'a dyn Filesystem,
    resources: &'a dyn ResourceStore,
    root: PathBuf,
    source_dir: PathBuf,
}

impl<'a> Builder<'a> {
    pub fn new(
        filesystem: &'a dyn Filesystem,
        resources: &'a dyn ResourceStore,
        root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            filesystem,
            resources,
            root: root.into(),
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
        }
    }

    /// Override the directory packages live under (default `src`).
    pub fn with_source_dir(mut self, source_dir: impl Into<PathBuf>) -> Self {
        self.source_dir = source_dir.into();
        self
    }

    /// `<source_dir>/<package>` relative to the root.
    pub fn package_root(&self, package: &Path) -> PathBuf {
        self.source_dir.join(package)
    }

    /// Create a directory and its missing ancestors.
    ///
    /// `Package` directories resolve under `<source_dir>/<package>/`, `Plain`
    /// ones against the root.
    pub fn create_directory(
        &self,
        package: &Path,
        relative: &RelativePath,
        kind: DirectoryKind,
    ) -> ArchetypeResult<Artifact> {
        let directory = match kind {
            DirectoryKind::Package => self.package_dir(package, relative),
            DirectoryKind::Plain => self.root.join(relative),
        };

        if self.filesystem.exists(&directory) {
            debug!("'{}' directory already exists", directory.display());
            return Ok(Artifact::directory(directory, Outcome::AlreadyExists));
        }

        self.filesystem.create_dir_all(&directory)?;
        debug!("'{}' directory created", directory.display());
        Ok(Artifact::directory(directory, Outcome::Created))
    }

    /// Copy the bundled `__init__.py` into a package directory.
    pub fn create_package_marker(
        &self,
        package: &Path,
        relative: &RelativePath,
    ) -> ArchetypeResult<Artifact> {
        let marker = self.package_dir(package, relative).join(PACKAGE_MARKER);

        if self.filesystem.exists(&marker) {
            debug!("'{}' file already exists", marker.display());
            return Ok(Artifact::file(marker, Outcome::AlreadyExists));
        }

        let content = self.resources.read(Path::new(PACKAGE_MARKER))?;
        self.filesystem.write_file(&marker, &content)?;
        debug!("'{}' file created", marker.display());
        Ok(Artifact::file(marker, Outcome::Created))
    }

    /// Create a zero-length file at `<path>/<name>`.
    pub fn create_empty_file(&self, path: &Path, name: &str) -> ArchetypeResult<Artifact> {
        let file = self.root.join(path).join(name);

        if self.filesystem.exists(&file) {
            debug!("'{}' file already exists", file.display());
            return Ok(Artifact::file(file, Outcome::AlreadyExists));
        }

        self.filesystem.write_file(&file, &[])?;
        debug!("'{}' file created", file.display());
        Ok(Artifact::file(file, Outcome::Created))
    }

    /// Copy template `relative` to `<destination_root>/<relative>`.
    ///
    /// The ignore-file template lands under its dotted name. Either name
    /// already present on disk counts as an existing destination.
    pub fn copy_template(
        &self,
        destination_root: &Path,
        relative: &RelativePath,
    ) -> ArchetypeResult<Artifact> {
        let destination = self.root.join(destination_root).join(relative);
        let landed = match relative.file_name() {
            Some(name) if name == IGNORE_FILE_TEMPLATE => {
                destination.with_file_name(landed_file_name(name))
            }
            _ => destination.clone(),
        };

        if let Some(existing) = std::iter::once(&landed)
            .chain((landed != destination).then_some(&destination))
            .find(|path| self.filesystem.exists(path))
        {
            debug!("'{}' file already exists", existing.display());
            return Ok(Artifact::file(existing.clone(), Outcome::AlreadyExists));
        }

        let content = self.resources.read(relative.as_path())?;
        self.filesystem.write_file(&landed, &content)?;
        debug!("'{}' file created", landed.display());
        Ok(Artifact::file(landed, Outcome::Created))
    }

    fn package_dir(&self, package: &Path, relative: &RelativePath) -> PathBuf {
        self.root.join(self.package_root(package)).join(relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{
        ApplicationError,
        ports::{MockFilesystem, MockResourceStore},
    };

    fn rel(path: &str) -> RelativePath {
        RelativePath::try_new(path).unwrap()
    }

    #[test]
    fn package_directory_resolves_under_source_dir() {
        let mut fs = MockFilesystem::new();
        let resources = MockResourceStore::new();
        fs.expect_exists().times(1).return_const(false);
        fs.expect_create_dir_all()
            .withf(|p| p == Path::new("/work/src/sample_proj/utils/loggers"))
            .times(1)
            .returning(|_| Ok(()));

        let builder = Builder::new(&fs, &resources, "/work");
        let artifact = builder
            .create_directory(
                Path::new("sample_proj"),
                &rel("utils/loggers"),
                DirectoryKind::Package,
            )
            .unwrap();

        assert_eq!(artifact.outcome, Outcome::Created);
        assert_eq!(artifact.path, PathBuf::from("/work/src/sample_proj/utils/loggers"));
    }

    #[test]
    fn plain_directory_ignores_package() {
        let mut fs = MockFilesystem::new();
        let resources = MockResourceStore::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all()
            .withf(|p| p == Path::new("/work/bin"))
            .times(1)
            .returning(|_| Ok(()));

        let builder = Builder::new(&fs, &resources, "/work");
        builder
            .create_directory(Path::new("sample_proj"), &rel("bin"), DirectoryKind::Plain)
            .unwrap();
    }

    #[test]
    fn existing_directory_is_not_recreated() {
        let mut fs = MockFilesystem::new();
        let resources = MockResourceStore::new();
        fs.expect_exists().return_const(true);
        fs.expect_create_dir_all().never();

        let builder = Builder::new(&fs, &resources, "/work");
        let artifact = builder
            .create_directory(Path::new("p"), &rel("docs"), DirectoryKind::Plain)
            .unwrap();
        assert_eq!(artifact.outcome, Outcome::AlreadyExists);
    }

    #[test]
    fn directory_failure_propagates() {
        let mut fs = MockFilesystem::new();
        let resources = MockResourceStore::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|p| {
            Err(ApplicationError::FilesystemError {
                path: p.to_path_buf(),
                reason: "permission denied".into(),
            }
            .into())
        });

        let builder = Builder::new(&fs, &resources, "/work");
        let result = builder.create_directory(Path::new("p"), &rel("bin"), DirectoryKind::Plain);
        assert!(result.is_err());
    }

    #[test]
    fn existing_template_is_never_overwritten() {
        let mut fs = MockFilesystem::new();
        let mut resources = MockResourceStore::new();
        fs.expect_exists().return_const(true);
        fs.expect_write_file().never();
        resources.expect_read().never();

        let builder = Builder::new(&fs, &resources, "/work");
        let artifact = builder
            .copy_template(Path::new("."), &rel("README.md"))
            .unwrap();
        assert_eq!(artifact.outcome, Outcome::AlreadyExists);
    }

    #[test]
    fn ignore_template_lands_under_dotted_name() {
        let mut fs = MockFilesystem::new();
        let mut resources = MockResourceStore::new();
        fs.expect_exists().times(2).return_const(false);
        resources
            .expect_read()
            .withf(|p| p == Path::new("gitignore"))
            .times(1)
            .returning(|_| Ok(b"__pycache__/\n".to_vec()));
        fs.expect_write_file()
            .withf(|p, content| p == Path::new("/work/.gitignore") && content == b"__pycache__/\n")
            .times(1)
            .returning(|_, _| Ok(()));

        let builder = Builder::new(&fs, &resources, "/work");
        let artifact = builder.copy_template(Path::new(""), &rel("gitignore")).unwrap();

        assert_eq!(artifact.outcome, Outcome::Created);
        assert_eq!(artifact.path, PathBuf::from("/work/.gitignore"));
    }

    #[test]
    fn undotted_ignore_file_is_left_alone() {
        let mut fs = MockFilesystem::new();
        let mut resources = MockResourceStore::new();
        fs.expect_exists()
            .withf(|p| p == Path::new("/work/.gitignore"))
            .return_const(false);
        fs.expect_exists()
            .withf(|p| p == Path::new("/work/gitignore"))
            .return_const(true);
        fs.expect_write_file().never();
        resources.expect_read().never();

        let builder = Builder::new(&fs, &resources, "/work");
        let artifact = builder.copy_template(Path::new(""), &rel("gitignore")).unwrap();

        assert_eq!(artifact.outcome, Outcome::AlreadyExists);
        assert_eq!(artifact.path, PathBuf::from("/work/gitignore"));
    }

    #[test]
    fn ordinary_template_is_not_renamed() {
        let mut fs = MockFilesystem::new();
        let mut resources = MockResourceStore::new();
        fs.expect_exists().return_const(false);
        resources.expect_read().returning(|_| Ok(b"x".to_vec()));
        fs.expect_write_file()
            .withf(|p, _| p == Path::new("/work/src/p/config/constants.py"))
            .times(1)
            .returning(|_, _| Ok(()));

        let builder = Builder::new(&fs, &resources, "/work");
        let artifact = builder
            .copy_template(Path::new("src/p"), &rel("config/constants.py"))
            .unwrap();
        assert_eq!(
            artifact.path,
            PathBuf::from("/work/src/p/config/constants.py")
        );
    }

    #[test]
    fn missing_resource_is_fatal() {
        let mut fs = MockFilesystem::new();
        let mut resources = MockResourceStore::new();
        fs.expect_exists().return_const(false);
        fs.expect_write_file().never();
        resources.expect_read().returning(|p| {
            Err(ApplicationError::ResourceNotFound {
                path: p.to_path_buf(),
            }
            .into())
        });

        let builder = Builder::new(&fs, &resources, "/work");
        let err = builder
            .copy_template(Path::new("."), &rel("setup.py"))
            .unwrap_err();
        assert!(err.to_string().contains("setup.py"));
    }

    #[test]
    fn marker_copies_bundled_init() {
        let mut fs = MockFilesystem::new();
        let mut resources = MockResourceStore::new();
        fs.expect_exists().return_const(false);
        resources
            .expect_read()
            .withf(|p| p == Path::new("__init__.py"))
            .returning(|_| Ok(Vec::new()));
        fs.expect_write_file()
            .withf(|p, _| p == Path::new("/work/src/p/core/__init__.py"))
            .times(1)
            .returning(|_, _| Ok(()));

        let builder = Builder::new(&fs, &resources, "/work");
        let artifact = builder
            .create_package_marker(Path::new("p"), &rel("core"))
            .unwrap();
        assert_eq!(artifact.outcome, Outcome::Created);
    }

    #[test]
    fn custom_source_dir() {
        let mut fs = MockFilesystem::new();
        let resources = MockResourceStore::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all()
            .withf(|p| p == Path::new("/work/lib/p/core"))
            .times(1)
            .returning(|_| Ok(()));

        let builder = Builder::new(&fs, &resources, "/work").with_source_dir("lib");
        builder
            .create_directory(Path::new("p"), &rel("core"), DirectoryKind::Package)
            .unwrap();
    }

    #[test]
    fn empty_file_written_with_no_content() {
        let mut fs = MockFilesystem::new();
        let resources = MockResourceStore::new();
        fs.expect_exists().return_const(false);
        fs.expect_write_file()
            .withf(|p, content| p == Path::new("/work/./LICENSE") && content.is_empty())
            .times(1)
            .returning(|_, _| Ok(()));

        let builder = Builder::new(&fs, &resources, "/work");
        builder.create_empty_file(Path::new("."), "LICENSE").unwrap();
    }
}
