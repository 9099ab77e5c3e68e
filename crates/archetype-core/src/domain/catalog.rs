//! The `Catalog` of everything a run materializes, and its builder.
//!
//! A catalog is four ordered lists of logical name → relative path. Order is
//! significant: the orchestrator walks each list front to back, so parents
//! must precede children within a list.
//!
//! Catalogs are immutable once built. Validation happens in
//! [`CatalogBuilder::build`]: paths must be relative and non-empty, and a
//! logical name may appear once per list.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::{DomainError, RelativePath};

/// One (logical name, relative path) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub name: String,
    pub path: RelativePath,
}

/// Static description of a project skeleton.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Catalog {
    directories: Vec<CatalogEntry>,
    packages: Vec<CatalogEntry>,
    root_templates: Vec<CatalogEntry>,
    package_templates: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// The base Python project skeleton for `package`.
    ///
    /// `package` should already be normalized; it names the directory under
    /// `src/` that holds every package.
    pub fn python_base(package: &str) -> Self {
        Self::python_base_in(Path::new("src"), package).expect("built-in catalog is valid")
    }

    /// Same as [`python_base`](Self::python_base) with packages under
    /// `source_dir` instead of `src/`.
    ///
    /// Fails when `source_dir` is absolute or empty.
    pub fn python_base_in(source_dir: &Path, package: &str) -> Result<Self, DomainError> {
        let logger_dir = source_dir.join(package).join("config").join("logger");

        Self::builder()
            .directory("BIN", "bin")
            .directory("DOCS", "docs")
            .directory("SRC", source_dir)
            .directory("TESTS", "tests")
            .directory("CONFIG_LOGGER", logger_dir)
            .package("CONFIG", "config")
            .package("CORE", "core")
            .package("ERRORS", "errors")
            .package("UTILS", "utils")
            .package("UTILS_LOGGER", "utils/loggers")
            .package("ERRORS_CORE", "errors/core")
            .root_template("GITIGNORE", "gitignore")
            .root_template("README", "README.md")
            .root_template("REQUIREMENTS", "requirements.txt")
            .root_template("SETUP", "setup.py")
            .root_template("TEST_EXAMPLE", "tests/test_example.py")
            .root_template("TEST_INIT", "tests/__init__.py")
            .package_template("CONSTANTS", "config/constants.py")
            .package_template("MESSAGES", "config/messages.py")
            .package_template("LOGGER_YML", "config/logger/logger.yml")
            .package_template("LOGGER_INIT", "utils/loggers/__init__.py")
            .package_template("LOGGER_HANDLERS", "utils/loggers/handlers.py")
            .package_template("HELPERS", "utils/helpers.py")
            .build()
    }

    /// Plain directories, resolved against the project root.
    pub fn directories(&self) -> &[CatalogEntry] {
        &self.directories
    }

    /// Package directories, resolved under `<source_dir>/<package>/`.
    pub fn packages(&self) -> &[CatalogEntry] {
        &self.packages
    }

    /// Templates copied relative to the project root.
    pub fn root_templates(&self) -> &[CatalogEntry] {
        &self.root_templates
    }

    /// Templates copied relative to `<source_dir>/<package>/`.
    pub fn package_templates(&self) -> &[CatalogEntry] {
        &self.package_templates
    }

    pub fn entry_count(&self) -> usize {
        self.directories.len()
            + self.packages.len()
            + self.root_templates.len()
            + self.package_templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }
}

/// Collects entries and validates them on [`build`](Self::build).
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    directories: Vec<(String, PathBuf)>,
    packages: Vec<(String, PathBuf)>,
    root_templates: Vec<(String, PathBuf)>,
    package_templates: Vec<(String, PathBuf)>,
}

impl CatalogBuilder {
    pub fn directory(mut self, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.directories.push((name.into(), path.into()));
        self
    }

    pub fn package(mut self, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.packages.push((name.into(), path.into()));
        self
    }

    pub fn root_template(mut self, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.root_templates.push((name.into(), path.into()));
        self
    }

    pub fn package_template(mut self, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.package_templates.push((name.into(), path.into()));
        self
    }

    pub fn build(self) -> Result<Catalog, DomainError> {
        Ok(Catalog {
            directories: validate_entries("directories", self.directories)?,
            packages: validate_entries("packages", self.packages)?,
            root_templates: validate_entries("root templates", self.root_templates)?,
            package_templates: validate_entries("package templates", self.package_templates)?,
        })
    }
}

fn validate_entries(
    catalog: &'static str,
    raw: Vec<(String, PathBuf)>,
) -> Result<Vec<CatalogEntry>, DomainError> {
    let mut seen = HashSet::new();
    let mut entries = Vec::with_capacity(raw.len());

    for (name, path) in raw {
        if !seen.insert(name.clone()) {
            return Err(DomainError::DuplicateEntry { catalog, name });
        }
        let path = RelativePath::try_new(path)?;
        if path.is_empty() {
            return Err(DomainError::EmptyEntryPath { name });
        }
        entries.push(CatalogEntry { name, path });
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_source_dir_moves_packages() {
        let catalog = Catalog::python_base_in(Path::new("lib"), "demo").unwrap();
        let paths: Vec<String> = catalog
            .directories()
            .iter()
            .map(|e| e.path.to_string())
            .collect();
        assert!(paths.contains(&"lib".to_string()));
        assert!(paths.contains(&Path::new("lib/demo/config/logger").display().to_string()));
    }

    #[test]
    fn absolute_source_dir_rejected() {
        assert!(matches!(
            Catalog::python_base_in(Path::new("/abs"), "demo"),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn python_base_layout() {
        let catalog = Catalog::python_base("sample_proj");

        assert_eq!(catalog.directories().len(), 5);
        assert_eq!(catalog.packages().len(), 6);
        assert_eq!(catalog.root_templates().len(), 6);
        assert_eq!(catalog.package_templates().len(), 6);
        assert_eq!(catalog.entry_count(), 23);

        let logger = catalog
            .directories()
            .iter()
            .find(|e| e.name == "CONFIG_LOGGER")
            .unwrap();
        assert_eq!(
            logger.path.as_path(),
            Path::new("src/sample_proj/config/logger")
        );
    }

    #[test]
    fn order_is_preserved() {
        let catalog = Catalog::python_base("p");
        let names: Vec<_> = catalog.packages().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            ["CONFIG", "CORE", "ERRORS", "UTILS", "UTILS_LOGGER", "ERRORS_CORE"]
        );
    }

    #[test]
    fn duplicate_names_rejected() {
        let result = Catalog::builder()
            .directory("BIN", "bin")
            .directory("BIN", "bin2")
            .build();
        assert_eq!(
            result.unwrap_err(),
            DomainError::DuplicateEntry {
                catalog: "directories",
                name: "BIN".into()
            }
        );
    }

    #[test]
    fn same_name_in_different_lists_is_fine() {
        let catalog = Catalog::builder()
            .directory("CORE", "core")
            .package("CORE", "core")
            .build()
            .unwrap();
        assert_eq!(catalog.entry_count(), 2);
    }

    #[test]
    fn absolute_path_rejected() {
        let result = Catalog::builder().package("ROOT", "/tmp/evil").build();
        assert!(matches!(
            result,
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn empty_path_rejected() {
        let result = Catalog::builder().root_template("NOTHING", "").build();
        assert!(matches!(result, Err(DomainError::EmptyEntryPath { .. })));
    }

    #[test]
    fn empty_catalog() {
        let catalog = Catalog::builder().build().unwrap();
        assert!(catalog.is_empty());
    }
}
