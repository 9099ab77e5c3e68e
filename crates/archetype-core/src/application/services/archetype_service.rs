//! Archetype Service - main application orchestrator.
//!
//! Walks a [`Catalog`] through the [`Builder`] in a fixed order:
//! 1. Plain directories
//! 2. Package directories
//! 3. The empty `LICENSE` file
//! 4. Root-level templates
//! 5. Package-level templates
//! 6. Package marker files
//!
//! The run stops at the first error. Nothing is rolled back; re-running
//! completes a partial tree because every step skips what already exists.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, ResourceStore},
        services::builder::{Builder, DEFAULT_SOURCE_DIR},
    },
    domain::{Artifact, Catalog, DirectoryKind, DomainError, LICENSE_FILE, normalize},
    error::ArchetypeResult,
};

/// Property that must be set before anything touches the disk.
pub const BASE_PATH_PROPERTY: &str = "project_base_path";

/// Input to [`ArchetypeService::build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchetypeRequest {
    project_name: String,
    base_path: Option<PathBuf>,
    source_dir: PathBuf,
}

impl ArchetypeRequest {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            base_path: None,
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
        }
    }

    /// Directory the project tree is created in.
    pub fn base_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.base_path = Some(path.into());
        self
    }

    pub fn maybe_base_path(mut self, path: Option<PathBuf>) -> Self {
        self.base_path = path;
        self
    }

    pub fn source_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.source_dir = dir.into();
        self
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Normalized project name; the package directory under `src/`.
    pub fn package_name(&self) -> String {
        normalize(&self.project_name)
    }
}

/// Every artifact a run visited, in visiting order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    artifacts: Vec<Artifact>,
}

impl BuildReport {
    fn push(&mut self, artifact: Artifact) {
        self.artifacts.push(artifact);
    }

    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    pub fn created(&self) -> usize {
        self.artifacts.iter().filter(|a| a.outcome.is_created()).count()
    }

    pub fn existing(&self) -> usize {
        self.artifacts.len() - self.created()
    }

    /// `true` when the run changed nothing on disk.
    pub fn is_unchanged(&self) -> bool {
        self.created() == 0
    }
}

/// Main scaffolding service.
pub struct ArchetypeService {
    filesystem: Box<dyn Filesystem>,
    resources: Box<dyn ResourceStore>,
}

impl ArchetypeService {
    pub fn new(filesystem: Box<dyn Filesystem>, resources: Box<dyn ResourceStore>) -> Self {
        Self {
            filesystem,
            resources,
        }
    }

    /// Build the project skeleton described by `catalog`.
    #[instrument(
        skip_all,
        fields(
            project = %request.project_name(),
            resources = %self.resources.describe()
        )
    )]
    pub fn build(&self, request: &ArchetypeRequest, catalog: &Catalog) -> ArchetypeResult<BuildReport> {
        info!("Starting base project structure building");

        let base_path = request
            .base_path
            .as_ref()
            .ok_or(ApplicationError::MissingProperty {
                property: BASE_PATH_PROPERTY,
            })?;

        let package_name = request.package_name();
        if package_name.is_empty() {
            return Err(DomainError::EmptyPackageName {
                name: request.project_name.clone(),
            }
            .into());
        }

        let builder = Builder::new(
            self.filesystem.as_ref(),
            self.resources.as_ref(),
            base_path.clone(),
        )
        .with_source_dir(&request.source_dir);
        let package = Path::new(&package_name);
        let mut report = BuildReport::default();

        info!("Creating archetype directories");
        for entry in catalog.directories() {
            report.push(builder.create_directory(package, &entry.path, DirectoryKind::Plain)?);
        }

        info!("Creating archetype packages");
        for entry in catalog.packages() {
            report.push(builder.create_directory(package, &entry.path, DirectoryKind::Package)?);
        }

        info!("Creating '{}' as empty file", LICENSE_FILE);
        report.push(builder.create_empty_file(Path::new(""), LICENSE_FILE)?);

        info!("Copying file templates to project's root directory");
        for entry in catalog.root_templates() {
            report.push(builder.copy_template(Path::new(""), &entry.path)?);
        }

        info!("Copying file templates to project's src package");
        let package_root = builder.package_root(package);
        for entry in catalog.package_templates() {
            report.push(builder.copy_template(&package_root, &entry.path)?);
        }

        info!("Copying __init__.py templates to src packages");
        for entry in catalog.packages() {
            report.push(builder.create_package_marker(package, &entry.path)?);
        }

        info!(
            created = report.created(),
            existing = report.existing(),
            "Project base structure building finished"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockFilesystem, MockResourceStore};
    use crate::error::{ArchetypeError, ErrorCategory};

    #[test]
    fn package_name_is_normalized() {
        let request = ArchetypeRequest::new("SampleProj-API");
        assert_eq!(request.package_name(), "sample_proj_api");
    }

    #[test]
    fn missing_base_path_fails_before_any_io() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().never();
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();
        let mut resources = MockResourceStore::new();
        resources.expect_describe().return_const("test".to_string());

        let service = ArchetypeService::new(Box::new(fs), Box::new(resources));
        let err = service
            .build(&ArchetypeRequest::new("demo"), &Catalog::python_base("demo"))
            .unwrap_err();

        assert!(matches!(
            err,
            ArchetypeError::Application(ApplicationError::MissingProperty {
                property: "project_base_path"
            })
        ));
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn empty_package_name_rejected() {
        let fs = MockFilesystem::new();
        let mut resources = MockResourceStore::new();
        resources.expect_describe().return_const("test".to_string());

        let service = ArchetypeService::new(Box::new(fs), Box::new(resources));
        let request = ArchetypeRequest::new("").base_path("/work");
        let err = service
            .build(&request, &Catalog::builder().build().unwrap())
            .unwrap_err();

        assert!(matches!(
            err,
            ArchetypeError::Domain(DomainError::EmptyPackageName { .. })
        ));
    }

    #[test]
    fn report_counts() {
        let mut report = BuildReport::default();
        report.push(Artifact::directory("a".into(), crate::domain::Outcome::Created));
        report.push(Artifact::file("b".into(), crate::domain::Outcome::AlreadyExists));
        assert_eq!(report.created(), 1);
        assert_eq!(report.existing(), 1);
        assert!(!report.is_unchanged());
    }
}
