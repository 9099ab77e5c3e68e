//! Implementation of the `archetype create` command.
//!
//! Responsibility: merge CLI arguments with configuration, wire the adapters
//! into the core service and report what was built. No business logic lives
//! here.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use archetype_adapters::{DirectoryResources, EmbeddedResources, LocalFilesystem};
use archetype_core::{
    application::{ArchetypeRequest, ArchetypeService, ports::ResourceStore},
    domain::Catalog,
    error::ArchetypeError,
};

use crate::{
    cli::{CreateArgs, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Effective settings after flags override configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
struct CreateSettings {
    name: String,
    base_path: Option<PathBuf>,
    source_dir: PathBuf,
    templates: Option<PathBuf>,
}

impl CreateSettings {
    fn resolve(args: CreateArgs, config: &AppConfig) -> Self {
        let base_path = args.base_path.or_else(|| config.project.base_path.clone());
        let name = args
            .name
            .or_else(|| config.project.name.clone())
            .or_else(|| base_path.as_deref().and_then(directory_name))
            .unwrap_or_default();

        Self {
            name,
            base_path,
            source_dir: args
                .source_dir
                .unwrap_or_else(|| config.project.source_dir.clone()),
            templates: args.templates.or_else(|| config.templates.source.clone()),
        }
    }
}

/// Last component of `path` once made absolute, e.g. `my_project` for `.`
/// inside `/work/my_project`.
fn directory_name(path: &Path) -> Option<String> {
    let absolute = std::path::absolute(path).ok()?;
    absolute
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
}

/// Execute the `archetype create` command.
#[instrument(skip_all)]
pub fn execute(
    args: CreateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let settings = CreateSettings::resolve(args, &config);
    debug!(?settings, "create settings resolved");

    let resources: Box<dyn ResourceStore> = match &settings.templates {
        Some(dir) if !dir.is_dir() => {
            return Err(CliError::PathNotFound { path: dir.clone() });
        }
        Some(dir) => Box::new(DirectoryResources::new(dir)),
        None => Box::new(EmbeddedResources::new()),
    };

    let request = ArchetypeRequest::new(&settings.name)
        .maybe_base_path(settings.base_path.clone())
        .source_dir(&settings.source_dir);
    let catalog = Catalog::python_base_in(&settings.source_dir, &request.package_name())
        .map_err(ArchetypeError::from)?;

    if let Some(base) = &settings.base_path {
        output.header(&format!(
            "Creating '{}' in {}",
            request.project_name(),
            base.display()
        ))?;
    }

    let service = ArchetypeService::new(Box::new(LocalFilesystem::new()), resources);
    let report = service
        .build(&request, &catalog)
        .with_cli_context(|| "building project structure")?;

    let base = settings.base_path.as_deref().unwrap_or(Path::new(""));
    for artifact in report.artifacts() {
        let shown = artifact.path.strip_prefix(base).unwrap_or(&artifact.path);
        if artifact.outcome.is_created() {
            output.print(&format!("  created  {}", shown.display()))?;
        } else if global.verbose > 0 {
            output.muted(&format!("  exists   {}", shown.display()))?;
        }
    }

    if report.is_unchanged() {
        output.info("Nothing to do: the project structure is already complete")?;
    } else {
        output.success(&format!(
            "Project '{}' ready: {} created, {} already present",
            request.project_name(),
            report.created(),
            report.existing()
        ))?;
    }

    Ok(())
}
