//! Implementation of the `archetype catalog` command.

use std::path::{Path, PathBuf};

use serde::Serialize;

use archetype_core::{
    domain::{Catalog, CatalogEntry, LICENSE_FILE, PACKAGE_MARKER, landed_file_name, normalize},
    error::ArchetypeError,
};

use crate::{
    cli::{CatalogArgs, CatalogFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Project name shown when neither `--name` nor `project.name` is set.
const PLACEHOLDER_NAME: &str = "project";

#[derive(Debug, Serialize)]
struct CatalogView<'a> {
    project: &'a str,
    package: &'a str,
    source_dir: &'a Path,
    #[serde(flatten)]
    catalog: &'a Catalog,
}

pub fn execute(args: CatalogArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let project = args
        .name
        .or(config.project.name)
        .unwrap_or_else(|| PLACEHOLDER_NAME.to_string());
    let package = normalize(&project);
    let source_dir = config.project.source_dir;
    let catalog = Catalog::python_base_in(&source_dir, &package).map_err(ArchetypeError::from)?;

    match args.format {
        CatalogFormat::Table => {
            output.header(&format!("Catalog for '{project}' (package '{package}')"))?;
            print_section(&output, "Directories", catalog.directories())?;
            print_section(&output, "Packages", catalog.packages())?;
            print_section(&output, "Root templates", catalog.root_templates())?;
            print_section(&output, "Package templates", catalog.package_templates())?;
        }
        CatalogFormat::List => {
            for path in planned_paths(&catalog, &source_dir, &package) {
                output.data(&path.display().to_string())?;
            }
        }
        CatalogFormat::Json => {
            let view = CatalogView {
                project: &project,
                package: &package,
                source_dir: &source_dir,
                catalog: &catalog,
            };
            let json = serde_json::to_string_pretty(&view).map_err(|e| {
                CliError::Core(ArchetypeError::Internal {
                    message: format!("Failed to serialise catalog: {e}"),
                })
            })?;
            output.data(&json)?;
        }
    }

    Ok(())
}

fn print_section(output: &OutputManager, title: &str, entries: &[CatalogEntry]) -> CliResult<()> {
    output.print("")?;
    output.print(&format!("{title}:"))?;
    for entry in entries {
        output.print(&format!("  {:<16} {}", entry.name, entry.path))?;
    }
    Ok(())
}

/// Every path `create` visits, relative to the base path, in visiting order.
fn planned_paths(catalog: &Catalog, source_dir: &Path, package: &str) -> Vec<PathBuf> {
    let package_root = source_dir.join(package);
    let mut paths = Vec::with_capacity(catalog.entry_count() + catalog.packages().len() + 1);

    paths.extend(catalog.directories().iter().map(|e| e.path.as_path().to_path_buf()));
    paths.extend(catalog.packages().iter().map(|e| package_root.join(&e.path)));
    paths.push(PathBuf::from(LICENSE_FILE));
    paths.extend(catalog.root_templates().iter().map(|e| landed(Path::new(""), e)));
    paths.extend(catalog.package_templates().iter().map(|e| landed(&package_root, e)));
    paths.extend(
        catalog
            .packages()
            .iter()
            .map(|e| package_root.join(&e.path).join(PACKAGE_MARKER)),
    );

    paths
}

fn landed(root: &Path, entry: &CatalogEntry) -> PathBuf {
    let path = root.join(&entry.path);
    match entry.path.file_name() {
        Some(name) => path.with_file_name(landed_file_name(name)),
        None => path,
    }
}
