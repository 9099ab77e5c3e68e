//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `ARCHETYPE_*` environment variables, `__` between sections
//!    (`ARCHETYPE_PROJECT__BASE_PATH`)
//! 3. The file given with `--config`
//! 4. `.archetype.toml` in the current directory
//! 5. `config.toml` in the user config directory
//! 6. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use archetype_core::application::DEFAULT_SOURCE_DIR;

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "ARCHETYPE";

/// Per-directory configuration file name.
pub const LOCAL_CONFIG_FILE: &str = ".archetype.toml";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Project being generated.
    pub project: ProjectConfig,
    /// Template source.
    pub templates: TemplateConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub name: Option<String>,
    pub base_path: Option<PathBuf>,
    pub source_dir: PathBuf,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: None,
            base_path: None,
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory with a `resources/` subdirectory; bundled templates if unset.
    pub source: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from every source in priority order.
    ///
    /// `config_file` is the path passed via `--config`; unlike the default
    /// locations it must exist.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = Config::builder()
            .set_default("project.source_dir", DEFAULT_SOURCE_DIR)?
            .set_default("output.no_color", false)?
            .add_source(toml_file(&Self::config_path()).required(false))
            .add_source(toml_file(Path::new(LOCAL_CONFIG_FILE)).required(false));

        if let Some(path) = config_file {
            builder = builder.add_source(toml_file(path).required(true));
        }

        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?;

        settings
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.archetype.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("io", "archetype", "archetype")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Render as TOML, the format `init` writes.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

fn toml_file(path: &Path) -> File<config::FileSourceFile, FileFormat> {
    File::from(path.to_path_buf()).format(FileFormat::Toml)
}
