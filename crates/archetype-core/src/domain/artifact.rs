//! Vocabulary shared by the builder and its callers.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Marker file that turns a directory into a Python package.
pub const PACKAGE_MARKER: &str = "__init__.py";

/// Ignore-file template name as bundled.
///
/// Stored without its leading dot; packaging tools skip dotfiles.
pub const IGNORE_FILE_TEMPLATE: &str = "gitignore";

/// Empty file created at the project root on every run.
pub const LICENSE_FILE: &str = "LICENSE";

/// Where a directory entry lives in the generated tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectoryKind {
    /// Resolved against the project root.
    Plain,
    /// Resolved under `<source_dir>/<package>/`.
    Package,
}

/// Result of materializing one artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Created,
    AlreadyExists,
}

impl Outcome {
    pub fn is_created(self) -> bool {
        matches!(self, Self::Created)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => write!(f, "created"),
            Self::AlreadyExists => write!(f, "already exists"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Directory,
    File,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directory => write!(f, "directory"),
            Self::File => write!(f, "file"),
        }
    }
}

/// One materialized (or found) path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artifact {
    pub path: PathBuf,
    pub kind: ArtifactKind,
    pub outcome: Outcome,
}

impl Artifact {
    pub fn directory(path: PathBuf, outcome: Outcome) -> Self {
        Self {
            path,
            kind: ArtifactKind::Directory,
            outcome,
        }
    }

    pub fn file(path: PathBuf, outcome: Outcome) -> Self {
        Self {
            path,
            kind: ArtifactKind::File,
            outcome,
        }
    }
}

/// File name a template lands under once copied.
///
/// Only the ignore-file template is renamed; it gains a leading dot.
pub fn landed_file_name(template_name: &str) -> String {
    if template_name == IGNORE_FILE_TEMPLATE {
        format!(".{template_name}")
    } else {
        template_name.to_owned()
    }
}
