//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not domain rules.
//! Domain errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A required property was not supplied.
    #[error("Plugin property '{property}' not set")]
    MissingProperty { property: &'static str },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// A bundled template could not be found.
    #[error("Template resource not found: {path}")]
    ResourceNotFound { path: PathBuf },

    /// In-memory adapter lock poisoned.
    #[error("Adapter lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingProperty { property } => vec![
                format!("Set '{}' before building", property),
                "Pass --base-path, or set project.base_path in the config file".into(),
                "Or export ARCHETYPE_PROJECT__BASE_PATH".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Re-running is safe: existing files are left untouched".into(),
            ],
            Self::ResourceNotFound { path } => vec![
                format!("The template '{}' is missing", path.display()),
                "The installation or --templates directory looks incomplete".into(),
                "Template directories need a 'resources/' subdirectory".into(),
            ],
            Self::StoreLockError => vec!["Try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingProperty { .. } => ErrorCategory::Configuration,
            Self::ResourceNotFound { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
