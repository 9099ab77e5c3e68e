use thiserror::Error;

/// Domain validation failures. Every variant is a problem with user input.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Duplicate entry '{name}' in {catalog} catalog")]
    DuplicateEntry { catalog: &'static str, name: String },

    #[error("Catalog entry '{name}' has an empty path")]
    EmptyEntryPath { name: String },

    #[error("Project name '{name}' normalizes to an empty package name")]
    EmptyPackageName { name: String },

    #[error("Invalid requirement on line {line}: {reason}")]
    InvalidRequirement { line: usize, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::AbsolutePathNotAllowed { path } => vec![
                format!("'{}' must be relative to the project root", path),
                "Remove the leading '/' or drive prefix".into(),
            ],
            Self::DuplicateEntry { catalog, name } => vec![
                format!("'{}' appears twice in the {} catalog", name, catalog),
                "Each logical name may be used once per catalog".into(),
            ],
            Self::EmptyPackageName { .. } => vec![
                "Choose a project name containing letters or digits".into(),
                "Examples: my-project, MyProject, my_project".into(),
            ],
            Self::InvalidRequirement { .. } => vec![
                "Requirement lines must look like 'package==1.2.3' or 'package'".into(),
            ],
            Self::EmptyEntryPath { name } => {
                vec![format!("Give '{}' a path or drop it from the catalog", name)]
            }
        }
    }
}
