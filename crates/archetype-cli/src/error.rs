//! CLI-level errors, their exit codes and how they are shown on stderr.

use std::error::Error;
use std::path::PathBuf;

use owo_colors::{OwoColorize, Style};
use thiserror::Error;

use archetype_core::error::{ArchetypeError, ErrorCategory as CoreCategory};

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Arguments that parse but make no sense together.
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A path named on the command line does not exist.
    #[error("Path not found: {}", path.display())]
    PathNotFound { path: PathBuf },

    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Build failed: {0}")]
    Core(#[from] ArchetypeError),

    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message, .. } => vec![
                format!("Check your input: {}", message),
                "Use --help for usage information".into(),
            ],

            Self::PathNotFound { path } => vec![
                format!("'{}' does not exist", path.display()),
                "Check the spelling and the current directory".into(),
            ],

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                "Check the file passed with --config and any .archetype.toml".into(),
                "Use 'archetype config path' to locate the user config file".into(),
                "Use 'archetype init' to create a default config".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::PathNotFound { .. } => ErrorCategory::NotFound,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Process exit status; see the table in `main.rs`.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Message for an ANSI terminal.
    pub fn format_colored(&self, verbose: bool) -> String {
        self.render(verbose, true)
    }

    /// Message for a pipe or file; no escape codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        self.render(verbose, false)
    }

    fn render(&self, verbose: bool, color: bool) -> String {
        let paint = |text: &str, style: Style| {
            if color {
                text.style(style).to_string()
            } else {
                text.to_owned()
            }
        };
        let red = Style::new().red();
        let dim = Style::new().dimmed();

        let mut out = format!(
            "\n{} {}\n",
            paint("Error:", red.bold()),
            paint(&self.to_string(), red)
        );

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                out.push_str(&format!(
                    "  {} {}\n",
                    paint("Caused by:", dim),
                    paint(&err.to_string(), dim)
                ));
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            let title = paint("Suggestions:", Style::new().yellow().bold());
            out.push_str(&format!("\n{title}\n"));
            for suggestion in &suggestions {
                out.push_str(&format!("  {suggestion}\n"));
            }
        }

        if !verbose {
            let hint = paint("Use -v / --verbose for more details.", dim);
            out.push_str(&format!("\n{hint}\n"));
        }

        out
    }

    /// Record the failure in the log before it is shown to the user.
    pub fn log(&self) {
        let category = self.category();
        match category {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(?category, exit_code = self.exit_code(), "{self}")
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(?category, exit_code = self.exit_code(), "{self}")
            }
        }
        if let Some(source) = self.source() {
            tracing::debug!(%source, "caused by");
        }
    }
}

/// How a failure is classified at the process boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UserError,
    NotFound,
    Configuration,
    Internal,
}

/// Attach a context message while converting into [`CliError`].
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

impl<T> IntoCli<T> for Result<T, ArchetypeError> {
    /// Core errors already carry their own context; the message is dropped.
    fn with_cli_context<F, S>(self, _f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(CliError::Core)
    }
}
