//! Error handling for the vuepack CLI.
//!
//! Library errors convert into [`CliError`] via `#[from]`; `main` turns the
//! final error into a miette report.

use std::path::PathBuf;

use miette::Report;
use thiserror::Error;
use vuepack_config::ConfigError;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Loading, rendering or validating the config failed
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Project root doesn't exist or isn't a directory
    #[error("Project root not found: {}", .0.display())]
    RootNotFound(PathBuf),

    /// JSON requested into a file the bundler would parse as JavaScript
    #[error("Refusing to write JSON to {}", .0.display())]
    JsonToScript(PathBuf),

    /// Writing the rendered config failed
    #[error("Failed to write {}: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Actionable hint for the user, when there is one
    pub fn hint(&self) -> Option<String> {
        match self {
            CliError::Config(ConfigError::EntryNotFound { .. }) => Some(
                "Create the entry module or point 'entry' in vuepack.toml at it".to_string(),
            ),
            CliError::Config(err) => err.hint().map(str::to_string),
            CliError::RootNotFound(_) => Some("Pass an existing directory to --root".to_string()),
            CliError::JsonToScript(_) => Some(
                "Use --format module for a loadable config, or an --out path ending in .json"
                    .to_string(),
            ),
            CliError::WriteFailed { .. } => {
                Some("Check permissions on the output location".to_string())
            }
            CliError::Io(_) => None,
        }
    }
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err.hint() {
        Some(hint) => miette::miette!(help = hint, "{}", err),
        None => miette::miette!("{}", err),
    }
}
