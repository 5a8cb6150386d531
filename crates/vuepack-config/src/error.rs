//! Error types for settings loading, rendering and validation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Settings loading errors
    #[error("invalid config value for '{field}'{}", .hint.as_ref().map(|h| format!(": {h}")).unwrap_or_default())]
    InvalidValue { field: String, hint: Option<String> },

    // Filesystem validation errors (for CLI use)
    #[error("entry path not found: {}", .path.display())]
    EntryNotFound { path: PathBuf },

    // Schema validation errors (no filesystem checks)
    #[error("schema validation failed: {message}")]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(String),
}

impl ConfigError {
    /// Actionable hint attached to the error, if any.
    pub fn hint(&self) -> Option<&str> {
        match self {
            ConfigError::InvalidValue { hint, .. } | ConfigError::SchemaValidation { hint, .. } => {
                hint.as_deref()
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_value_includes_hint_in_message() {
        let err = ConfigError::InvalidValue {
            field: "output.public_path".to_string(),
            hint: Some("expected a string".to_string()),
        };
        let msg = err.to_string();
        assert!(msg.contains("output.public_path"));
        assert!(msg.contains("expected a string"));
        assert_eq!(err.hint(), Some("expected a string"));
    }

    #[test]
    fn invalid_value_without_hint() {
        let err = ConfigError::InvalidValue {
            field: "entry".to_string(),
            hint: None,
        };
        assert_eq!(err.to_string(), "invalid config value for 'entry'");
        assert!(err.hint().is_none());
    }

    #[test]
    fn entry_not_found_shows_path() {
        let err = ConfigError::EntryNotFound {
            path: PathBuf::from("app/main.js"),
        };
        assert!(err.to_string().contains("app/main.js"));
    }
}
