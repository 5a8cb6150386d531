//! Pluggable config validation strategies
//!
//! Building a config never fails; these checks are opt-in for callers that want
//! feedback before the bundler sees the config. Schema checks stay off the
//! filesystem, [`FsValidator`] adds the entry file check for CLI use.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::bundle::BuildConfig;
use crate::error::{ConfigError, Result};

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use vuepack_config::{produce_config, ConfigValidator, Environment, SchemaValidator};
///
/// let config = produce_config(&Environment::new());
/// SchemaValidator.validate(&config).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()> {
        let base = config.base();

        if base.entry.as_os_str().is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "entry path cannot be empty".to_string(),
                hint: Some("Point 'entry' at the module bundling starts from".to_string()),
            });
        }

        if base.output.path.as_os_str().is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "output path cannot be empty".to_string(),
                hint: Some("Set 'output.path' to the build directory".to_string()),
            });
        }

        let filename = &base.output.filename;
        if filename.trim().is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "output filename cannot be empty".to_string(),
                hint: Some("Set 'output.filename', e.g. \"index.js\"".to_string()),
            });
        }
        if filename.contains(['/', '\\']) {
            return Err(ConfigError::SchemaValidation {
                message: format!("output filename '{filename}' contains a path separator"),
                hint: Some("Put directories in 'output.path' instead".to_string()),
            });
        }

        let public_path = &base.output.public_path;
        if !public_path.starts_with('/') || !public_path.ends_with('/') {
            return Err(ConfigError::SchemaValidation {
                message: format!("public path '{public_path}' must start and end with '/'"),
                hint: Some("Use a value like \"/build/\"".to_string()),
            });
        }

        let mut seen = HashSet::new();
        for rule in &base.rules {
            if !seen.insert(rule.test.extension()) {
                return Err(ConfigError::SchemaValidation {
                    message: format!("duplicate loader rule for '.{}'", rule.test.extension()),
                    hint: None,
                });
            }
        }

        Ok(())
    }
}

/// Filesystem validator (for CLI use)
///
/// Checks the schema, then that the entry module exists under `root`. The
/// output directory is left alone; the bundler creates it.
pub struct FsValidator {
    root: PathBuf,
}

impl FsValidator {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()> {
        SchemaValidator.validate(config)?;

        let path = self.root.join(&config.base().entry);
        if !path.is_file() {
            return Err(ConfigError::EntryNotFound { path });
        }

        Ok(())
    }
}

pub fn validate_schema(config: &BuildConfig) -> Result<()> {
    SchemaValidator.validate(config)
}

pub fn validate_fs(config: &BuildConfig, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(config)
}
