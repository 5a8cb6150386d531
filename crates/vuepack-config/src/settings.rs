//! Project-level overrides for the base build record.
//!
//! Settings are layered with figment, lowest priority first:
//! built-in defaults, `vuepack.toml` in the project root, then `VUEPACK_`
//! variables from the injected [`Environment`].

use std::path::{Path, PathBuf};

use figment::{
    providers::{Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::bundle::helpers::{
    default_entry, default_filename, default_output_path, default_public_path,
};
use crate::environment::Environment;
use crate::error::{ConfigError, Result};

/// File name looked up in the project root
pub const SETTINGS_FILE: &str = "vuepack.toml";

/// Prefix for environment overrides; `__` separates nested keys
pub const ENV_PREFIX: &str = "VUEPACK_";

/// Where and under which name the bundle is emitted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputOptions {
    /// Directory the bundler writes artifacts to
    #[serde(default = "default_output_path")]
    pub path: PathBuf,

    /// URL prefix clients fetch assets from
    #[serde(default = "default_public_path")]
    pub public_path: String,

    /// Name of the emitted bundle file
    #[serde(default = "default_filename")]
    pub filename: String,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            public_path: default_public_path(),
            filename: default_filename(),
        }
    }
}

/// The overridable part of a build config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSettings {
    /// Module bundling starts from
    #[serde(default = "default_entry")]
    pub entry: PathBuf,

    #[serde(default)]
    pub output: OutputOptions,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            entry: default_entry(),
            output: OutputOptions::default(),
        }
    }
}

impl ProjectSettings {
    /// Settings file in `root`, if one exists
    pub fn find(root: impl AsRef<Path>) -> Option<PathBuf> {
        let path = root.as_ref().join(SETTINGS_FILE);
        path.is_file().then_some(path)
    }

    /// Load layered settings for the project at `root`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use vuepack_config::{Environment, ProjectSettings};
    ///
    /// let env = Environment::new().with("VUEPACK_ENTRY", "./src/main.js");
    /// let settings = ProjectSettings::load(".", &env).unwrap();
    /// assert_eq!(settings.entry.to_str(), Some("./src/main.js"));
    /// ```
    pub fn load(root: impl AsRef<Path>, env: &Environment) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = Self::find(&root) {
            tracing::debug!("Loading settings from {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        for (key, value) in env.prefixed(ENV_PREFIX) {
            let key = key.to_ascii_lowercase().replace("__", ".");
            tracing::trace!("Applying environment override {}", key);
            figment = figment.merge(Serialized::default(&key, value));
        }

        figment.extract().map_err(|e| ConfigError::InvalidValue {
            field: error_field(&e),
            hint: Some(e.to_string()),
        })
    }

    /// Create from serde_json::Value (for programmatic settings)
    ///
    /// # Example
    ///
    /// ```
    /// use vuepack_config::ProjectSettings;
    /// use serde_json::json;
    ///
    /// let settings = ProjectSettings::from_value(json!({
    ///     "output": { "public_path": "/static/" }
    /// }))
    /// .unwrap();
    /// assert_eq!(settings.output.public_path, "/static/");
    /// assert_eq!(settings.output.filename, "index.js");
    /// ```
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "settings".to_string(),
            hint: Some(e.to_string()),
        })
    }
}

fn error_field(err: &figment::Error) -> String {
    if err.path.is_empty() {
        SETTINGS_FILE.to_string()
    } else {
        err.path.join(".")
    }
}
