//! Build configuration handed to the bundler.

pub(crate) mod helpers;
mod plugin;
mod rule;
mod types;

use std::path::PathBuf;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

pub use plugin::{CompressOptions, DefineOptions, MinifyOptions, PluginDescriptor};
pub use rule::TransformRule;
pub use types::{ExtensionPattern, Loader, SourceMapMode};

use crate::environment::{Environment, Mode};
use crate::settings::{OutputOptions, ProjectSettings};

/// Fields shared by both build variants
#[derive(Debug, Clone, PartialEq)]
pub struct BaseConfig {
    /// Module bundling starts from
    pub entry: PathBuf,

    pub output: OutputOptions,

    /// Loader rules, evaluated in order
    pub rules: Vec<TransformRule>,
}

impl BaseConfig {
    pub fn from_settings(settings: &ProjectSettings) -> Self {
        Self {
            entry: settings.entry.clone(),
            output: settings.output.clone(),
            rules: TransformRule::defaults(),
        }
    }
}

/// Configuration for one bundler invocation.
///
/// Production builds carry the plugin chain, development builds a source map
/// directive. The variant is fixed at construction, and the production chain
/// always holds exactly three plugins.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildConfig {
    Production {
        base: BaseConfig,
        plugins: [PluginDescriptor; 3],
    },
    Development {
        base: BaseConfig,
        devtool: SourceMapMode,
    },
}

impl BuildConfig {
    pub fn base(&self) -> &BaseConfig {
        match self {
            BuildConfig::Production { base, .. } | BuildConfig::Development { base, .. } => base,
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            BuildConfig::Production { .. } => Mode::Production,
            BuildConfig::Development { .. } => Mode::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, BuildConfig::Production { .. })
    }

    pub fn plugins(&self) -> Option<&[PluginDescriptor]> {
        match self {
            BuildConfig::Production { plugins, .. } => Some(plugins.as_slice()),
            BuildConfig::Development { .. } => None,
        }
    }

    pub fn devtool(&self) -> Option<SourceMapMode> {
        match self {
            BuildConfig::Production { .. } => None,
            BuildConfig::Development { devtool, .. } => Some(*devtool),
        }
    }
}

/// Build the config for `env` using the stock project layout.
///
/// `NODE_ENV=production` selects the production variant; any other value, or
/// none, selects development.
///
/// # Example
///
/// ```
/// use vuepack_config::{produce_config, Environment};
///
/// let config = produce_config(&Environment::new().with("NODE_ENV", "production"));
/// assert_eq!(config.plugins().map(|p| p.len()), Some(3));
/// assert!(config.devtool().is_none());
///
/// let config = produce_config(&Environment::new());
/// assert_eq!(config.devtool().map(|d| d.as_str()), Some("#source-map"));
/// assert!(config.plugins().is_none());
/// ```
pub fn produce_config(env: &Environment) -> BuildConfig {
    produce_config_with(env, &ProjectSettings::default())
}

/// Like [`produce_config`], with base fields taken from `settings`.
pub fn produce_config_with(env: &Environment, settings: &ProjectSettings) -> BuildConfig {
    let base = BaseConfig::from_settings(settings);
    let mode = Mode::from_env(env);
    tracing::debug!(%mode, entry = %base.entry.display(), "Producing build config");

    match mode {
        Mode::Production => BuildConfig::Production {
            base,
            plugins: PluginDescriptor::production(),
        },
        Mode::Development => BuildConfig::Development {
            base,
            devtool: SourceMapMode::SourceMap,
        },
    }
}

#[derive(Serialize)]
struct WireOutput<'a> {
    path: &'a PathBuf,
    #[serde(rename = "publicPath")]
    public_path: &'a str,
    filename: &'a str,
}

#[derive(Serialize)]
struct WireModule<'a> {
    loaders: &'a [TransformRule],
}

// Field names follow the bundler's configuration schema.
impl Serialize for BuildConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let base = self.base();
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("entry", &base.entry)?;
        map.serialize_entry(
            "output",
            &WireOutput {
                path: &base.output.path,
                public_path: &base.output.public_path,
                filename: &base.output.filename,
            },
        )?;
        map.serialize_entry(
            "module",
            &WireModule {
                loaders: &base.rules,
            },
        )?;
        match self {
            BuildConfig::Production { plugins, .. } => map.serialize_entry("plugins", plugins)?,
            BuildConfig::Development { devtool, .. } => map.serialize_entry("devtool", devtool)?,
        }
        map.end()
    }
}
