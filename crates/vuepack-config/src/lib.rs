//! Bundler configuration for the vuepack front-end build.
//!
//! [`produce_config`] turns an explicit [`Environment`] into a [`BuildConfig`]:
//! the production variant when `NODE_ENV=production`, the development variant
//! otherwise. [`emit`] renders the result for the bundler.

pub mod bundle;
pub mod emit;
pub mod environment;
pub mod error;
pub mod settings;
pub mod validation;

// Re-export main types
pub use bundle::*;
pub use emit::OutputFormat;
pub use environment::{Environment, Mode, NODE_ENV};
pub use error::*;
pub use settings::{OutputOptions, ProjectSettings, ENV_PREFIX, SETTINGS_FILE};

pub use validation::{validate_fs, validate_schema, ConfigValidator, FsValidator, SchemaValidator};
