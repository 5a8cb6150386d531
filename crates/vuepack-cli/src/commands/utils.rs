//! Shared setup for command implementations.

use std::path::{Path, PathBuf};

use vuepack_config::{produce_config_with, BuildConfig, Environment, Mode, ProjectSettings, NODE_ENV};

use crate::cli::ProjectArgs;
use crate::error::{CliError, Result};

/// Resolve a path relative to a working directory.
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Apply `--mode` on top of the environment snapshot.
pub fn effective_env(mut env: Environment, args: &ProjectArgs) -> Environment {
    if let Some(mode) = args.mode {
        env.set(NODE_ENV, Mode::from(mode).as_str());
    }
    env
}

/// Load settings for the project root and produce its config.
pub fn prepare(args: &ProjectArgs, env: Environment) -> Result<(PathBuf, BuildConfig)> {
    let root = args.root.clone();
    if !root.is_dir() {
        return Err(CliError::RootNotFound(root));
    }

    let env = effective_env(env, args);
    let settings = ProjectSettings::load(&root, &env)?;
    let config = produce_config_with(&env, &settings);
    tracing::info!(
        "Using {} config for {}",
        config.mode(),
        settings.entry.display()
    );

    Ok((root, config))
}
