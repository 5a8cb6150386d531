//! Check command: validate the config without writing anything.

use vuepack_config::{ConfigValidator, Environment, FsValidator};

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Validation steps:
///
/// 1. Load settings and produce the config
/// 2. Schema checks on output fields and rules
/// 3. Entry module exists under the root
pub fn execute(args: CheckArgs, env: Environment) -> Result<()> {
    ui::info("Checking configuration...");
    let (root, config) = utils::prepare(&args.project, env)?;

    FsValidator::new(&root).validate(&config)?;

    ui::success(&format!(
        "{} config is valid (entry {})",
        config.mode(),
        config.base().entry.display()
    ));
    Ok(())
}
