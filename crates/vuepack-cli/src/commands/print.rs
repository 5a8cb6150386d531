//! Print command: render the config to stdout.

use std::io::Write;

use vuepack_config::{Environment, OutputFormat};

use crate::cli::PrintArgs;
use crate::commands::utils;
use crate::error::Result;

pub fn execute(args: PrintArgs, env: Environment) -> Result<()> {
    let (_, config) = utils::prepare(&args.project, env)?;
    let rendered = OutputFormat::from(args.format).render(&config)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
