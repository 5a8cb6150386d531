use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::{FormatArg, ModeArg};

/// Available vuepack subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the config for the current environment to stdout
    Print(PrintArgs),

    /// Write the config to a file in the project root
    Write(WriteArgs),

    /// Validate the config against the project on disk
    ///
    /// Checks output settings and that the entry module exists.
    Check(CheckArgs),
}

/// Options shared by every command
#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Build variant (default: taken from NODE_ENV)
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Project root containing vuepack.toml and the entry module
    #[arg(long, default_value = ".", value_name = "DIR")]
    pub root: PathBuf,
}

/// Arguments for the print command
#[derive(Args, Debug)]
pub struct PrintArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Output representation
    #[arg(short, long, value_enum, default_value_t = FormatArg::Module)]
    pub format: FormatArg,
}

/// Arguments for the write command
#[derive(Args, Debug)]
pub struct WriteArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Output representation
    ///
    /// JSON is for inspection; the bundler only loads the module form.
    #[arg(short, long, value_enum, default_value_t = FormatArg::Module)]
    pub format: FormatArg,

    /// Destination, relative to the project root
    /// (default: webpack.config.js, or webpack.config.json with --format json)
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub project: ProjectArgs,
}
