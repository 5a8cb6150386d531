//! Command-line interface definition for vuepack.
//!
//! - `vuepack print` - render the config to stdout
//! - `vuepack write` - render the config to a file
//! - `vuepack check` - validate the config against the project

mod commands;
pub mod enums;

use clap::Parser;

pub use commands::{CheckArgs, Command, PrintArgs, ProjectArgs, WriteArgs};
pub use enums::{FormatArg, ModeArg};

/// vuepack - bundler configuration for the Vue front end
#[derive(Parser, Debug)]
#[command(
    name = "vuepack",
    version,
    about = "Produce the front-end bundler configuration",
    long_about = "vuepack builds the bundler configuration for the Vue front end.\n\
                  NODE_ENV=production selects minified output with constant injection;\n\
                  any other value selects source-mapped development output."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
