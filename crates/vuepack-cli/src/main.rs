//! vuepack CLI - produce the front-end bundler config for this process.
//!
//! Parses arguments, sets up logging, snapshots the environment once and
//! dispatches to a command.

use clap::Parser;
use miette::Result;
use vuepack_cli::{cli, commands, error, logger, ui};
use vuepack_config::Environment;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    if args.no_color {
        ui::disable_colors();
    } else {
        ui::init_colors();
    }

    // The only read of process-wide environment state.
    let env = Environment::from_process();

    let result = match args.command {
        cli::Command::Print(print_args) => commands::print_execute(print_args, env),
        cli::Command::Write(write_args) => commands::write_execute(write_args, env),
        cli::Command::Check(check_args) => commands::check_execute(check_args, env),
    };

    result.map_err(error::cli_error_to_miette)
}
