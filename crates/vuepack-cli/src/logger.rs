//! Logging setup for the vuepack CLI.
//!
//! Verbosity, in priority order:
//! 1. `--verbose`: debug for vuepack crates
//! 2. `--quiet`: errors only
//! 3. `RUST_LOG`
//! 4. info for vuepack crates
//!
//! Logs go to stderr so rendered configs on stdout stay pipeable.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERBOSE_FILTER: &str = "vuepack=debug,vuepack_config=debug,vuepack_cli=debug";
const QUIET_FILTER: &str = "vuepack=error,vuepack_config=error,vuepack_cli=error";
const DEFAULT_FILTER: &str = "vuepack=info,vuepack_config=info,vuepack_cli=info";

/// Pick the filter for the given flags.
pub fn build_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize the tracing subscriber. Call once, before any logging.
///
/// ```rust,no_run
/// use vuepack_cli::logger::init_logger;
///
/// init_logger(false, false, false);
/// tracing::info!("Producing config");
/// ```
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(build_filter(verbose, quiet), no_color);
}

pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_wins_over_quiet() {
        let filter = build_filter(true, true).to_string();
        assert!(filter.contains("vuepack_config=debug"));
    }

    #[test]
    fn quiet_filter_is_errors_only() {
        let filter = build_filter(false, true).to_string();
        assert!(filter.contains("vuepack_cli=error"));
        assert!(!filter.contains("info"));
    }

    #[test]
    fn init_twice_does_not_panic() {
        init_logger(false, true, true);
        init_logger(true, false, true);
    }
}
