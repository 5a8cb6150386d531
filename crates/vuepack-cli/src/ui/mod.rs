//! Status messages on stderr.
//!
//! Rendered configs go to stdout; everything meant for a human goes here.

mod messages;

pub use messages::{info, success, warning};

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR, then falls back to terminal detection.
pub fn should_use_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::user_attended_stderr()
}

/// Apply the color decision globally for owo-colors.
pub fn init_colors() {
    owo_colors::set_override(should_use_color());
}

/// Force colors off, e.g. for `--no-color`.
pub fn disable_colors() {
    owo_colors::set_override(false);
}
