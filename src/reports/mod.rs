//! Non-interactive output for the risk matrix.
//!
//! The interactive renderer lives in [`crate::tui`]; this module covers the
//! plain-text summary used when stdout is not a terminal, and the helpers
//! that decide between the two.

mod summary;
mod types;

pub use summary::SummaryReporter;
pub use types::OutputFormat;

use std::io::IsTerminal;

/// Resolve [`OutputFormat::Auto`] against whether stdout is a terminal.
///
/// Returns TUI for interactive terminals, otherwise Summary.
#[must_use]
pub const fn auto_detect_format(format: OutputFormat, stdout_is_terminal: bool) -> OutputFormat {
    match format {
        OutputFormat::Auto => {
            if stdout_is_terminal {
                OutputFormat::Tui
            } else {
                OutputFormat::Summary
            }
        }
        other => other,
    }
}

/// Whether stdout is attached to a terminal.
#[must_use]
pub fn stdout_is_terminal() -> bool {
    std::io::stdout().is_terminal()
}

/// Determine if color should be used based on flags and environment
#[must_use]
pub fn should_use_color(no_color_flag: bool) -> bool {
    !no_color_flag && std::env::var("NO_COLOR").is_err()
}
