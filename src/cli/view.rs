//! View command handler.
//!
//! Implements the `view` subcommand: the interactive matrix when stdout is
//! a terminal, a plain-text summary otherwise.

use crate::config::{Validatable, ViewConfig};
use crate::error::RiskError;
use crate::reports::{
    auto_detect_format, should_use_color, stdout_is_terminal, OutputFormat, SummaryReporter,
};
use crate::tui::{run_tui, App};
use anyhow::{Context, Result};

/// Run the view command
#[allow(clippy::needless_pass_by_value)]
pub fn run_view(config: ViewConfig) -> Result<()> {
    check_config(&config)?;

    match auto_detect_format(config.output, stdout_is_terminal()) {
        OutputFormat::Tui => {
            let mut app = App::from_config(&config);
            run_tui(&mut app, &config.app.tui.theme).context("terminal UI failed")?;
        }
        _ => println!("{}", render_summary(&config)),
    }

    Ok(())
}

/// Reject configurations that failed validation.
fn check_config(config: &ViewConfig) -> Result<(), RiskError> {
    let errors = config.app.validate();
    if errors.is_empty() {
        return Ok(());
    }
    let message = errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");
    Err(RiskError::config(message))
}

/// Non-interactive rendering of the start state.
pub fn render_summary(config: &ViewConfig) -> String {
    let mut reporter = SummaryReporter::new();
    if !should_use_color(config.no_color) {
        reporter = reporter.no_color();
    }
    reporter.render(&config.initial_matrix())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LevelFilter, RiskLevel, ViewMode};

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = ViewConfig::default();
        config.app.tui.theme = "neon".to_string();
        config.app.tui.tick_rate_ms = 1;
        let err = check_config(&config).expect_err("invalid config");
        let text = err.to_string();
        assert!(text.contains("tui.theme"), "{text}");
        assert!(text.contains("tui.tick_rate_ms"), "{text}");
    }

    #[test]
    fn test_summary_uses_overrides() {
        let config = ViewConfig {
            filter: Some(LevelFilter::Only(RiskLevel::Medium)),
            view_mode: Some(ViewMode::Graph),
            no_color: true,
            ..ViewConfig::default()
        };
        let output = render_summary(&config);
        assert!(output.contains("Filter:  Medium"));
        assert!(output.contains("Greatest risk:  Medium"));
        assert!(output.contains("(total 2)"));
    }

    #[test]
    fn test_summary_run_succeeds() {
        let config = ViewConfig {
            output: OutputFormat::Summary,
            no_color: true,
            ..ViewConfig::default()
        };
        assert!(run_view(config).is_ok());
    }

    #[test]
    fn test_invalid_config_fails_run() {
        let mut config = ViewConfig {
            output: OutputFormat::Summary,
            ..ViewConfig::default()
        };
        config.app.tui.theme = "neon".to_string();
        let err = run_view(config).expect_err("invalid theme");
        assert!(err.to_string().contains("tui.theme"), "{err}");
    }
}
