//! Plain-text rendering of the derived view for non-interactive use.
//!
//! Matrix mode prints one line per sorted risk with a radio marker under
//! its level; graph mode prints one scaled bar per level and the greatest
//! risk. Both end with the per-level totals.

use crate::matrix::{DerivedView, RiskMatrix};
use crate::model::{RiskLevel, ViewMode};
use crate::utils::truncate_str;
use unicode_width::UnicodeWidthStr;

/// Width of the longest bar in graph mode.
const BAR_WIDTH: usize = 30;

/// Column width reserved for descriptions in matrix mode.
const DESCRIPTION_WIDTH: usize = 32;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// ANSI color name for a level (red / yellow / green).
const fn level_color(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::High => "red",
        RiskLevel::Medium => "yellow",
        RiskLevel::Low => "green",
    }
}

/// Pad `text` on the right to `width` display columns.
fn pad(text: &str, width: usize) -> String {
    let shown = truncate_str(text, width);
    let fill = width.saturating_sub(UnicodeWidthStr::width(shown.as_str()));
    format!("{shown}{}", " ".repeat(fill))
}

/// Summary reporter for shell output
#[derive(Debug, Clone, Copy)]
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    /// Render the matrix in its current filter and view mode.
    #[must_use]
    pub fn render(&self, matrix: &RiskMatrix) -> String {
        let view = matrix.derive();
        let mut lines = Vec::new();

        lines.push(self.color("Risk Matrix", "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));
        lines.push(format!(
            "{}  {}    {}  {}",
            self.color("Filter:", "cyan"),
            matrix.filter(),
            self.color("View:", "cyan"),
            matrix.view_mode()
        ));
        lines.push(String::new());

        match matrix.view_mode() {
            ViewMode::Matrix => self.render_rows(&view, &mut lines),
            ViewMode::Graph => self.render_bars(&view, &mut lines),
        }

        lines.push(String::new());
        let totals: Vec<String> = view
            .counts
            .iter()
            .map(|(level, count)| {
                format!("{} {count}", self.color(level.label(), level_color(level)))
            })
            .collect();
        lines.push(format!(
            "{}  {}  (total {})",
            self.color("Counts:", "cyan"),
            totals.join("  "),
            view.counts.total()
        ));

        lines.join("\n")
    }

    fn render_rows(&self, view: &DerivedView<'_>, lines: &mut Vec<String>) {
        let mut header = format!("{}  {}", pad("ID", 5), pad("Risk", DESCRIPTION_WIDTH));
        for level in RiskLevel::ALL {
            header.push_str("  ");
            header.push_str(&self.color(&pad(level.label(), 6), level_color(level)));
        }
        lines.push(header.trim_end().to_string());

        if view.is_empty() {
            lines.push(self.color("  (no risks)", "dim"));
            return;
        }

        for risk in &view.sorted {
            let description = if risk.description.is_empty() {
                "(no description)"
            } else {
                risk.description.as_str()
            };
            let mut line = format!(
                "{}  {}",
                pad(&risk.id.to_string(), 5),
                pad(description, DESCRIPTION_WIDTH)
            );
            for level in RiskLevel::ALL {
                let marker = if risk.level == level { "(●)" } else { "( )" };
                line.push_str("  ");
                line.push_str(&pad(marker, 6));
            }
            lines.push(line.trim_end().to_string());
        }
    }

    fn render_bars(&self, view: &DerivedView<'_>, lines: &mut Vec<String>) {
        let max = view.counts.max();
        for (level, count) in view.counts.iter() {
            let filled = if max == 0 {
                0
            } else {
                (count * BAR_WIDTH).div_ceil(max)
            };
            lines.push(format!(
                "{}  {} {count}",
                self.color(&pad(level.label(), 6), level_color(level)),
                self.color(&"█".repeat(filled), level_color(level)),
            ));
        }
        lines.push(String::new());
        lines.push(format!(
            "{}  {}",
            self.color("Greatest risk:", "cyan"),
            self.color(view.greatest.label(), level_color(view.greatest))
        ));
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LevelFilter;

    fn sample() -> RiskMatrix {
        RiskMatrix::from_entries([
            ("Risk 1", RiskLevel::High),
            ("Risk 2", RiskLevel::Medium),
            ("Risk 3", RiskLevel::Low),
            ("Risk 4", RiskLevel::High),
        ])
    }

    #[test]
    fn test_matrix_rows_follow_level_order() {
        let output = SummaryReporter::new().no_color().render(&sample());
        let order: Vec<usize> = ["Risk 1", "Risk 4", "Risk 2", "Risk 3"]
            .iter()
            .map(|name| output.find(name).expect("row present"))
            .collect();
        assert!(order.windows(2).all(|w| w[0] < w[1]), "{output}");
        assert!(output.contains("Counts:  High 2  Medium 1  Low 1  (total 4)"));
        assert!(!output.contains('\x1b'));
    }

    #[test]
    fn test_long_descriptions_are_truncated() {
        let matrix = RiskMatrix::from_entries([(
            "Prolonged regional power outage across both data centres",
            RiskLevel::High,
        )]);
        let output = SummaryReporter::new().no_color().render(&matrix);
        assert!(output.contains("Prolonged regional power outa..."), "{output}");
        assert!(!output.contains("data centres"), "{output}");
    }

    #[test]
    fn test_matrix_row_marks_its_level() {
        let output = SummaryReporter::new().no_color().render(&sample());
        let row = output
            .lines()
            .find(|line| line.contains("Risk 2"))
            .expect("row present");
        assert!(row.ends_with("( )     (●)     ( )"), "{row}");
    }

    #[test]
    fn test_filtered_rows() {
        let mut matrix = sample();
        matrix.set_filter(LevelFilter::Only(RiskLevel::High));
        let output = SummaryReporter::new().no_color().render(&matrix);
        assert!(output.contains("Filter:  High"));
        assert!(output.contains("Risk 4"));
        assert!(!output.contains("Risk 2"));
        assert!(output.contains("(total 2)"));
    }

    #[test]
    fn test_graph_mode_bars() {
        let mut matrix = sample();
        matrix.toggle_view();
        let output = SummaryReporter::new().no_color().render(&matrix);
        let high = output
            .lines()
            .find(|line| line.starts_with("High"))
            .expect("high bar");
        assert_eq!(high.matches('█').count(), BAR_WIDTH);
        let low = output
            .lines()
            .find(|line| line.starts_with("Low"))
            .expect("low bar");
        assert_eq!(low.matches('█').count(), BAR_WIDTH / 2);
        assert!(output.contains("Greatest risk:  High"));
    }

    #[test]
    fn test_empty_matrix() {
        let output = SummaryReporter::new().no_color().render(&RiskMatrix::new());
        assert!(output.contains("(no risks)"));
        assert!(output.contains("(total 0)"));
    }

    #[test]
    fn test_colored_output_uses_level_colors() {
        let output = SummaryReporter::new().render(&sample());
        assert!(output.contains("\x1b[31mHigh"));
        assert!(output.contains("\x1b[32mLow"));
    }
}
