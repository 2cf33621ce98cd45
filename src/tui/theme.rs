//! Centralized theme and color scheme for the TUI.
//!
//! Every view pulls its colors from the active [`Theme`] so that switching
//! themes at runtime restyles the whole screen on the next frame.

use crate::model::RiskLevel;
use ratatui::prelude::*;
use std::sync::{PoisonError, RwLock};

/// Color scheme for the TUI application.
/// Provides semantic colors for different UI elements.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    // Risk level colors
    pub high: Color,
    pub medium: Color,
    pub low: Color,

    // UI element colors
    pub primary: Color,
    pub accent: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub text: Color,
    pub text_muted: Color,
    pub selection_bg: Color,

    // Status colors
    pub warning: Color,

    // Text drawn on top of level-colored backgrounds
    pub badge_fg: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorScheme {
    /// Dark theme (default)
    pub const fn dark() -> Self {
        Self {
            high: Color::Red,
            medium: Color::Yellow,
            low: Color::Green,

            primary: Color::Cyan,
            accent: Color::Yellow,
            muted: Color::DarkGray,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            text: Color::White,
            text_muted: Color::Gray,
            selection_bg: Color::Rgb(60, 60, 80),

            warning: Color::Yellow,

            badge_fg: Color::Black,
        }
    }

    /// Light theme
    pub const fn light() -> Self {
        Self {
            high: Color::Rgb(200, 0, 0),
            medium: Color::Rgb(180, 140, 0),
            low: Color::Rgb(0, 128, 0),

            primary: Color::Rgb(0, 100, 160),
            accent: Color::Rgb(180, 140, 0),
            muted: Color::Rgb(150, 150, 150),
            border: Color::Rgb(150, 150, 150),
            border_focused: Color::Rgb(0, 100, 160),
            text: Color::Black,
            text_muted: Color::Rgb(100, 100, 100),
            selection_bg: Color::Rgb(210, 220, 240),

            warning: Color::Rgb(180, 140, 0),

            badge_fg: Color::White,
        }
    }

    /// High contrast theme
    pub const fn high_contrast() -> Self {
        Self {
            high: Color::LightRed,
            medium: Color::LightYellow,
            low: Color::LightGreen,

            primary: Color::LightCyan,
            accent: Color::LightYellow,
            muted: Color::Gray,
            border: Color::White,
            border_focused: Color::LightCyan,
            text: Color::White,
            text_muted: Color::Gray,
            selection_bg: Color::Rgb(50, 50, 80),

            warning: Color::LightYellow,

            badge_fg: Color::Black,
        }
    }

    /// Color associated with a risk level
    pub const fn level_color(&self, level: RiskLevel) -> Color {
        match level {
            RiskLevel::High => self.high,
            RiskLevel::Medium => self.medium,
            RiskLevel::Low => self.low,
        }
    }
}

/// Global theme instance (runtime switchable)
static THEME: RwLock<Theme> = RwLock::new(Theme::dark());

/// Theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: ColorScheme,
    pub name: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub const fn dark() -> Self {
        Self {
            colors: ColorScheme::dark(),
            name: "dark",
        }
    }

    pub const fn light() -> Self {
        Self {
            colors: ColorScheme::light(),
            name: "light",
        }
    }

    pub const fn high_contrast() -> Self {
        Self {
            colors: ColorScheme::high_contrast(),
            name: "high-contrast",
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            "high-contrast" | "highcontrast" | "hc" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }

    /// Get the next theme in the rotation
    pub fn next(&self) -> Self {
        match self.name {
            "dark" => Self::light(),
            "light" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }
}

/// Set the current theme
pub fn set_theme(theme: Theme) {
    *THEME.write().unwrap_or_else(PoisonError::into_inner) = theme;
}

/// Toggle to the next theme in rotation (dark -> light -> high-contrast -> dark)
pub fn toggle_theme() -> &'static str {
    let mut theme = THEME.write().unwrap_or_else(PoisonError::into_inner);
    *theme = theme.next();
    theme.name
}

/// Convenience function to get current colors
pub fn colors() -> ColorScheme {
    THEME.read().unwrap_or_else(PoisonError::into_inner).colors
}

// ============================================================================
// Style Helpers
// ============================================================================

/// Common style presets for consistent UI elements
pub struct Styles;

impl Styles {
    /// Header title style
    pub fn header_title() -> Style {
        Style::default().fg(colors().primary).bold()
    }

    pub fn text_muted() -> Style {
        Style::default().fg(colors().text_muted)
    }

    /// Selected row style
    pub fn selected() -> Style {
        Style::default().bg(colors().selection_bg).bold()
    }

    pub fn border() -> Style {
        Style::default().fg(colors().border)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(colors().border_focused)
    }

    pub fn shortcut_key() -> Style {
        Style::default().fg(colors().accent)
    }

    pub fn shortcut_desc() -> Style {
        Style::default().fg(colors().text_muted)
    }

    /// Foreground in the level's color
    pub fn level(level: RiskLevel) -> Style {
        Style::default().fg(colors().level_color(level))
    }

    /// Badge: level color as background
    pub fn level_badge(level: RiskLevel) -> Style {
        let scheme = colors();
        Style::default()
            .fg(scheme.badge_fg)
            .bg(scheme.level_color(level))
            .bold()
    }
}

/// Render a level badge, e.g. ` HIGH `
pub fn level_badge(level: RiskLevel) -> Span<'static> {
    Span::styled(
        format!(" {} ", level.label().to_uppercase()),
        Styles::level_badge(level),
    )
}

// ============================================================================
// Footer Hints
// ============================================================================

/// Mode-specific footer hints
pub struct FooterHints;

impl FooterHints {
    /// Hints for matrix mode
    pub fn matrix() -> Vec<(&'static str, &'static str)> {
        let mut hints = vec![
            ("↑↓", "row"),
            ("←→", "level"),
            ("Space", "set"),
            ("e", "edit"),
            ("a", "add"),
            ("d", "del"),
        ];
        hints.extend(Self::global());
        hints
    }

    /// Hints for graph mode
    pub fn graph() -> Vec<(&'static str, &'static str)> {
        let mut hints = vec![("click", "bar count")];
        hints.extend(Self::global());
        hints
    }

    /// Hints while a description is being edited
    pub fn editing() -> Vec<(&'static str, &'static str)> {
        vec![
            ("type", "edit description"),
            ("Backspace", "delete"),
            ("Enter/Esc", "done"),
        ]
    }

    /// Global hints (always shown)
    pub fn global() -> Vec<(&'static str, &'static str)> {
        vec![
            ("f", "filter"),
            ("g", "view"),
            ("t", "theme"),
            ("?", "help"),
            ("q", "quit"),
        ]
    }
}

/// Render footer hints as spans
pub fn render_footer_hints(hints: &[(&str, &str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!("[{key}]"), Styles::shortcut_key()));
        spans.push(Span::styled((*desc).to_string(), Styles::shortcut_desc()));
    }

    spans
}
