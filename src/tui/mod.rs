//! Interactive terminal UI using ratatui.
//!
//! The UI owns a single [`App`], which in turn owns the
//! [`RiskMatrix`](crate::matrix::RiskMatrix). Each loop iteration draws the
//! current derived view, waits for one crossterm event and applies it
//! synchronously; there is no background work.
//!
//! Two content views share the same chrome (header, filter bar, status bar,
//! footer hints and help overlay):
//! - matrix view: editable table of risks with one radio column per level
//! - graph view: bar chart of the per-level counts

pub mod app;
pub(crate) mod constants;
mod events;
pub mod state;
pub mod status;
pub mod theme;
mod ui;
mod views;
pub mod widgets;

// Theme exports
pub use theme::{
    colors, set_theme, toggle_theme, ColorScheme, FooterHints, Styles, Theme,
};

pub use app::{App, HitAreas};
pub use events::{handle_key_event, handle_mouse_event, Event};
pub use state::{ListNavigation, RowCursor};
pub use status::StatusMessage;
pub use ui::run_tui;
