//! Application state for the TUI.
//!
//! `App` owns the [`RiskMatrix`] and the purely visual state around it
//! (row cursor, level cursor, inline editor, overlays). Every change to the
//! risks themselves goes through the matrix's typed mutations; the rest of
//! this module only decides which risk and which level they apply to.

use super::constants::STATUS_CLEAR_SECS;
use super::state::{ListNavigation, RowCursor};
use super::status::StatusMessage;
use super::theme::toggle_theme;
use crate::config::{TuiPreferences, ViewConfig};
use crate::matrix::{DerivedView, RiskMatrix};
use crate::model::{LevelFilter, Risk, RiskId, RiskLevel, ViewMode};
use ratatui::layout::{Position, Rect};
use std::path::PathBuf;
use std::time::Duration;

/// Screen regions recorded by the last render, used to resolve mouse clicks.
#[derive(Debug, Clone, Default)]
pub struct HitAreas {
    /// Table body below the header row, one line per visible risk
    pub rows: Rect,
    /// Index of the first visible row
    pub row_offset: usize,
    /// Columns holding the High / Medium / Low radio markers
    pub level_columns: [Rect; RiskLevel::COUNT],
    /// Bars of the graph view
    pub bars: Vec<(RiskLevel, Rect)>,
}

impl HitAreas {
    /// Display row under `pos`, if it falls inside the table body.
    pub fn row_at(&self, pos: Position) -> Option<usize> {
        self.rows
            .contains(pos)
            .then(|| self.row_offset + usize::from(pos.y - self.rows.y))
    }

    /// Level column under column `x`.
    pub fn level_at(&self, x: u16) -> Option<RiskLevel> {
        RiskLevel::ALL
            .into_iter()
            .zip(self.level_columns)
            .find(|(_, col)| col.width > 0 && x >= col.x && x < col.right())
            .map(|(level, _)| level)
    }

    /// Graph bar under `pos`.
    pub fn bar_at(&self, pos: Position) -> Option<RiskLevel> {
        self.bars
            .iter()
            .find(|(_, rect)| rect.contains(pos))
            .map(|(level, _)| *level)
    }
}

/// Main application state
pub struct App {
    /// Risks, filter and view mode
    pub matrix: RiskMatrix,
    /// Selection over the sorted, filtered rows
    pub rows: RowCursor,
    /// Level column the keyboard cursor sits on
    pub level_cursor: RiskLevel,
    /// Risk whose description is being edited inline
    pub editing: Option<RiskId>,
    pub show_help: bool,
    pub status: StatusMessage,
    pub hit_areas: HitAreas,
    pub mouse_enabled: bool,
    pub tick_rate_ms: u64,
    pub should_quit: bool,
    /// Tick counter (drives the editing caret blink)
    pub tick: u64,
    /// Where the theme preference is saved; `None` disables saving
    pub prefs_path: Option<PathBuf>,
}

impl App {
    /// Create an app around an existing matrix.
    pub fn new(matrix: RiskMatrix) -> Self {
        let mut app = Self {
            matrix,
            rows: RowCursor::default(),
            level_cursor: RiskLevel::High,
            editing: None,
            show_help: false,
            status: StatusMessage::with_auto_clear(Duration::from_secs(STATUS_CLEAR_SECS)),
            hit_areas: HitAreas::default(),
            mouse_enabled: true,
            tick_rate_ms: crate::config::DEFAULT_TICK_RATE_MS,
            should_quit: false,
            tick: 0,
            prefs_path: TuiPreferences::config_path(),
        };
        app.refresh(None);
        app
    }

    /// Build the app from resolved `view` settings: seed risks, start filter
    /// and view, mouse and tick rate.
    pub fn from_config(config: &ViewConfig) -> Self {
        let mut app = Self::new(config.initial_matrix());
        app.mouse_enabled = config.app.tui.mouse_enabled;
        app.tick_rate_ms = config.app.tui.tick_rate_ms;
        app
    }

    /// Derived rows and counts for the current state.
    pub fn view(&self) -> DerivedView<'_> {
        self.matrix.derive()
    }

    /// Risk under the row cursor.
    pub fn selected_risk(&self) -> Option<&Risk> {
        self.matrix.derive().row(self.rows.selected)
    }

    pub fn selected_id(&self) -> Option<RiskId> {
        self.selected_risk().map(|risk| risk.id)
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Recompute the row count after a change, keeping the cursor on
    /// `follow` when that risk is still visible.
    fn refresh(&mut self, follow: Option<RiskId>) {
        let view = self.matrix.derive();
        let position = follow.and_then(|id| view.position_of(id));
        self.rows.set_total(view.len());
        if let Some(position) = position {
            self.rows.set_selected(position);
        }
        self.sync_level_cursor();
    }

    /// Park the level cursor on the selected risk's current level.
    fn sync_level_cursor(&mut self) {
        if let Some(level) = self.selected_risk().map(|risk| risk.level) {
            self.level_cursor = level;
        }
    }

    // ------------------------------------------------------------------
    // Row navigation
    // ------------------------------------------------------------------

    pub fn select_up(&mut self) {
        self.rows.select_prev();
        self.sync_level_cursor();
    }

    pub fn select_down(&mut self) {
        self.rows.select_next();
        self.sync_level_cursor();
    }

    pub fn page_up(&mut self) {
        self.rows.page_up();
        self.sync_level_cursor();
    }

    pub fn page_down(&mut self) {
        self.rows.page_down();
        self.sync_level_cursor();
    }

    pub fn select_first(&mut self) {
        self.rows.go_first();
        self.sync_level_cursor();
    }

    pub fn select_last(&mut self) {
        self.rows.go_last();
        self.sync_level_cursor();
    }

    /// Select a display row; out-of-range rows are ignored.
    pub fn select_row(&mut self, row: usize) {
        if row < self.rows.total {
            self.rows.set_selected(row);
            self.sync_level_cursor();
        }
    }

    // ------------------------------------------------------------------
    // Levels
    // ------------------------------------------------------------------

    pub fn level_left(&mut self) {
        self.level_cursor = self.level_cursor.prev();
    }

    pub fn level_right(&mut self) {
        self.level_cursor = self.level_cursor.next();
    }

    /// Apply the level under the level cursor to the selected risk.
    pub fn select_level(&mut self) {
        self.set_selected_level(self.level_cursor);
    }

    /// Set the selected risk's level.
    pub fn set_selected_level(&mut self, level: RiskLevel) {
        if let Some(id) = self.selected_id() {
            self.set_level(id, level);
        }
    }

    /// Level-change handler shared by keyboard and mouse.
    ///
    /// Unknown ids leave the matrix untouched.
    pub fn set_level(&mut self, id: RiskId, level: RiskLevel) {
        match self.matrix.set_level(id, level) {
            Ok(()) => {
                self.level_cursor = level;
                self.refresh(Some(id));
                if self.matrix.derive().position_of(id).is_none() {
                    self.status
                        .set(format!("Risk {id} set to {level} (hidden by filter)"));
                }
            }
            Err(err) => tracing::debug!("ignoring level change: {err}"),
        }
    }

    /// Bar click in the graph view.
    ///
    /// A bar stands for a level, not a risk, so no risk is changed; the
    /// status line reports the bar's count instead.
    pub fn click_bar(&mut self, level: RiskLevel) {
        let count = self.matrix.derive().counts.get(level);
        tracing::debug!(%level, count, "graph bar clicked");
        self.status.set(format!("{level}: {count} risk(s)"));
    }

    // ------------------------------------------------------------------
    // Filter and view
    // ------------------------------------------------------------------

    pub fn set_filter(&mut self, filter: LevelFilter) {
        let follow = self.selected_id();
        self.matrix.set_filter(filter);
        self.refresh(follow);
        self.status.set(format!("Filter: {filter}"));
    }

    pub fn next_filter(&mut self) {
        self.set_filter(self.matrix.filter().next());
    }

    pub fn prev_filter(&mut self) {
        self.set_filter(self.matrix.filter().prev());
    }

    pub fn clear_filter(&mut self) {
        self.set_filter(LevelFilter::All);
    }

    pub fn toggle_view(&mut self) {
        self.stop_editing();
        let mode = self.matrix.toggle_view();
        self.status.set(format!("{} view", mode.label()));
    }

    pub fn is_matrix_view(&self) -> bool {
        self.matrix.view_mode() == ViewMode::Matrix
    }

    // ------------------------------------------------------------------
    // Add / remove
    // ------------------------------------------------------------------

    /// Append a blank risk and select it when the filter shows it.
    pub fn add_risk(&mut self) {
        let id = match self.matrix.add_risk() {
            Ok(id) => id,
            Err(err) => {
                tracing::warn!("cannot add risk: {err}");
                self.status.set(err.to_string());
                return;
            }
        };
        self.refresh(Some(id));
        if self.matrix.derive().position_of(id).is_some() {
            self.status.set(format!("Added risk {id}"));
        } else {
            self.status
                .set(format!("Added risk {id} (hidden by filter)"));
        }
    }

    /// Remove the selected risk.
    pub fn remove_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        match self.matrix.remove_risk(id) {
            Ok(_) => {
                if self.editing == Some(id) {
                    self.editing = None;
                }
                self.refresh(None);
                self.status.set(format!("Removed risk {id}"));
            }
            Err(err) => tracing::debug!("ignoring removal: {err}"),
        }
    }

    // ------------------------------------------------------------------
    // Inline description editing
    // ------------------------------------------------------------------

    pub fn start_editing(&mut self) {
        if let Some(id) = self.selected_id() {
            self.editing = Some(id);
        }
    }

    pub fn stop_editing(&mut self) {
        self.editing = None;
    }

    /// Append a character to the edited description.
    pub fn edit_push(&mut self, c: char) {
        self.edit_with(|text| text.push(c));
    }

    /// Delete the last character of the edited description.
    pub fn edit_pop(&mut self) {
        self.edit_with(|text| {
            text.pop();
        });
    }

    fn edit_with(&mut self, change: impl FnOnce(&mut String)) {
        let Some(id) = self.editing else {
            return;
        };
        let Some(mut text) = self.matrix.risk(id).map(|risk| risk.description.clone()) else {
            self.editing = None;
            return;
        };
        change(&mut text);
        if let Err(err) = self.matrix.set_description(id, text) {
            tracing::debug!("ignoring description change: {err}");
            self.editing = None;
        }
    }

    // ------------------------------------------------------------------
    // Chrome
    // ------------------------------------------------------------------

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Cycle dark -> light -> high-contrast and save the preference.
    pub fn cycle_theme(&mut self) {
        let theme_name = toggle_theme();
        let prefs = TuiPreferences {
            theme: theme_name.to_string(),
        };
        if let Some(path) = &self.prefs_path {
            if let Err(err) = prefs.save_to(path) {
                tracing::warn!("could not save theme preference: {err}");
            }
        }
        self.status.set(format!("Theme: {theme_name}"));
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        self.status.expire();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(RiskMatrix::from_entries([
            ("Risk 1", RiskLevel::High),
            ("Risk 2", RiskLevel::Medium),
            ("Risk 3", RiskLevel::Low),
            ("Risk 4", RiskLevel::High),
        ]))
    }

    fn ids(app: &App) -> Vec<u32> {
        app.view().sorted.iter().map(|risk| risk.id.get()).collect()
    }

    #[test]
    fn test_starts_on_first_sorted_row() {
        let app = app();
        assert_eq!(app.rows.total, 4);
        assert_eq!(app.selected_id(), Some(RiskId(1)));
        assert_eq!(app.level_cursor, RiskLevel::High);
    }

    #[test]
    fn test_level_cursor_follows_row() {
        let mut app = app();
        app.select_down();
        app.select_down();
        assert_eq!(app.selected_id(), Some(RiskId(2)));
        assert_eq!(app.level_cursor, RiskLevel::Medium);
    }

    #[test]
    fn test_select_level_keeps_cursor_on_moved_row() {
        let mut app = app();
        app.select_last();
        assert_eq!(app.selected_id(), Some(RiskId(3)));
        app.level_left();
        app.level_left();
        assert_eq!(app.level_cursor, RiskLevel::High);
        app.select_level();

        assert_eq!(ids(&app), vec![1, 3, 4, 2]);
        assert_eq!(app.selected_id(), Some(RiskId(3)));
        assert_eq!(app.rows.selected, 1);
    }

    #[test]
    fn test_set_level_unknown_id_is_ignored() {
        let mut app = app();
        let before = app.matrix.clone();
        app.set_level(RiskId(99), RiskLevel::Low);
        assert_eq!(app.matrix, before);
    }

    #[test]
    fn test_click_bar_reports_count_without_mutating() {
        let mut app = app();
        let before = app.matrix.clone();
        app.click_bar(RiskLevel::High);
        assert_eq!(app.matrix, before);
        assert_eq!(app.status.peek(), Some("High: 2 risk(s)"));
    }

    #[test]
    fn test_filter_cycle_and_clear() {
        let mut app = app();
        app.next_filter();
        assert_eq!(app.matrix.filter(), LevelFilter::Only(RiskLevel::High));
        assert_eq!(ids(&app), vec![1, 4]);
        app.prev_filter();
        assert_eq!(app.matrix.filter(), LevelFilter::All);
        app.prev_filter();
        assert_eq!(app.matrix.filter(), LevelFilter::Only(RiskLevel::Low));
        assert_eq!(app.rows.total, 1);
        app.clear_filter();
        assert_eq!(app.rows.total, 4);
    }

    #[test]
    fn test_filter_keeps_selection_when_visible() {
        let mut app = app();
        app.select_down();
        assert_eq!(app.selected_id(), Some(RiskId(4)));
        app.next_filter();
        assert_eq!(app.selected_id(), Some(RiskId(4)));
    }

    #[test]
    fn test_add_selects_new_row() {
        let mut app = app();
        app.add_risk();
        assert_eq!(app.matrix.len(), 5);
        assert_eq!(app.selected_id(), Some(RiskId(5)));
        assert_eq!(app.selected_risk().map(|r| r.level), Some(RiskLevel::Low));
    }

    #[test]
    fn test_cycle_theme_saves_preference() {
        let tmp = tempfile::TempDir::new().expect("tempdir");
        let path = tmp.path().join("preferences.json");
        let mut app = app();
        app.prefs_path = Some(path.clone());

        app.cycle_theme();
        let saved = TuiPreferences::load_from(&path).expect("preference written");
        assert_eq!(app.status.peek(), Some(format!("Theme: {}", saved.theme).as_str()));
        assert_eq!(TuiPreferences::resolve_theme(Some(saved.clone()), "dark"), saved.theme);
    }

    #[test]
    fn test_add_without_free_id_reports_error() {
        let matrix = RiskMatrix::with_risks(vec![Risk::new(
            RiskId(u32::MAX),
            "last",
            RiskLevel::High,
        )])
        .expect("unique ids");
        let mut app = App::new(matrix);
        let before = app.matrix.clone();
        app.add_risk();
        assert_eq!(app.matrix, before);
        assert!(app
            .status
            .peek()
            .is_some_and(|msg| msg.starts_with("No ids left")));
    }

    #[test]
    fn test_add_hidden_by_filter() {
        let mut app = app();
        app.set_filter(LevelFilter::Only(RiskLevel::High));
        app.add_risk();
        assert_eq!(app.matrix.len(), 5);
        assert_eq!(app.rows.total, 2);
        assert!(app.status.peek().is_some_and(|m| m.contains("hidden")));
    }

    #[test]
    fn test_remove_selected_clamps_cursor() {
        let mut app = app();
        app.select_last();
        app.remove_selected();
        assert_eq!(app.matrix.len(), 3);
        assert_eq!(app.rows.selected, 2);
        assert!(app.matrix.risk(RiskId(3)).is_none());
    }

    #[test]
    fn test_remove_on_empty_is_noop() {
        let mut app = App::new(RiskMatrix::new());
        app.remove_selected();
        assert!(app.matrix.is_empty());
        assert!(!app.status.has_message());
    }

    #[test]
    fn test_inline_editing() {
        let mut app = app();
        app.start_editing();
        assert_eq!(app.editing, Some(RiskId(1)));
        app.edit_pop();
        for c in "0!".chars() {
            app.edit_push(c);
        }
        assert_eq!(
            app.matrix.risk(RiskId(1)).map(|r| r.description.as_str()),
            Some("Risk 0!")
        );
        app.stop_editing();
        app.edit_push('x');
        assert_eq!(
            app.matrix.risk(RiskId(1)).map(|r| r.description.as_str()),
            Some("Risk 0!")
        );
    }

    #[test]
    fn test_removing_edited_risk_stops_editing() {
        let mut app = app();
        app.start_editing();
        app.remove_selected();
        assert!(!app.is_editing());
    }

    #[test]
    fn test_from_config_applies_start_state() {
        let mut config = ViewConfig::default();
        config.filter = Some(LevelFilter::Only(RiskLevel::Medium));
        config.view_mode = Some(ViewMode::Graph);
        config.app.tui.mouse_enabled = false;

        let app = App::from_config(&config);
        assert_eq!(app.matrix.len(), 6);
        assert_eq!(app.rows.total, 2);
        assert!(!app.is_matrix_view());
        assert!(!app.mouse_enabled);
    }

    #[test]
    fn test_hit_areas() {
        let areas = HitAreas {
            rows: Rect::new(2, 5, 40, 4),
            row_offset: 3,
            level_columns: [
                Rect::new(20, 4, 8, 5),
                Rect::new(29, 4, 8, 5),
                Rect::new(38, 4, 4, 5),
            ],
            bars: vec![(RiskLevel::Low, Rect::new(0, 0, 3, 3))],
        };
        assert_eq!(areas.row_at(Position::new(10, 6)), Some(4));
        assert_eq!(areas.row_at(Position::new(10, 4)), None);
        assert_eq!(areas.level_at(30), Some(RiskLevel::Medium));
        assert_eq!(areas.level_at(28), None);
        assert_eq!(areas.bar_at(Position::new(1, 1)), Some(RiskLevel::Low));
        assert_eq!(areas.bar_at(Position::new(5, 1)), None);
    }
}
