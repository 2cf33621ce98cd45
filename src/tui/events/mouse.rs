//! Mouse event handlers.
//!
//! Clicks are resolved against the regions the last frame recorded in
//! [`HitAreas`](crate::tui::app::HitAreas).

use crate::tui::App;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    if !app.mouse_enabled {
        return;
    }

    match mouse.kind {
        MouseEventKind::ScrollUp if app.is_matrix_view() => app.select_up(),
        MouseEventKind::ScrollDown if app.is_matrix_view() => app.select_down(),
        MouseEventKind::Down(MouseButton::Left) => {
            let pos = Position::new(mouse.column, mouse.row);

            // Close overlays on click
            if app.show_help {
                app.toggle_help();
                return;
            }

            if app.is_matrix_view() {
                handle_table_click(app, pos);
            } else if let Some(level) = app.hit_areas.bar_at(pos) {
                app.click_bar(level);
            }
        }
        _ => {}
    }
}

/// A click on a row selects it; a click on one of its level cells also
/// sets that level.
fn handle_table_click(app: &mut App, pos: Position) {
    let Some(row) = app.hit_areas.row_at(pos) else {
        return;
    };
    if row >= app.rows.total {
        return;
    }
    app.stop_editing();
    app.select_row(row);

    if let Some(level) = app.hit_areas.level_at(pos.x) {
        app.set_selected_level(level);
    }
}
