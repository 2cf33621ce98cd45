//! Event handling for the TUI.
//!
//! Polls crossterm for key and mouse events and maps them onto
//! [`App`](super::App) operations.

pub mod mouse;

use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent,
};
use std::time::Duration;

pub use mouse::handle_mouse_event;

/// Application event
#[derive(Debug)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Mouse event
    Mouse(MouseEvent),
    /// Terminal tick (status expiry, caret blink)
    Tick,
}

/// Event handler
pub struct EventHandler {
    /// Tick rate in milliseconds
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler
    pub const fn new(tick_rate: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate),
        }
    }

    /// Poll for the next event
    pub fn next(&self) -> Result<Event, std::io::Error> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                CrosstermEvent::Key(key) => Ok(Event::Key(key)),
                CrosstermEvent::Mouse(mouse) => Ok(Event::Mouse(mouse)),
                // Resizes only need the redraw every loop iteration does
                _ => Ok(Event::Tick),
            }
        } else {
            Ok(Event::Tick)
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_TICK_RATE_MS)
    }
}

/// Handle key events and update app state
pub fn handle_key_event(app: &mut super::App, key: KeyEvent) {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // Inline editor swallows everything until it is closed
    if app.is_editing() {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => app.stop_editing(),
            KeyCode::Backspace => app.edit_pop(),
            KeyCode::Char(c) => app.edit_push(c),
            _ => {}
        }
        return;
    }

    if app.show_help {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q' | '?') => app.toggle_help(),
            _ => {}
        }
        return;
    }

    // Global key bindings
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Char('t') => app.cycle_theme(),
        KeyCode::Char('f') => app.next_filter(),
        KeyCode::Char('F') => app.prev_filter(),
        KeyCode::Char('0') => app.clear_filter(),
        KeyCode::Char('g') | KeyCode::Tab => app.toggle_view(),
        _ => {}
    }

    if app.is_matrix_view() {
        handle_matrix_keys(app, key);
    }
}

/// Row, level and editing keys of the matrix view.
fn handle_matrix_keys(app: &mut super::App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.select_up(),
        KeyCode::Down | KeyCode::Char('j') => app.select_down(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::Home => app.select_first(),
        KeyCode::End => app.select_last(),
        KeyCode::Left | KeyCode::Char('h') => app.level_left(),
        KeyCode::Right | KeyCode::Char('l') => app.level_right(),
        KeyCode::Char(' ') | KeyCode::Enter => app.select_level(),
        KeyCode::Char('1') => app.set_selected_level(crate::model::RiskLevel::High),
        KeyCode::Char('2') => app.set_selected_level(crate::model::RiskLevel::Medium),
        KeyCode::Char('3') => app.set_selected_level(crate::model::RiskLevel::Low),
        KeyCode::Char('e' | 'i') => app.start_editing(),
        KeyCode::Char('a') => app.add_risk(),
        KeyCode::Char('d') | KeyCode::Delete => app.remove_selected(),
        _ => {}
    }
}
