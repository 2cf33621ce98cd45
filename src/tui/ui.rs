//! Main UI rendering and the terminal event loop.

use super::app::App;
use super::events::{handle_key_event, handle_mouse_event, Event, EventHandler};
use super::state::ListNavigation;
use super::theme::{colors, render_footer_hints, set_theme, FooterHints, Styles, Theme};
use super::views;
use super::widgets::{check_terminal_size, render_size_warning, MIN_HEIGHT, MIN_WIDTH};
use crate::config::TuiPreferences;
use crate::error::Result;
use crate::model::{LevelFilter, ViewMode};
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Tabs},
};
use std::io::{stdout, Write};

/// Run the TUI application until the user quits.
///
/// `theme` is the configured theme; a saved preference from an earlier
/// session takes precedence over it.
pub fn run_tui(app: &mut App, theme: &str) -> Result<()> {
    let saved = app.prefs_path.as_deref().and_then(TuiPreferences::load_from);
    set_theme(Theme::from_name(&TuiPreferences::resolve_theme(saved, theme)));

    enable_raw_mode()?;
    let result = run_in_alternate_screen(app);

    // Restore terminal even when setup or the loop failed
    let restored = restore_terminal(&mut stdout(), app.mouse_enabled);
    result?;
    restored?;
    Ok(())
}

fn run_in_alternate_screen(app: &mut App) -> Result<()> {
    let mut stdout = stdout();
    if app.mouse_enabled {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    event_loop(&mut terminal, app)
}

/// Undo raw mode, the alternate screen and mouse capture. Every step runs;
/// the first failure is reported.
fn restore_terminal<W: Write>(out: &mut W, mouse_enabled: bool) -> std::io::Result<()> {
    let raw = disable_raw_mode();
    let screen = if mouse_enabled {
        execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show)
    } else {
        execute!(out, LeaveAlternateScreen, Show)
    };
    raw.and(screen)
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let events = EventHandler::new(app.tick_rate_ms);

    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            Event::Key(key) => handle_key_event(app, key),
            Event::Mouse(mouse) => handle_mouse_event(app, mouse),
            Event::Tick => app.on_tick(),
        }

        if app.should_quit {
            tracing::debug!(risks = app.matrix.len(), "leaving TUI");
            return Ok(());
        }
    }
}

/// Main render function
fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Check minimum terminal size
    if check_terminal_size(area.width, area.height).is_err() {
        render_size_warning(frame, area, MIN_WIDTH, MIN_HEIGHT);
        return;
    }

    // Main layout: header, filter bar, content, status bar, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(2), // Filter bar
            Constraint::Min(8),    // Content
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    render_filter_bar(frame, chunks[1], app.matrix.filter());

    match app.matrix.view_mode() {
        ViewMode::Matrix => views::render_matrix(frame, chunks[2], app),
        ViewMode::Graph => views::render_graph(frame, chunks[2], app),
    }

    render_status_bar(frame, chunks[3], app);
    render_footer(frame, chunks[4], app);

    if app.show_help {
        views::render_help_overlay(frame, area);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors();
    let mode = app.matrix.view_mode();
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" Risk Matrix ", Styles::header_title()),
        Span::styled("│ ", Style::default().fg(scheme.muted)),
        Span::styled(
            format!("{} view", mode.label()),
            Style::default().fg(scheme.text),
        ),
        Span::styled(" │ ", Style::default().fg(scheme.muted)),
        Span::styled("Filter: ", Style::default().fg(scheme.text_muted)),
        Span::styled(
            app.matrix.filter().label(),
            Style::default().fg(scheme.accent).bold(),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(scheme.border)),
    );
    frame.render_widget(header, area);
}

fn render_filter_bar(frame: &mut Frame, area: Rect, filter: LevelFilter) {
    let scheme = colors();
    let titles: Vec<Line> = LevelFilter::CHOICES
        .iter()
        .map(|choice| {
            let is_active = *choice == filter;
            let style = match (is_active, choice.level()) {
                (true, Some(level)) => Styles::level(level).bold(),
                (true, None) => Style::default().fg(scheme.accent).bold(),
                (false, _) => Style::default().fg(scheme.text_muted),
            };
            Line::from(Span::styled(format!(" {} ", choice.label()), style))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(scheme.border)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::UNDERLINED))
        .select(filter.position())
        .divider(Span::styled("│", Style::default().fg(scheme.muted)));

    frame.render_widget(tabs, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors();
    let view = app.view();

    let mut spans = Vec::new();
    for (level, count) in view.counts.iter() {
        spans.push(Span::styled(
            format!(" {}: ", level.label()),
            Style::default().fg(scheme.text_muted),
        ));
        spans.push(Span::styled(count.to_string(), Styles::level(level).bold()));
        spans.push(Span::styled(" │", Style::default().fg(scheme.muted)));
    }
    spans.push(Span::styled(
        format!(" Total: {}", view.counts.total()),
        Style::default().fg(scheme.text),
    ));
    if app.matrix.view_mode() == ViewMode::Matrix && !view.is_empty() {
        spans.push(Span::styled(
            format!(
                "  Row {}/{}",
                app.rows.selected() + 1,
                app.rows.total()
            ),
            Style::default().fg(scheme.text_muted),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    // Show status message if set, otherwise show mode-specific hints
    if let Some(msg) = app.status.peek() {
        let status_line = Line::from(vec![
            Span::styled("ℹ ", Style::default().fg(colors().accent)),
            Span::styled(msg.to_string(), Style::default().fg(colors().accent).bold()),
        ]);
        let footer = Paragraph::new(status_line).alignment(Alignment::Center);
        frame.render_widget(footer, area);
        return;
    }

    let hints = if app.is_editing() {
        FooterHints::editing()
    } else {
        match app.matrix.view_mode() {
            ViewMode::Matrix => FooterHints::matrix(),
            ViewMode::Graph => FooterHints::graph(),
        }
    };

    let footer = Paragraph::new(Line::from(render_footer_hints(&hints)))
        .alignment(Alignment::Center)
        .style(Style::default().fg(colors().text_muted));

    frame.render_widget(footer, area);
}
