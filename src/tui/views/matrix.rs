//! Matrix view: one table row per risk, one radio column per level.

use crate::model::{Risk, RiskLevel};
use crate::tui::app::{App, HitAreas};
use crate::tui::constants::{ID_COLUMN_WIDTH, LEVEL_COLUMN_WIDTH};
use crate::tui::theme::{colors, Styles};
use crate::tui::widgets::render_empty_state;
use ratatui::{
    prelude::*,
    widgets::{
        Block, Borders, Cell, HighlightSpacing, Row, Scrollbar, ScrollbarOrientation,
        ScrollbarState, Table, TableState,
    },
};

const HIGHLIGHT_SYMBOL: &str = "▶ ";
const COLUMN_SPACING: u16 = 1;

fn column_widths() -> [Constraint; 5] {
    [
        Constraint::Length(ID_COLUMN_WIDTH),
        Constraint::Fill(1),
        Constraint::Length(LEVEL_COLUMN_WIDTH),
        Constraint::Length(LEVEL_COLUMN_WIDTH),
        Constraint::Length(LEVEL_COLUMN_WIDTH),
    ]
}

/// Column rects inside the table's inner area, matching how the table lays
/// out its cells after the highlight symbol gutter.
fn column_rects(inner: Rect) -> [Rect; 5] {
    let gutter = Line::from(HIGHLIGHT_SYMBOL).width() as u16;
    let cells = Rect {
        x: inner.x.saturating_add(gutter),
        width: inner.width.saturating_sub(gutter),
        ..inner
    };
    let split = Layout::horizontal(column_widths())
        .spacing(COLUMN_SPACING)
        .split(cells);
    [split[0], split[1], split[2], split[3], split[4]]
}

fn description_cell(risk: &Risk, editing: bool, caret_on: bool) -> Cell<'static> {
    let scheme = colors();
    if editing {
        let caret = if caret_on { "▏" } else { " " };
        return Cell::from(Line::from(vec![
            Span::styled(risk.description.clone(), Style::default().fg(scheme.text)),
            Span::styled(caret, Style::default().fg(scheme.accent)),
        ]))
        .style(Style::default().bg(scheme.muted));
    }
    if risk.description.is_empty() {
        Cell::from(Span::styled(
            "(no description)",
            Style::default().fg(scheme.text_muted).italic(),
        ))
    } else {
        Cell::from(risk.description.clone())
    }
}

fn level_cell(risk: &Risk, level: RiskLevel, has_cursor: bool) -> Cell<'static> {
    let checked = risk.level == level;
    let marker = if checked { " (●)" } else { " ( )" };
    let mut style = if checked {
        Styles::level(level).bold()
    } else {
        Styles::text_muted()
    };
    if has_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Cell::from(marker).style(style)
}

pub fn render_matrix(frame: &mut Frame, area: Rect, app: &mut App) {
    let view = app.matrix.derive();
    let scheme = colors();

    if view.is_empty() {
        app.hit_areas = HitAreas::default();
        let hint = if app.matrix.is_empty() {
            "Press [a] to add a risk"
        } else {
            "Press [0] to clear the filter or [a] to add a risk"
        };
        render_empty_state(frame, area, "No risks to show", Some(hint));
        return;
    }

    let header = Row::new(
        ["ID", "Risk"]
            .into_iter()
            .map(|title| Cell::from(title).style(Style::default().fg(scheme.text).bold()))
            .chain(RiskLevel::ALL.into_iter().map(|level| {
                Cell::from(format!(" {}", level.label())).style(Styles::level(level).bold())
            })),
    )
    .height(1);

    let caret_on = app.tick % 2 == 0;
    let selected_row = app.rows.selected;
    let rows: Vec<Row> = view
        .sorted
        .iter()
        .enumerate()
        .map(|(row, risk)| {
            let is_selected = row == selected_row;
            let editing = app.editing == Some(risk.id);
            let mut cells = vec![
                Cell::from(risk.id.to_string()).style(Styles::text_muted()),
                description_cell(risk, editing, caret_on),
            ];
            cells.extend(RiskLevel::ALL.into_iter().map(|level| {
                level_cell(risk, level, is_selected && level == app.level_cursor)
            }));
            Row::new(cells)
        })
        .collect();

    let title = format!(" Risks ({}) ", view.len());
    let block = Block::default()
        .title(title)
        .title_style(Styles::header_title())
        .borders(Borders::ALL)
        .border_style(if app.is_editing() {
            Styles::border_focused()
        } else {
            Styles::border()
        });
    let inner = block.inner(area);

    let table = Table::new(rows, column_widths())
        .header(header)
        .block(block)
        .column_spacing(COLUMN_SPACING)
        .row_highlight_style(Styles::selected())
        .highlight_symbol(HIGHLIGHT_SYMBOL)
        .highlight_spacing(HighlightSpacing::Always);

    let mut state = TableState::default()
        .with_offset(app.rows.scroll_offset)
        .with_selected(Some(selected_row));

    let total = view.len();
    frame.render_stateful_widget(table, area, &mut state);

    // Save scroll offset for next frame (stable viewport)
    app.rows.scroll_offset = state.offset();

    let columns = column_rects(inner);
    app.hit_areas = HitAreas {
        rows: Rect {
            y: inner.y.saturating_add(1),
            height: inner.height.saturating_sub(1),
            ..inner
        },
        row_offset: state.offset(),
        level_columns: [columns[2], columns[3], columns[4]],
        bars: Vec::new(),
    };

    if total > usize::from(inner.height.saturating_sub(1)) {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .thumb_style(Style::default().fg(scheme.accent))
            .track_style(Style::default().fg(scheme.muted))
            .begin_symbol(Some("▲"))
            .end_symbol(Some("▼"));

        let mut scrollbar_state = ScrollbarState::new(total).position(state.offset());

        frame.render_stateful_widget(
            scrollbar,
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut scrollbar_state,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::RiskMatrix;
    use crate::model::LevelFilter;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(app: &mut App) -> String {
        let backend = TestBackend::new(70, 12);
        let mut terminal = Terminal::new(backend).expect("test terminal");
        terminal
            .draw(|frame| render_matrix(frame, frame.area(), app))
            .expect("draw");
        let buffer = terminal.backend().buffer().clone();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app() -> App {
        App::new(RiskMatrix::from_entries([
            ("Risk 1", RiskLevel::High),
            ("Risk 2", RiskLevel::Medium),
            ("Risk 3", RiskLevel::Low),
            ("Risk 4", RiskLevel::High),
        ]))
    }

    #[test]
    fn test_rows_render_in_level_order() {
        let mut app = app();
        let screen = draw(&mut app);
        let pos = |needle: &str| screen.find(needle).expect("row rendered");
        assert!(pos("Risk 1") < pos("Risk 4"));
        assert!(pos("Risk 4") < pos("Risk 2"));
        assert!(pos("Risk 2") < pos("Risk 3"));
        assert!(screen.contains("Risks (4)"));
        assert!(screen.contains("Medium"));
    }

    #[test]
    fn test_each_row_has_one_checked_marker() {
        let mut app = app();
        let screen = draw(&mut app);
        let rows: Vec<&str> = screen.lines().filter(|l| l.contains("(●)")).collect();
        assert_eq!(rows.len(), 4);
        for line in rows {
            assert_eq!(line.matches("(●)").count(), 1, "{line}");
            assert_eq!(line.matches("( )").count(), 2, "{line}");
        }
    }

    #[test]
    fn test_hit_areas_line_up_with_rows() {
        let mut app = app();
        draw(&mut app);
        let areas = app.hit_areas.clone();
        // border + header
        assert_eq!(areas.rows.y, 2);
        assert_eq!(areas.row_offset, 0);
        let [high, medium, low] = areas.level_columns;
        assert_eq!(high.width, LEVEL_COLUMN_WIDTH);
        assert!(high.right() < medium.x && medium.right() < low.x);
        // Last level column ends at the table's inner right edge
        assert_eq!(low.right(), 69);
    }

    #[test]
    fn test_empty_filter_shows_placeholder() {
        let mut app = App::new(RiskMatrix::from_entries([("Risk 1", RiskLevel::High)]));
        app.set_filter(LevelFilter::Only(RiskLevel::Low));
        let screen = draw(&mut app);
        assert!(screen.contains("No risks to show"));
        assert_eq!(app.hit_areas.rows, Rect::default());
    }

    #[test]
    fn test_blank_description_placeholder() {
        let mut app = app();
        app.add_risk();
        let screen = draw(&mut app);
        assert!(screen.contains("(no description)"));
    }
}
