//! Graph view: risk counts per level as a bar chart.

use crate::model::RiskLevel;
use crate::tui::app::{App, HitAreas};
use crate::tui::constants::{BAR_GAP, MAX_BAR_WIDTH};
use crate::tui::theme::{colors, level_badge, Styles};
use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
};

/// Width of each bar so that all levels fit in `inner_width`.
fn bar_width(inner_width: u16) -> u16 {
    let count = RiskLevel::COUNT as u16;
    (inner_width.saturating_sub(BAR_GAP * (count - 1)) / count).clamp(1, MAX_BAR_WIDTH)
}

pub fn render_graph(frame: &mut Frame, area: Rect, app: &mut App) {
    let view = app.matrix.derive();
    let scheme = colors();

    let chunks = Layout::vertical([Constraint::Min(5), Constraint::Length(1)]).split(area);

    let block = Block::default()
        .title(format!(" Risks by Level ({}) ", view.counts.total()))
        .title_style(Styles::header_title())
        .borders(Borders::ALL)
        .border_style(Styles::border());
    let inner = block.inner(chunks[0]);
    let width = bar_width(inner.width);

    let bars: Vec<Bar> = view
        .counts
        .iter()
        .map(|(level, count)| {
            Bar::default()
                .value(count as u64)
                .label(Line::from(level.label()))
                .style(Styles::level(level))
                .value_style(Styles::level_badge(level))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .bar_width(width)
        .bar_gap(BAR_GAP)
        .label_style(Style::default().fg(scheme.text))
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, chunks[0]);

    let greatest = Paragraph::new(Line::from(vec![
        Span::styled(" Greatest risk: ", Style::default().fg(scheme.text).bold()),
        level_badge(view.greatest),
    ]));
    frame.render_widget(greatest, chunks[1]);

    let stride = width + BAR_GAP;
    let bar_rects = RiskLevel::ALL
        .into_iter()
        .zip(0u16..)
        .map(|(level, i)| {
            let rect = Rect::new(inner.x + i * stride, inner.y, width, inner.height);
            (level, rect.intersection(inner))
        })
        .collect();

    app.hit_areas = HitAreas {
        bars: bar_rects,
        ..HitAreas::default()
    };
}
