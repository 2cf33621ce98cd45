//! Popup overlays drawn on top of the main layout.

use crate::tui::theme::colors;
use crate::tui::widgets::centered_rect;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Matrix",
        &[
            ("↑/↓ or j/k", "Move between risks"),
            ("PgUp/PgDn", "Move a page"),
            ("Home/End", "First / last risk"),
            ("←/→ or h/l", "Move the level cursor"),
            ("Space/Enter", "Set the level under the cursor"),
            ("1 / 2 / 3", "Set High / Medium / Low"),
            ("e or i", "Edit the description"),
            ("a", "Add a risk"),
            ("d or Del", "Remove the selected risk"),
        ],
    ),
    (
        "Views",
        &[
            ("f / F", "Next / previous filter"),
            ("0", "Show all levels"),
            ("g or Tab", "Toggle matrix / graph"),
            ("t", "Cycle theme"),
        ],
    ),
    (
        "Mouse",
        &[
            ("click row", "Select the risk"),
            ("click level", "Set the risk's level"),
            ("click bar", "Show the bar's count"),
        ],
    ),
    (
        "General",
        &[("?", "Toggle this help"), ("q / Esc", "Quit")],
    ),
];

pub fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 80, area);
    frame.render_widget(Clear, popup_area);

    let scheme = colors();
    let mut help_text = vec![
        Line::styled(
            "━━━ Keyboard Shortcuts ━━━",
            Style::default().fg(scheme.accent).bold(),
        ),
        Line::from(""),
    ];

    for (section, keys) in HELP_SECTIONS {
        help_text.push(Line::styled(
            *section,
            Style::default().fg(scheme.primary).bold(),
        ));
        for (key, desc) in *keys {
            help_text.push(Line::from(vec![
                Span::styled(format!("  {key:<14}"), Style::default().fg(scheme.accent)),
                Span::styled(*desc, Style::default().fg(scheme.text)),
            ]));
        }
        help_text.push(Line::from(""));
    }

    help_text.push(Line::styled(
        "Press ? or Esc to close",
        Style::default().fg(scheme.text_muted),
    ));

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .title_style(Style::default().fg(scheme.accent).bold())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(scheme.accent)),
        )
        .style(Style::default().fg(scheme.text));

    frame.render_widget(help, popup_area);
}
