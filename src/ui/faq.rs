//! FAQ view: accordion-style question list.

use crate::app::App;
use crate::state::FAQ_ITEMS;
use crate::theme;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the FAQ view
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let [list_area, hint_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(4)]).areas(area);

    render_accordion(frame, app, list_area);
    render_hint_card(frame, hint_area);
}

fn render_accordion(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::BORDER_FOCUSED))
        .title(" Frequently asked questions ")
        .title_bottom(Line::from(" [Enter] Expand/Collapse ").centered());

    let mut lines: Vec<Line> = Vec::new();
    for (idx, entry) in FAQ_ITEMS.iter().enumerate() {
        let selected = idx == app.faq_index;
        let expanded = app.faq_expanded == Some(idx);

        let chevron = if expanded { "▼ " } else { "▶ " };
        let question_style = if selected {
            Style::default()
                .fg(theme::ROW_SELECTED_FG)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme::TEXT_PRIMARY)
        };

        lines.push(Line::from(vec![
            Span::styled(chevron, Style::default().fg(theme::ACCENT_PRIMARY)),
            Span::styled(entry.question, question_style),
        ]));

        if expanded {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("  {}", entry.answer),
                Style::default().fg(theme::TEXT_SECONDARY),
            )));
        }
        lines.push(Line::from(""));
    }

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
        area,
    );
}

fn render_hint_card(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::BORDER_DEFAULT))
        .title(" Didn't find an answer? ");

    let hint = Paragraph::new(
        "Try generating a config and testing it on your device. Press [2] to open the generator.",
    )
    .style(Style::default().fg(theme::TEXT_SECONDARY))
    .wrap(Wrap { trim: true })
    .block(block);

    frame.render_widget(hint, area);
}
