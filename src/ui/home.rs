//! Landing/overview view: hero text, highlight cards and the protocol grid.

use crate::app::App;
use crate::state::{ALL_PROTOCOLS, PROTOCOLS};
use crate::theme;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the home view
pub fn render(frame: &mut Frame, _app: &App, area: Rect) {
    let [hero, highlights, grid] = Layout::vertical([
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Min(0),
    ])
    .areas(area);

    render_hero(frame, hero);
    render_highlights(frame, highlights);
    render_protocol_grid(frame, grid);
}

fn render_hero(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "VPN config generator for every protocol",
            Style::default()
                .fg(theme::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(Span::styled(
            "Create unlimited VPN configs in seconds. OpenVPN, WireGuard, IKEv2 and IPSec.",
            Style::default().fg(theme::TEXT_SECONDARY),
        ))
        .centered(),
        Line::from(Span::styled(
            "Works on every device. Forever.",
            Style::default().fg(theme::TEXT_SECONDARY),
        ))
        .centered(),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_highlights(frame: &mut Frame, area: Rect) {
    let cards: [(&str, &str); 3] = [
        ("∞ Unlimited", "No limits on traffic, time or devices"),
        ("⚡ Fast", "A config in a couple of keypresses"),
        ("🛡 Secure", "Every protocol uses modern AES-256 encryption"),
    ];

    let columns = Layout::horizontal([
        Constraint::Percentage(33),
        Constraint::Percentage(34),
        Constraint::Percentage(33),
    ])
    .split(area);

    for ((title, text), column) in cards.iter().zip(columns.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::BORDER_DEFAULT))
            .title(Span::styled(
                format!(" {title} "),
                Style::default()
                    .fg(theme::ACCENT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ));
        let paragraph = Paragraph::new(*text)
            .style(Style::default().fg(theme::TEXT_SECONDARY))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(paragraph, *column);
    }
}

fn render_protocol_grid(frame: &mut Frame, area: Rect) {
    let rows = Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)]).split(area);

    for (row_idx, row_area) in rows.iter().enumerate() {
        let columns =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(*row_area);

        for (col_idx, column) in columns.iter().enumerate() {
            let idx = row_idx * 2 + col_idx;
            render_protocol_card(frame, idx, *column);
        }
    }
}

fn render_protocol_card(frame: &mut Frame, idx: usize, area: Rect) {
    let protocol = ALL_PROTOCOLS[idx];
    let info = &PROTOCOLS[idx];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::BORDER_DEFAULT))
        .title(Span::styled(
            format!(" {protocol} "),
            Style::default()
                .fg(theme::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ));

    let mut lines = vec![
        Line::from(Span::styled(
            info.description,
            Style::default().fg(theme::TEXT_SECONDARY),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Speed:    ", Style::default().fg(theme::TEXT_SECONDARY)),
            Span::styled(info.speed, Style::default().fg(theme::ACCENT_SECONDARY)),
        ]),
        Line::from(vec![
            Span::styled("Security: ", Style::default().fg(theme::TEXT_SECONDARY)),
            Span::styled(info.security, Style::default().fg(theme::SUCCESS)),
        ]),
        Line::from(""),
    ];
    for feature in &info.features {
        lines.push(Line::from(vec![
            Span::styled("✓ ", Style::default().fg(theme::SUCCESS)),
            Span::styled(*feature, Style::default().fg(theme::TEXT_PRIMARY)),
        ]));
    }

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
        area,
    );
}
