//! Generator view: protocol selection and the rendered config preview.

use crate::app::App;
use crate::generator::export;
use crate::state::{ALL_PROTOCOLS, PROTOCOLS};
use crate::theme;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, List, ListItem, ListState, Paragraph, Scrollbar, ScrollbarOrientation,
        ScrollbarState, Wrap,
    },
    Frame,
};

/// Render the generator view
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let [selection_area, preview_area] =
        Layout::horizontal([Constraint::Length(44), Constraint::Min(30)]).areas(area);

    render_protocol_list(frame, app, selection_area);
    render_preview(frame, app, preview_area);
}

fn render_protocol_list(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::BORDER_FOCUSED))
        .title(" Choose a protocol ")
        .title_bottom(Line::from(" [Enter] Generate ").centered());

    let items: Vec<ListItem> = ALL_PROTOCOLS
        .iter()
        .enumerate()
        .map(|(idx, protocol)| {
            let info = &PROTOCOLS[idx];
            let marker = if idx == app.protocol_index {
                "(•) "
            } else {
                "( ) "
            };
            let lines = vec![
                Line::from(vec![
                    Span::styled(marker, Style::default().fg(theme::ACCENT_PRIMARY)),
                    Span::styled(
                        protocol.to_string(),
                        Style::default()
                            .fg(theme::TEXT_PRIMARY)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(Span::styled(
                    format!("    {}", info.description),
                    Style::default().fg(theme::TEXT_SECONDARY),
                )),
                Line::from(vec![
                    Span::raw("    "),
                    Span::styled(
                        format!(" {} ", info.speed),
                        Style::default()
                            .fg(Color::Black)
                            .bg(theme::ACCENT_SECONDARY),
                    ),
                    Span::raw(" "),
                    Span::styled(
                        format!(" {} ", info.security),
                        Style::default().fg(Color::Black).bg(theme::SUCCESS),
                    ),
                ]),
                Line::from(""),
            ];
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(theme::ROW_SELECTED_BG)
            .add_modifier(Modifier::BOLD),
    );

    let mut state = ListState::default().with_selected(Some(app.protocol_index));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_preview(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(generated) = app.generated.clone() else {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::BORDER_DEFAULT))
            .title(" Preview ");
        let hint = Paragraph::new(vec![
            Line::from(""),
            Line::from("Pick a protocol and press Enter").centered(),
            Line::from("to generate an unlimited VPN config.").centered(),
        ])
        .style(Style::default().fg(theme::TEXT_SECONDARY))
        .wrap(Wrap { trim: true })
        .block(block);
        frame.render_widget(hint, area);
        return;
    };

    let title = format!(" {} - Ready! ", generated.protocol);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::SUCCESS))
        .title(Span::styled(
            title,
            Style::default().fg(theme::SUCCESS).add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Line::from(" [s] Save  [c] Copy  [PgUp/PgDn] Scroll ").centered());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let content_area = Layout::vertical([
        Constraint::Length(1), // Suggested filename
        Constraint::Min(1),    // Config text
    ])
    .split(inner);

    // Highlighted config text with scrolling
    let lines: Vec<Line> = generated.text.lines().map(highlight_config_line).collect();
    let total_lines = lines.len();

    // Keep the scroll offset within the content
    let max_scroll = total_lines.saturating_sub(content_area[1].height as usize);
    app.preview_scroll = app
        .preview_scroll
        .min(u16::try_from(max_scroll).unwrap_or(u16::MAX));

    let filename = export::filename_for(generated.protocol);
    let scroll_info = format!(" (line {}/{})", app.preview_scroll + 1, total_lines.max(1));
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("File: ", Style::default().fg(Color::DarkGray)),
            Span::styled(filename, Style::default().fg(theme::TEXT_SECONDARY)),
            Span::styled(scroll_info, Style::default().fg(Color::DarkGray)),
        ])),
        content_area[0],
    );

    let paragraph = Paragraph::new(lines)
        .style(Style::default().fg(theme::TEXT_PRIMARY))
        .scroll((app.preview_scroll, 0));
    frame.render_widget(paragraph, content_area[1]);

    // Scrollbar on the right border
    let scrollbar = Scrollbar::default()
        .orientation(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("↑"))
        .end_symbol(Some("↓"))
        .style(Style::default().fg(theme::NORD_POLAR_NIGHT_4))
        .thumb_style(Style::default().fg(theme::ACCENT_PRIMARY));

    let mut scrollbar_state = ScrollbarState::new(max_scroll).position(app.preview_scroll as usize);

    let scroll_area = Rect {
        x: area.right().saturating_sub(1),
        y: content_area[1].y,
        width: 1,
        height: content_area[1].height,
    };

    frame.render_stateful_widget(scrollbar, scroll_area, &mut scrollbar_state);
}

/// Apply syntax highlighting to config lines
fn highlight_config_line(line: &str) -> Line<'static> {
    let line = line.to_string();
    let trimmed = line.trim();

    // Comments
    if trimmed.starts_with('#') || trimmed.starts_with(';') {
        return Line::from(Span::styled(line, Style::default().fg(Color::DarkGray)));
    }

    // Section headers [Interface], [Peer], etc.
    if trimmed.starts_with('[') && trimmed.ends_with(']') {
        return Line::from(Span::styled(
            line,
            Style::default()
                .fg(theme::NORD_YELLOW)
                .add_modifier(Modifier::BOLD),
        ));
    }

    // Key = Value and key=value pairs
    if let Some(eq_pos) = line.find('=') {
        let (key, rest) = line.split_at(eq_pos);
        let value = &rest[1..]; // Skip the '='

        return Line::from(vec![
            Span::styled(key.to_string(), Style::default().fg(theme::NORD_FROST_2)),
            Span::styled("=", Style::default().fg(Color::DarkGray)),
            Span::styled(value.to_string(), Style::default().fg(theme::TEXT_PRIMARY)),
        ]);
    }

    // OpenVPN directives and strongSwan stanza openers
    if !trimmed.is_empty() {
        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let directive = parts[0];

        let known_directives = [
            "client",
            "dev",
            "proto",
            "remote",
            "resolv-retry",
            "nobind",
            "persist-key",
            "persist-tun",
            "cipher",
            "auth",
            "key-direction",
            "verb",
            "conn",
            "config",
        ];

        if known_directives.contains(&directive.to_lowercase().as_str()) {
            if parts.len() > 1 {
                return Line::from(vec![
                    Span::styled(
                        directive.to_string(),
                        Style::default().fg(theme::NORD_FROST_2),
                    ),
                    Span::raw(" "),
                    Span::styled(
                        parts[1].to_string(),
                        Style::default().fg(theme::TEXT_PRIMARY),
                    ),
                ]);
            }
            return Line::from(Span::styled(line, Style::default().fg(theme::NORD_FROST_2)));
        }
    }

    // Inline cert/key placeholder tags like <ca> and </key>
    if trimmed.starts_with('<') && trimmed.ends_with('>') {
        return Line::from(Span::styled(line, Style::default().fg(theme::NORD_PURPLE)));
    }

    Line::from(Span::styled(line, Style::default().fg(theme::TEXT_PRIMARY)))
}
