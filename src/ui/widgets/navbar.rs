//! Header navigation bar with section tabs.

use crate::app::App;
use crate::state::Section;
use crate::theme;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

const SECTIONS: [Section; 3] = [Section::Home, Section::Generator, Section::Faq];

/// Render the top navigation bar: app title on the left, section tabs on
/// the right.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme::BORDER_DEFAULT));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [title_area, tabs_area] =
        Layout::horizontal([Constraint::Min(24), Constraint::Length(36)]).areas(inner);

    let title = Line::from(vec![
        Span::styled(
            " ⬢ ",
            Style::default()
                .fg(theme::ACCENT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "VPN Config Generator",
            Style::default()
                .fg(theme::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), title_area);

    let selected = SECTIONS
        .iter()
        .position(|s| *s == app.section)
        .unwrap_or_default();

    let titles: Vec<Line> = SECTIONS
        .iter()
        .enumerate()
        .map(|(i, section)| Line::from(format!("[{}] {}", i + 1, section.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(theme::TEXT_SECONDARY))
        .highlight_style(
            Style::default()
                .fg(theme::ACCENT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::styled("│", Style::default().fg(theme::BORDER_DEFAULT)));

    frame.render_widget(tabs, tabs_area);
}
