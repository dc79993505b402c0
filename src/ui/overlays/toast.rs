//! Toast notification overlay

use crate::app::App;
use crate::theme;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render toast notification
pub fn render(frame: &mut Frame, app: &App) {
    if let Some(ref toast) = app.toast {
        let area = frame.area();
        let width = (area.width / 3).clamp(30, 60);

        // Dynamic height based on text length + vertical padding
        let inner_width = width.saturating_sub(4) as usize;
        let text_len = toast.message.len();
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            clippy::cast_precision_loss
        )]
        let text_lines = if inner_width > 0 {
            (text_len as f64 / inner_width as f64).ceil() as u16
        } else {
            1
        };

        let height = (text_lines + 2).max(3);

        // Bottom center, just above the footer
        let toast_area = Rect {
            x: (area.width / 2).saturating_sub(width / 2),
            y: area.height.saturating_sub(height + 2),
            width,
            height,
        };

        frame.render_widget(Clear, toast_area);

        let (title, color) = match toast.toast_type {
            crate::state::ToastType::Info => (" INFO ", theme::ACCENT_PRIMARY),
            crate::state::ToastType::Success => (" SUCCESS ", theme::SUCCESS),
            crate::state::ToastType::Warning => (" WARNING ", theme::WARNING),
            crate::state::ToastType::Error => (" ERROR ", theme::ERROR),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(Span::styled(
                title,
                Style::default()
                    .fg(Color::Black)
                    .bg(color)
                    .add_modifier(Modifier::BOLD),
            ));

        let inner_area = block.inner(toast_area);
        frame.render_widget(block, toast_area);

        let vertical_chunks = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(text_lines),
            Constraint::Fill(1),
        ])
        .split(inner_area);

        let paragraph = Paragraph::new(toast.message.clone())
            .wrap(ratatui::widgets::Wrap { trim: true })
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, vertical_chunks[1]);
    }
}
