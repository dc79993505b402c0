//! UI rendering module

mod faq;
mod generator;
mod home;
mod overlays;
mod widgets;

use crate::app::App;
use crate::state::Section;
use ratatui::layout::{Constraint, Layout};
use ratatui::Frame;

/// Main render function - dispatches to the active section's view
pub fn render(frame: &mut Frame, app: &mut App) {
    let [header, content, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    widgets::navbar::render(frame, app, header);

    match app.section {
        Section::Home => home::render(frame, app, content),
        Section::Generator => generator::render(frame, app, content),
        Section::Faq => faq::render(frame, app, content),
    }

    widgets::footer::render(frame, app, footer);

    // Render toast notification if present
    if app.toast.is_some() {
        overlays::toast::render(frame, app);
    }
}
