//! Layout components (content area, status bar)

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::SubmitState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into content and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    let (marker, color) = match app.state.form.submit_state() {
        SubmitState::Enabled => (" ● ", Color::Green),
        SubmitState::Disabled => (" ○ ", Color::Red),
    };
    spans.push(Span::styled(marker, Style::default().fg(color)));
    spans.push(Span::styled(
        view_hints(),
        Style::default().fg(Color::Gray),
    ));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Keyboard hints for the sign-up screen
fn view_hints() -> String {
    format!("Tab/↑↓:nav  Enter:next/sign up  {SUBMIT_SHORTCUT}:sign up  Esc:quit")
}
