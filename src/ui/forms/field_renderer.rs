//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one field: bordered input plus supporting text
pub const FIELD_HEIGHT: u16 = 4;

/// Draw a text field with its supporting text line underneath.
///
/// `hint` is the guidance for the field's current result, if any; a field
/// with a hint is drawn in the error color.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    field: &FormField,
    hint: Option<&str>,
    is_active: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input
            Constraint::Length(1), // Supporting text
        ])
        .split(area);

    let border_style = match (hint.is_some(), is_active) {
        (true, _) => Style::default().fg(Color::Red),
        (false, true) => Style::default().fg(Color::Cyan),
        (false, false) => Style::default().fg(Color::DarkGray),
    };

    let text_style = if is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(field.display_value(), text_style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.block(block), chunks[0]);

    if let Some(hint) = hint {
        let supporting = Paragraph::new(Line::from(Span::styled(
            format!(" {hint}"),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(supporting, chunks[1]);
    }
}
