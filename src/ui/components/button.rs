//! Button component for TUI

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Fill color of an enabled button
const BUTTON_COLOR: Color = Color::Blue;

/// Border and text styles for a button in the given state
pub fn button_styles(is_selected: bool, is_enabled: bool) -> (Style, Style) {
    let border_style = if is_selected {
        Style::default().fg(Color::Cyan)
    } else if is_enabled {
        Style::default().fg(BUTTON_COLOR)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if !is_enabled {
        Style::default().fg(Color::DarkGray)
    } else if is_selected {
        Style::default()
            .fg(Color::White)
            .bg(BUTTON_COLOR)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(BUTTON_COLOR).add_modifier(Modifier::BOLD)
    };

    (border_style, text_style)
}

/// Render a full-width bordered button with centered label
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    is_selected: bool,
    is_enabled: bool,
) {
    let (border_style, text_style) = button_styles(is_selected, is_enabled);

    let paragraph = Paragraph::new(format!(" {content} "))
        .style(text_style)
        .alignment(Alignment::Center);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}
