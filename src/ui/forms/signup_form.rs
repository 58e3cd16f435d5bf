//! Sign-up form rendering

use super::field_renderer::{draw_field, FIELD_HEIGHT};
use crate::app::App;
use crate::messages::Messages;
use crate::state::{FormValidation, SignUpField};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Widest the form column grows on large terminals
const FORM_MAX_WIDTH: u16 = 64;

/// Supporting text for one field's current result
fn field_hint<'a>(
    messages: &'a Messages,
    validation: &FormValidation,
    field: SignUpField,
) -> Option<&'a str> {
    match field {
        SignUpField::Username => messages.username_hint(validation.username),
        SignUpField::Email => messages.email_hint(validation.email),
        SignUpField::Password => messages.password_hint(validation.password),
        SignUpField::PasswordConfirm => {
            messages.password_confirm_hint(validation.password_confirm)
        }
    }
}

/// Horizontally centered column no wider than `FORM_MAX_WIDTH`
fn form_column(area: Rect) -> Rect {
    let width = area.width.min(FORM_MAX_WIDTH);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

/// Draw the welcome title, the four fields and the Sign Up button
pub fn draw_signup(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let form = &state.form;
    let messages = &state.messages;
    let validation = form.validation();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Title
            Constraint::Length(FIELD_HEIGHT),  // Username
            Constraint::Length(FIELD_HEIGHT),  // Email
            Constraint::Length(FIELD_HEIGHT),  // Password
            Constraint::Length(FIELD_HEIGHT),  // Password confirm
            Constraint::Length(BUTTON_HEIGHT), // Sign Up
            Constraint::Min(0),
        ])
        .margin(1)
        .split(form_column(area));

    let title = Paragraph::new(Line::from(Span::styled(
        messages.welcome.as_str(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    for field in SignUpField::ALL {
        draw_field(
            frame,
            chunks[1 + field.index()],
            field.label(messages),
            form.field(field),
            field_hint(messages, &validation, field),
            form.active_input() == Some(field),
        );
    }

    render_button(
        frame,
        chunks[5],
        &messages.sign_up,
        form.is_button_active(),
        form.is_submit_enabled(),
    );
}
