//! Application state and key handling

use crate::config::SignUpConfig;
use crate::state::{AppState, Form};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance from loaded configuration
    pub fn new(config: &SignUpConfig) -> Self {
        Self {
            state: AppState::from_config(config),
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a single key event to completion
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        // Snackbar is modal
        if self.state.snackbar.is_visible() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.snackbar.dismiss();
            }
            return Ok(());
        }

        let on_button = self.state.form.is_button_active();

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Char('s')
                if key
                    .modifiers
                    .intersects(crate::platform::SUBMIT_MODIFIER | KeyModifiers::CONTROL) =>
            {
                self.submit();
            }
            KeyCode::Enter if on_button => self.submit(),
            // Enter in a text field moves on to the next one
            KeyCode::Enter => self.state.form.next_field(),
            KeyCode::Esc => self.quit = true,
            KeyCode::Char(c) if !on_button && !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.form.input_char(c)
            }
            KeyCode::Backspace if !on_button => self.state.form.backspace(),
            _ => {}
        }
        Ok(())
    }

    fn submit(&mut self) {
        if !self.state.submit() {
            tracing::debug!(validation = ?self.state.form.validation(), "sign up blocked");
        }
    }
}
