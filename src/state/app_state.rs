//! Application state definitions

use super::forms::{SignUpForm, SubmitListener};
use crate::config::SignUpConfig;
use crate::messages::Messages;

/// Transient message shown after a successful sign up
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snackbar {
    message: Option<String>,
}

impl Snackbar {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.message.is_some()
    }

    pub fn dismiss(&mut self) {
        self.message = None;
    }
}

impl SubmitListener for Snackbar {
    fn on_submit(&mut self, message: &str) {
        self.message = Some(message.to_string());
    }
}

/// Main application state for one screen session
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub form: SignUpForm,
    pub messages: Messages,
    pub snackbar: Snackbar,
}

impl AppState {
    pub fn from_config(config: &SignUpConfig) -> Self {
        Self {
            form: SignUpForm::from_config(config),
            messages: config.messages.clone(),
            snackbar: Snackbar::default(),
        }
    }

    /// Submit the form, routing the success message to the snackbar
    pub fn submit(&mut self) -> bool {
        self.form
            .submit(&mut self.snackbar, &self.messages.success_sign_up)
    }
}
