//! Sign-up form state and submit gating

use super::field::{FormField, SignUpField};
use crate::config::SignUpConfig;
use crate::domain::{
    email, password, EmailValidity, PasswordConfirmValidity, PasswordPolicy, PasswordValidity,
    UsernamePolicy, UsernameValidity,
};

/// Index of the Sign Up button in the focus ring
pub const SUBMIT_BUTTON_INDEX: usize = 4;

/// Receives the success notification when an enabled form is submitted
#[cfg_attr(test, mockall::automock)]
pub trait SubmitListener {
    fn on_submit(&mut self, message: &str);
}

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Classification of all four fields at one point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormValidation {
    pub username: UsernameValidity,
    pub email: EmailValidity,
    pub password: PasswordValidity,
    pub password_confirm: PasswordConfirmValidity,
}

impl FormValidation {
    /// Classify every field from its current text
    pub fn evaluate(
        username_policy: &UsernamePolicy,
        password_policy: &PasswordPolicy,
        username: &str,
        email_value: &str,
        password_value: &str,
        password_confirm: &str,
    ) -> Self {
        Self {
            username: username_policy.classify(username),
            email: email::classify(email_value),
            password: password_policy.classify(password_value),
            password_confirm: password::classify_confirm(password_value, password_confirm),
        }
    }

    pub fn all_valid(&self) -> bool {
        self.username == UsernameValidity::Valid
            && self.email == EmailValidity::Valid
            && self.password == PasswordValidity::Valid
            && self.password_confirm == PasswordConfirmValidity::Valid
    }

    /// Whether a single field currently classifies as valid
    pub fn is_valid(&self, field: SignUpField) -> bool {
        match field {
            SignUpField::Username => self.username == UsernameValidity::Valid,
            SignUpField::Email => self.email == EmailValidity::Valid,
            SignUpField::Password => self.password == PasswordValidity::Valid,
            SignUpField::PasswordConfirm => {
                self.password_confirm == PasswordConfirmValidity::Valid
            }
        }
    }
}

/// Whether the Sign Up button accepts a press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Disabled,
    Enabled,
}

/// The sign-up form: four text fields plus the derived submit gate.
///
/// Values only change through [`SignUpForm::update_field`], which re-runs
/// every validator so the cached [`FormValidation`] always matches the text.
#[derive(Debug, Clone)]
pub struct SignUpForm {
    username: FormField,
    email: FormField,
    password: FormField,
    password_confirm: FormField,
    username_policy: UsernamePolicy,
    password_policy: PasswordPolicy,
    validation: FormValidation,
    pub active_field_index: usize,
}

impl SignUpForm {
    /// Empty form with the default policies
    pub fn new() -> Self {
        Self::with_policies(UsernamePolicy::default(), PasswordPolicy::default())
    }

    pub fn from_config(config: &SignUpConfig) -> Self {
        Self::with_policies(config.username, config.password)
    }

    pub fn with_policies(username_policy: UsernamePolicy, password_policy: PasswordPolicy) -> Self {
        let mut form = Self {
            username: FormField::new(SignUpField::Username),
            email: FormField::new(SignUpField::Email),
            password: FormField::new(SignUpField::Password),
            password_confirm: FormField::new(SignUpField::PasswordConfirm),
            username_policy,
            password_policy,
            validation: FormValidation {
                username: UsernameValidity::Blank,
                email: EmailValidity::Blank,
                password: PasswordValidity::Blank,
                password_confirm: PasswordConfirmValidity::Blank,
            },
            active_field_index: 0,
        };
        form.recompute();
        form
    }

    pub fn field(&self, field: SignUpField) -> &FormField {
        match field {
            SignUpField::Username => &self.username,
            SignUpField::Email => &self.email,
            SignUpField::Password => &self.password,
            SignUpField::PasswordConfirm => &self.password_confirm,
        }
    }

    fn field_mut(&mut self, field: SignUpField) -> &mut FormField {
        match field {
            SignUpField::Username => &mut self.username,
            SignUpField::Email => &mut self.email,
            SignUpField::Password => &mut self.password,
            SignUpField::PasswordConfirm => &mut self.password_confirm,
        }
    }

    pub fn value(&self, field: SignUpField) -> &str {
        self.field(field).as_text()
    }

    /// Replace one field's value and re-derive every result
    pub fn update_field(&mut self, field: SignUpField, value: impl Into<String>) -> &Self {
        self.field_mut(field).set_text(value.into());
        self.recompute();

        tracing::debug!(
            field = field.name(),
            chars = self.value(field).chars().count(),
            submit_state = ?self.submit_state(),
            "field updated"
        );

        self
    }

    fn recompute(&mut self) {
        self.validation = FormValidation::evaluate(
            &self.username_policy,
            &self.password_policy,
            self.username.as_text(),
            self.email.as_text(),
            self.password.as_text(),
            self.password_confirm.as_text(),
        );
    }

    pub fn validation(&self) -> FormValidation {
        self.validation
    }

    pub fn is_submit_enabled(&self) -> bool {
        self.validation.all_valid()
    }

    pub fn submit_state(&self) -> SubmitState {
        if self.is_submit_enabled() {
            SubmitState::Enabled
        } else {
            SubmitState::Disabled
        }
    }

    /// Notify `listener` once with `message` if the form is enabled.
    ///
    /// Returns whether the notification fired. The form is left untouched
    /// either way.
    pub fn submit(&self, listener: &mut dyn SubmitListener, message: &str) -> bool {
        if !self.is_submit_enabled() {
            tracing::debug!("submit ignored while disabled");
            return false;
        }

        tracing::info!(
            username_chars = self.username.as_text().chars().count(),
            email_chars = self.email.as_text().chars().count(),
            "sign up submitted"
        );
        listener.on_submit(message);
        true
    }

    /// The text field holding focus, if focus is not on the button
    pub fn active_input(&self) -> Option<SignUpField> {
        SignUpField::from_index(self.active_field_index)
    }

    /// Returns true if the Sign Up button holds focus
    pub fn is_button_active(&self) -> bool {
        self.active_field_index == SUBMIT_BUTTON_INDEX
    }

    /// Append a typed character to the focused field
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.active_input() {
            let next = self.field(field).with_char(c);
            self.update_field(field, next);
        }
    }

    /// Remove the last character of the focused field
    pub fn backspace(&mut self) {
        if let Some(field) = self.active_input() {
            let next = self.field(field).without_last_char();
            self.update_field(field, next);
        }
    }
}

impl Default for SignUpForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for SignUpForm {
    fn field_count(&self) -> usize {
        SUBMIT_BUTTON_INDEX + 1
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_BUTTON_INDEX);
    }
}
