//! Form field value objects

use crate::messages::Messages;

/// Mask character shown in place of password input
const MASK_CHAR: char = '•';

/// The four inputs of the sign-up form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignUpField {
    Username,
    Email,
    Password,
    PasswordConfirm,
}

impl SignUpField {
    /// Fields in display order
    pub const ALL: [SignUpField; 4] = [
        SignUpField::Username,
        SignUpField::Email,
        SignUpField::Password,
        SignUpField::PasswordConfirm,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
            Self::PasswordConfirm => "password_confirm",
        }
    }

    pub fn label<'a>(&self, messages: &'a Messages) -> &'a str {
        match self {
            Self::Username => &messages.username_label,
            Self::Email => &messages.email_label,
            Self::Password => &messages.password_label,
            Self::PasswordConfirm => &messages.password_confirm_label,
        }
    }

    /// Whether the value is hidden on screen
    pub fn is_masked(&self) -> bool {
        matches!(self, Self::Password | Self::PasswordConfirm)
    }

    /// Position in the focus ring
    pub fn index(&self) -> usize {
        match self {
            Self::Username => 0,
            Self::Email => 1,
            Self::Password => 2,
            Self::PasswordConfirm => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// A single text input and its current value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub field: SignUpField,
    value: String,
}

impl FormField {
    /// Create an empty field
    pub fn new(field: SignUpField) -> Self {
        Self {
            field,
            value: String::new(),
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Replace the value wholesale
    pub(super) fn set_text(&mut self, value: String) {
        self.value = value;
    }

    /// The value this field would hold after typing `c`
    pub fn with_char(&self, c: char) -> String {
        let mut next = self.value.clone();
        next.push(c);
        next
    }

    /// The value this field would hold after a backspace
    pub fn without_last_char(&self) -> String {
        let mut next = self.value.clone();
        next.pop();
        next
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        if self.field.is_masked() {
            std::iter::repeat(MASK_CHAR)
                .take(self.value.chars().count())
                .collect()
        } else {
            self.value.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_field_is_empty() {
        let field = FormField::new(SignUpField::Email);
        assert_eq!(field.as_text(), "");
        assert_eq!(field.display_value(), "");
    }

    #[test]
    fn test_with_char_does_not_mutate() {
        let mut field = FormField::new(SignUpField::Username);
        field.set_text("ab".to_string());
        assert_eq!(field.with_char('c'), "abc");
        assert_eq!(field.as_text(), "ab");
    }

    #[test]
    fn test_without_last_char_handles_multibyte() {
        let mut field = FormField::new(SignUpField::Username);
        field.set_text("aé".to_string());
        assert_eq!(field.without_last_char(), "a");

        let empty = FormField::new(SignUpField::Username);
        assert_eq!(empty.without_last_char(), "");
    }

    #[test]
    fn test_password_display_is_masked() {
        let mut field = FormField::new(SignUpField::Password);
        field.set_text("secret1".to_string());
        assert_eq!(field.display_value(), "•••••••");
    }

    #[test]
    fn test_plain_fields_display_as_is() {
        let mut field = FormField::new(SignUpField::Email);
        field.set_text("a@b.co".to_string());
        assert_eq!(field.display_value(), "a@b.co");
    }

    #[test]
    fn test_index_roundtrip() {
        for field in SignUpField::ALL {
            assert_eq!(SignUpField::from_index(field.index()), Some(field));
        }
        assert_eq!(SignUpField::from_index(4), None);
    }

    #[test]
    fn test_labels_come_from_messages() {
        let messages = Messages::default();
        assert_eq!(SignUpField::Username.label(&messages), "Username");
        assert_eq!(
            SignUpField::PasswordConfirm.label(&messages),
            "Password Confirm"
        );
    }
}
