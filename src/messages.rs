//! User-facing strings and per-result guidance lookup

use crate::domain::{EmailValidity, PasswordConfirmValidity, PasswordValidity, UsernameValidity};
use serde::{Deserialize, Serialize};

/// Every string the screen displays. Any entry can be overridden from config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub welcome: String,
    pub username_label: String,
    pub email_label: String,
    pub password_label: String,
    pub password_confirm_label: String,
    pub sign_up: String,
    pub success_sign_up: String,
    pub username_invalid_length: String,
    pub username_invalid_characters: String,
    pub email_invalid_format: String,
    pub password_invalid_length: String,
    pub password_invalid_complexity: String,
    pub password_confirm_mismatch: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            welcome: "Welcome!".to_string(),
            username_label: "Username".to_string(),
            email_label: "Email".to_string(),
            password_label: "Password".to_string(),
            password_confirm_label: "Password Confirm".to_string(),
            sign_up: "Sign Up".to_string(),
            success_sign_up: "Sign up complete!".to_string(),
            username_invalid_length: "Username must be between 2 and 5 characters.".to_string(),
            username_invalid_characters: "Username may only contain letters and digits."
                .to_string(),
            email_invalid_format: "Please enter a valid email address.".to_string(),
            password_invalid_length: "Password must be between 8 and 16 characters.".to_string(),
            password_invalid_complexity: "Password must contain at least one letter and one digit."
                .to_string(),
            password_confirm_mismatch: "Passwords do not match.".to_string(),
        }
    }
}

impl Messages {
    /// Guidance for a username result; blank and valid show nothing
    pub fn username_hint(&self, validity: UsernameValidity) -> Option<&str> {
        match validity {
            UsernameValidity::InvalidLength => Some(self.username_invalid_length.as_str()),
            UsernameValidity::InvalidCharacters => {
                Some(self.username_invalid_characters.as_str())
            }
            UsernameValidity::Blank | UsernameValidity::Valid => None,
        }
    }

    pub fn email_hint(&self, validity: EmailValidity) -> Option<&str> {
        match validity {
            EmailValidity::InvalidFormat => Some(self.email_invalid_format.as_str()),
            EmailValidity::Blank | EmailValidity::Valid => None,
        }
    }

    pub fn password_hint(&self, validity: PasswordValidity) -> Option<&str> {
        match validity {
            PasswordValidity::InvalidLength => Some(self.password_invalid_length.as_str()),
            PasswordValidity::InvalidComplexity => {
                Some(self.password_invalid_complexity.as_str())
            }
            PasswordValidity::Blank | PasswordValidity::Valid => None,
        }
    }

    pub fn password_confirm_hint(&self, validity: PasswordConfirmValidity) -> Option<&str> {
        match validity {
            PasswordConfirmValidity::Mismatch => Some(self.password_confirm_mismatch.as_str()),
            PasswordConfirmValidity::Blank | PasswordConfirmValidity::Valid => None,
        }
    }
}
