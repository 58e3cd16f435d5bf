//! Validation policy values (length bounds and complexity rules)

use serde::{Deserialize, Serialize};

/// Accepted username length, inclusive on both ends
pub const USERNAME_LENGTH: LengthBound = LengthBound::new(2, 5);

/// Accepted password length, inclusive on both ends
pub const PASSWORD_LENGTH: LengthBound = LengthBound::new(8, 16);

/// Inclusive character-count bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthBound {
    pub min: usize,
    pub max: usize,
}

impl LengthBound {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Check a string's character count (not byte length) against the bound
    pub fn contains(&self, value: &str) -> bool {
        let count = value.chars().count();
        count >= self.min && count <= self.max
    }
}

/// Username rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsernamePolicy {
    pub min_length: usize,
    pub max_length: usize,
}

impl Default for UsernamePolicy {
    fn default() -> Self {
        Self {
            min_length: USERNAME_LENGTH.min,
            max_length: USERNAME_LENGTH.max,
        }
    }
}

impl UsernamePolicy {
    pub fn length(&self) -> LengthBound {
        LengthBound::new(self.min_length, self.max_length)
    }
}

/// Password rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub max_length: usize,
    /// Require at least one ASCII letter
    pub require_letter: bool,
    /// Require at least one ASCII digit
    pub require_digit: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: PASSWORD_LENGTH.min,
            max_length: PASSWORD_LENGTH.max,
            require_letter: true,
            require_digit: true,
        }
    }
}

impl PasswordPolicy {
    pub fn length(&self) -> LengthBound {
        LengthBound::new(self.min_length, self.max_length)
    }

    /// Whether the password satisfies the configured complexity rule.
    ///
    /// Letters and digits are both counted from the ASCII range only.
    pub fn is_complex_enough(&self, password: &str) -> bool {
        let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
        let has_digit = password.chars().any(|c| c.is_ascii_digit());
        (!self.require_letter || has_letter) && (!self.require_digit || has_digit)
    }
}
