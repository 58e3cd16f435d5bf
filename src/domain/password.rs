//! Password and password confirmation classification

use super::policy::PasswordPolicy;

/// Outcome of classifying a password
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordValidity {
    Blank,
    InvalidLength,
    InvalidComplexity,
    Valid,
}

/// Outcome of classifying a password confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordConfirmValidity {
    Blank,
    Mismatch,
    Valid,
}

impl PasswordPolicy {
    /// Classify a password; length is checked before complexity
    pub fn classify(&self, password: &str) -> PasswordValidity {
        if password.is_empty() {
            PasswordValidity::Blank
        } else if !self.length().contains(password) {
            PasswordValidity::InvalidLength
        } else if !self.is_complex_enough(password) {
            PasswordValidity::InvalidComplexity
        } else {
            PasswordValidity::Valid
        }
    }
}

/// Classify a password with the default policy
pub fn classify(password: &str) -> PasswordValidity {
    PasswordPolicy::default().classify(password)
}

/// Classify a possibly missing password; `None` counts as blank
pub fn classify_opt(password: Option<&str>) -> PasswordValidity {
    classify(password.unwrap_or_default())
}

/// Classify the confirmation against the current password.
///
/// Only exact equality matters here; the password's own validity is not
/// consulted.
pub fn classify_confirm(password: &str, confirmation: &str) -> PasswordConfirmValidity {
    if confirmation.is_empty() {
        PasswordConfirmValidity::Blank
    } else if confirmation != password {
        PasswordConfirmValidity::Mismatch
    } else {
        PasswordConfirmValidity::Valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod password {
        use super::*;

        #[test]
        fn test_empty_is_blank() {
            assert_eq!(classify(""), PasswordValidity::Blank);
            assert_eq!(classify_opt(None), PasswordValidity::Blank);
        }

        #[test]
        fn test_too_short() {
            assert_eq!(classify("short1"), PasswordValidity::InvalidLength);
        }

        #[test]
        fn test_too_long() {
            assert_eq!(
                classify("abcdefghij1234567"),
                PasswordValidity::InvalidLength
            );
        }

        #[test]
        fn test_length_bounds_inclusive() {
            assert_eq!(classify("abcdefg1"), PasswordValidity::Valid);
            assert_eq!(classify("abcdefghijklmno1"), PasswordValidity::Valid);
        }

        #[test]
        fn test_missing_digit() {
            assert_eq!(classify("abcdefgh"), PasswordValidity::InvalidComplexity);
        }

        #[test]
        fn test_missing_letter() {
            assert_eq!(classify("12345678"), PasswordValidity::InvalidComplexity);
        }

        #[test]
        fn test_length_reported_before_complexity() {
            // fails both rules
            assert_eq!(classify("abc"), PasswordValidity::InvalidLength);
        }

        #[test]
        fn test_non_ascii_letters_and_digits_do_not_count() {
            assert_eq!(classify("éééééééé1"), PasswordValidity::InvalidComplexity);
            assert_eq!(classify("abcdefgh１"), PasswordValidity::InvalidComplexity);
        }

        #[test]
        fn test_valid() {
            assert_eq!(classify("abcdefgh1"), PasswordValidity::Valid);
        }
    }

    mod confirm {
        use super::*;

        #[test]
        fn test_empty_confirmation_is_blank() {
            assert_eq!(classify_confirm("abcdefgh1", ""), PasswordConfirmValidity::Blank);
            assert_eq!(classify_confirm("", ""), PasswordConfirmValidity::Blank);
        }

        #[test]
        fn test_mismatch() {
            assert_eq!(
                classify_confirm("abcdefgh2", "abcdefgh1"),
                PasswordConfirmValidity::Mismatch
            );
            assert_eq!(classify_confirm("", "x"), PasswordConfirmValidity::Mismatch);
        }

        #[test]
        fn test_exact_equality_is_case_sensitive() {
            assert_eq!(
                classify_confirm("Password1", "password1"),
                PasswordConfirmValidity::Mismatch
            );
        }

        #[test]
        fn test_match_is_valid_even_for_weak_password() {
            assert_eq!(classify_confirm("pw", "pw"), PasswordConfirmValidity::Valid);
        }
    }
}
