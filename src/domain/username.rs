//! Username classification

use super::policy::UsernamePolicy;

/// Outcome of classifying a username
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UsernameValidity {
    Blank,
    InvalidLength,
    InvalidCharacters,
    Valid,
}

impl UsernamePolicy {
    /// Classify a username against this policy.
    ///
    /// Checks run blank, then length, then alphabet, so a too-long name with
    /// symbols reports `InvalidLength`.
    pub fn classify(&self, username: &str) -> UsernameValidity {
        if username.is_empty() {
            UsernameValidity::Blank
        } else if !self.length().contains(username) {
            UsernameValidity::InvalidLength
        } else if !username.chars().all(|c| c.is_ascii_alphanumeric()) {
            UsernameValidity::InvalidCharacters
        } else {
            UsernameValidity::Valid
        }
    }
}

/// Classify a username with the default policy
pub fn classify(username: &str) -> UsernameValidity {
    UsernamePolicy::default().classify(username)
}

/// Classify a possibly missing username; `None` counts as blank
pub fn classify_opt(username: Option<&str>) -> UsernameValidity {
    classify(username.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_blank() {
        assert_eq!(classify(""), UsernameValidity::Blank);
    }

    #[test]
    fn test_none_is_blank() {
        assert_eq!(classify_opt(None), UsernameValidity::Blank);
        assert_eq!(classify_opt(Some("ab")), UsernameValidity::Valid);
    }

    #[test]
    fn test_length_bounds() {
        assert_eq!(classify("a"), UsernameValidity::InvalidLength);
        assert_eq!(classify("ab"), UsernameValidity::Valid);
        assert_eq!(classify("abcde"), UsernameValidity::Valid);
        assert_eq!(classify("abcdef"), UsernameValidity::InvalidLength);
    }

    #[test]
    fn test_rejects_characters_outside_alphabet() {
        assert_eq!(classify("ab_c"), UsernameValidity::InvalidCharacters);
        assert_eq!(classify("a b"), UsernameValidity::InvalidCharacters);
        assert_eq!(classify("한글"), UsernameValidity::InvalidCharacters);
    }

    #[test]
    fn test_accepts_mixed_case_and_digits() {
        assert_eq!(classify("Ab12"), UsernameValidity::Valid);
        assert_eq!(classify("99"), UsernameValidity::Valid);
    }

    #[test]
    fn test_length_checked_before_characters() {
        assert_eq!(classify("a!b!c!"), UsernameValidity::InvalidLength);
        assert_eq!(classify("!"), UsernameValidity::InvalidLength);
    }

    #[test]
    fn test_custom_policy() {
        let policy = UsernamePolicy {
            min_length: 1,
            max_length: 10,
        };
        assert_eq!(policy.classify("a"), UsernameValidity::Valid);
        assert_eq!(policy.classify("abcdefghij"), UsernameValidity::Valid);
        assert_eq!(
            policy.classify("abcdefghijk"),
            UsernameValidity::InvalidLength
        );
    }
}
