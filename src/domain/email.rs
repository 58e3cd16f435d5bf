//! Email classification

/// Outcome of classifying an email address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmailValidity {
    Blank,
    InvalidFormat,
    Valid,
}

/// Classify an email address by its `local@domain.tld` shape
pub fn classify(email: &str) -> EmailValidity {
    if email.is_empty() {
        EmailValidity::Blank
    } else if has_address_shape(email) {
        EmailValidity::Valid
    } else {
        EmailValidity::InvalidFormat
    }
}

/// Classify a possibly missing email; `None` counts as blank
pub fn classify_opt(email: Option<&str>) -> EmailValidity {
    classify(email.unwrap_or_default())
}

fn has_address_shape(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') || !domain.contains('.') {
        return false;
    }

    domain.split('.').all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_blank() {
        assert_eq!(classify(""), EmailValidity::Blank);
        assert_eq!(classify_opt(None), EmailValidity::Blank);
    }

    #[test]
    fn test_valid_addresses() {
        assert_eq!(classify("a@b.co"), EmailValidity::Valid);
        assert_eq!(classify("first.last@mail.example.com"), EmailValidity::Valid);
        assert_eq!(classify("user+tag@host.io"), EmailValidity::Valid);
    }

    #[test]
    fn test_domain_without_dot() {
        assert_eq!(classify("a@b"), EmailValidity::InvalidFormat);
    }

    #[test]
    fn test_missing_or_repeated_at() {
        assert_eq!(classify("ab.co"), EmailValidity::InvalidFormat);
        assert_eq!(classify("a@@b.co"), EmailValidity::InvalidFormat);
        assert_eq!(classify("a@b@c.co"), EmailValidity::InvalidFormat);
    }

    #[test]
    fn test_empty_local_part() {
        assert_eq!(classify("@b.co"), EmailValidity::InvalidFormat);
    }

    #[test]
    fn test_empty_domain_labels() {
        assert_eq!(classify("a@.co"), EmailValidity::InvalidFormat);
        assert_eq!(classify("a@b."), EmailValidity::InvalidFormat);
        assert_eq!(classify("a@b..co"), EmailValidity::InvalidFormat);
        assert_eq!(classify("a@"), EmailValidity::InvalidFormat);
    }

    #[test]
    fn test_whitespace_rejected() {
        assert_eq!(classify("a b@c.co"), EmailValidity::InvalidFormat);
        assert_eq!(classify(" a@b.co"), EmailValidity::InvalidFormat);
    }
}
