//! Character variety sections - one check per character class.

use secrecy::{ExposeSecret, SecretString};

fn any_char(password: &SecretString, pred: impl Fn(char) -> bool) -> bool {
    password.expose_secret().chars().any(pred)
}

/// At least one `A-Z`.
pub fn uppercase_section(password: &SecretString) -> bool {
    any_char(password, |c| c.is_ascii_uppercase())
}

/// At least one `a-z`.
pub fn lowercase_section(password: &SecretString) -> bool {
    any_char(password, |c| c.is_ascii_lowercase())
}

/// At least one `0-9`.
pub fn number_section(password: &SecretString) -> bool {
    any_char(password, |c| c.is_ascii_digit())
}

/// At least one character outside the word class `[A-Za-z0-9_]`.
///
/// Non-ASCII letters are outside the class and therefore count as special.
pub fn special_section(password: &SecretString) -> bool {
    any_char(password, |c| !(c.is_ascii_alphanumeric() || c == '_'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_uppercase_section() {
        assert!(uppercase_section(&secret("abcD")));
        assert!(!uppercase_section(&secret("abc123!")));
        // only ASCII A-Z counts
        assert!(!uppercase_section(&secret("ÉÀÜ")));
    }

    #[test]
    fn test_lowercase_section() {
        assert!(lowercase_section(&secret("ABCd")));
        assert!(!lowercase_section(&secret("ABC123!")));
        assert!(!lowercase_section(&secret("ß")));
    }

    #[test]
    fn test_number_section() {
        assert!(number_section(&secret("abc7")));
        assert!(!number_section(&secret("NoNumbers!")));
    }

    #[test]
    fn test_special_section_symbols() {
        assert!(special_section(&secret("abc!")));
        assert!(special_section(&secret("with space")));
        assert!(!special_section(&secret("NoSpecial123")));
    }

    #[test]
    fn test_special_section_underscore_is_word_char() {
        assert!(!special_section(&secret("snake_case_1")));
    }

    #[test]
    fn test_special_section_non_ascii() {
        assert!(special_section(&secret("café")));
    }
}
