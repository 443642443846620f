//! Registration input checks
//!
//! The record store accepts any strings; these checks are applied by the
//! controllers before a student is registered or a password is changed.

/// Domain every student email must belong to
pub const EMAIL_DOMAIN: &str = "university.com";

/// Minimum number of letters at the start of a password
pub const MIN_PASSWORD_LETTERS: usize = 5;

/// Minimum number of trailing digits in a password
pub const MIN_PASSWORD_DIGITS: usize = 3;

/// Check an email of the form `local@university.com`
///
/// The local part must be non-empty and contain only ASCII letters, digits,
/// and `.`, `_`, `%`, `+`, `-`; it may not start or end with `.`.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.rsplit_once('@') else {
        return false;
    };
    if !domain.eq_ignore_ascii_case(EMAIL_DOMAIN) || local.is_empty() {
        return false;
    }
    if local.starts_with('.') || local.ends_with('.') {
        return false;
    }
    local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '%' | '+' | '-'))
}

/// Check a password: an uppercase letter, then letters, then digits only
///
/// At least [`MIN_PASSWORD_LETTERS`] letters in total (the leading capital
/// counts) followed by at least [`MIN_PASSWORD_DIGITS`] digits, e.g. `Abcde123`.
#[must_use]
pub fn is_valid_password(password: &str) -> bool {
    if !password.starts_with(|c: char| c.is_ascii_uppercase()) {
        return false;
    }
    let letters = password
        .chars()
        .take_while(char::is_ascii_alphabetic)
        .count();
    let rest = &password[letters..];
    letters >= MIN_PASSWORD_LETTERS
        && rest.len() >= MIN_PASSWORD_DIGITS
        && rest.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("alice@university.com"));
        assert!(is_valid_email("john.smith@university.com"));
        assert!(is_valid_email("j_smith-2@University.com"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email("alice@gmail.com"));
        assert!(!is_valid_email("@university.com"));
        assert!(!is_valid_email("alice.university.com"));
        assert!(!is_valid_email("al ice@university.com"));
        assert!(!is_valid_email(".alice@university.com"));
        assert!(!is_valid_email("alice@university.com.au"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_valid_passwords() {
        assert!(is_valid_password("Abcde123"));
        assert!(is_valid_password("Helloworld2024"));
        assert!(is_valid_password("ABCDE000"));
    }

    #[test]
    fn test_invalid_passwords() {
        // lowercase start
        assert!(!is_valid_password("abcde123"));
        // too few letters
        assert!(!is_valid_password("Abcd123"));
        // too few digits
        assert!(!is_valid_password("Abcdef12"));
        // letters after digits
        assert!(!is_valid_password("Abcde123x"));
        // symbols
        assert!(!is_valid_password("Abc!de123"));
        assert!(!is_valid_password(""));
    }
}
