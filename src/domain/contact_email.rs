use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::ValidationError;

/// `local@domain.tld` with no whitespace and a single `@`. U+FEFF counts as
/// whitespace here, as it does in the browser's `\s`.
static ADDRESS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$").unwrap()
});

/// An email address that matches `local@domain.tld`: a single `@`, no
/// whitespace, and a `.` after the `@` with something on both sides of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEmail(String);

impl ContactEmail {
    pub fn parse(s: String) -> Result<ContactEmail, ValidationError> {
        if ADDRESS_REGEX.is_match(&s) {
            Ok(Self(s))
        } else {
            Err(ValidationError::InvalidEmail)
        }
    }
}

impl AsRef<str> for ContactEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContactEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
