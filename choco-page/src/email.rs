//! Shared email validation for the donation and newsletter forms.

use once_cell::sync::Lazy;
use regex::Regex;

// Same shape both forms on the page have always accepted: one `@`, no
// whitespace, and at least one dot in the domain part.
static EMAIL_PATTERN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Whether the given address matches the page's accepted email shape.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(email))
}
