//! Person name check.
//!
//! Checks run in order and stop at the first failure:
//! 1. non-blank
//! 2. at least [`MIN_NAME_CHARS`] characters
//! 3. letters and whitespace only

use crate::Issue;

pub const MIN_NAME_CHARS: usize = 2;

pub fn validate_name(value: &str) -> Option<Issue> {
    if value.trim().is_empty() {
        return Some(Issue::Required { label: None });
    }
    // Length is measured on the untrimmed value.
    if value.chars().count() < MIN_NAME_CHARS {
        return Some(Issue::TooShort {
            min: MIN_NAME_CHARS,
        });
    }
    if !value
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
    {
        return Some(Issue::InvalidCharacters);
    }
    None
}
