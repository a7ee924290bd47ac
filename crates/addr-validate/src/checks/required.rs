use crate::Issue;

/// Presence check for selections. Whitespace counts as a value.
pub fn validate_required(value: &str, label: &str) -> Option<Issue> {
    if value.is_empty() {
        return Some(Issue::Required {
            label: Some(label.to_string()),
        });
    }
    None
}
