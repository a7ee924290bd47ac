use crate::Issue;

/// Pincode length, counted in characters.
pub const PINCODE_LEN: usize = 6;

/// Exactly [`PINCODE_LEN`] ASCII digits.
///
/// Length is measured in chars, the same unit the auto-fill trigger uses.
pub fn validate_pincode(value: &str) -> Option<Issue> {
    if value.trim().is_empty() {
        return Some(Issue::PincodeRequired);
    }
    if value.chars().count() != PINCODE_LEN || !value.chars().all(|c| c.is_ascii_digit()) {
        return Some(Issue::PincodeFormat);
    }
    None
}
