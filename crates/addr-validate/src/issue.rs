//! Validation issue types.
//!
//! Each variant carries only the data its message needs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// User-facing error taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Mandatory field left empty
    Required,
    /// Value present but structurally invalid
    Format,
    /// Well-formed pincode with no dataset match
    LookupMiss,
}

impl IssueKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Required => "Required",
            Self::Format => "Format",
            Self::LookupMiss => "Lookup miss",
        }
    }
}

/// A single field-level problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Issue {
    /// Empty mandatory value. Name fields carry no label.
    Required { label: Option<String> },
    /// Name shorter than the minimum character count
    TooShort { min: usize },
    /// Name contains something other than letters and whitespace
    InvalidCharacters,
    /// Empty pincode
    PincodeRequired,
    /// Pincode is not exactly six digits
    PincodeFormat,
    /// Pincode prefix is not in the dataset
    PincodeNotFound,
}

impl Issue {
    pub fn kind(&self) -> IssueKind {
        match self {
            Issue::Required { .. } | Issue::PincodeRequired => IssueKind::Required,
            Issue::TooShort { .. } | Issue::InvalidCharacters | Issue::PincodeFormat => {
                IssueKind::Format
            }
            Issue::PincodeNotFound => IssueKind::LookupMiss,
        }
    }

    /// Message shown next to the field.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::Required { label: None } => f.write_str("This field is required"),
            Issue::Required { label: Some(label) } => write!(f, "{label} is required"),
            Issue::TooShort { min } => write!(f, "Must be at least {min} characters"),
            Issue::InvalidCharacters => f.write_str("Only letters and spaces allowed"),
            Issue::PincodeRequired => f.write_str("Pincode is required"),
            Issue::PincodeFormat => f.write_str("Must be 6 digits"),
            Issue::PincodeNotFound => f.write_str("Invalid pincode"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_taxonomy() {
        assert_eq!(Issue::PincodeRequired.kind(), IssueKind::Required);
        assert_eq!(Issue::TooShort { min: 2 }.kind(), IssueKind::Format);
        assert_eq!(Issue::PincodeNotFound.kind(), IssueKind::LookupMiss);
    }

    #[test]
    fn required_message_uses_label() {
        let issue = Issue::Required {
            label: Some("City".to_string()),
        };
        assert_eq!(issue.message(), "City is required");
        assert_eq!(
            Issue::Required { label: None }.message(),
            "This field is required"
        );
    }
}
