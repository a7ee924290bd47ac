use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Input fields of the address form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Pincode,
    State,
    City,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::FirstName,
        Field::LastName,
        Field::Pincode,
        Field::State,
        Field::City,
    ];

    /// Stable key used in serialized records.
    pub fn key(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Pincode => "pincode",
            Self::State => "state",
            Self::City => "city",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Pincode => "Pincode",
            Self::State => "State",
            Self::City => "City",
        }
    }

    /// Whether a change to this field goes through the resolution engine.
    pub fn is_location(self) -> bool {
        matches!(self, Self::Pincode | Self::State | Self::City)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "firstname" => Ok(Self::FirstName),
            "lastname" => Ok(Self::LastName),
            "pincode" | "postalcode" | "pin" => Ok(Self::Pincode),
            "state" => Ok(Self::State),
            "city" => Ok(Self::City),
            _ => Err(ModelError::UnknownField(s.to_string())),
        }
    }
}
