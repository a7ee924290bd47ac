use serde::{Deserialize, Serialize};

/// A state or union territory, identified by its 2-letter code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub id: String,
    pub name: String,
}

/// A city with its representative postal code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub id: String,
    pub name: String,
    /// Owning state id.
    pub state_id: String,
    /// Primary 6-digit pincode for the city.
    pub pincode: String,
}

/// Postal code to location mapping.
///
/// `state_id` is denormalized from the city and must agree with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalEntry {
    pub pincode: String,
    pub state_id: String,
    pub city_id: String,
}

impl PostalEntry {
    /// Administrative prefix used for coarse lookups.
    pub fn prefix(&self) -> Option<&str> {
        self.pincode.get(..3)
    }
}
