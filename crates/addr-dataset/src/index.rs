//! Constant-time lookups derived from a [`ReferenceDataset`].

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::trace;

use addr_model::{City, PostalEntry, State};

use crate::ReferenceDataset;

/// Number of leading pincode characters the postal index is keyed on.
pub const PINCODE_PREFIX_LEN: usize = 3;

static BUILTIN_INDEX: OnceLock<LookupIndex> = OnceLock::new();

/// Lookup tables over a dataset.
///
/// Derived data only; rebuild when the dataset changes. The built-in dataset
/// never changes, so [`LookupIndex::builtin`] is built once and cached.
#[derive(Debug, Clone)]
pub struct LookupIndex {
    states: Vec<State>,
    state_by_id: HashMap<String, State>,
    city_by_id: HashMap<String, City>,
    cities_by_state: HashMap<String, Vec<City>>,
    location_by_prefix: HashMap<String, PostalEntry>,
}

impl LookupIndex {
    pub fn new(dataset: &ReferenceDataset) -> Self {
        let state_by_id = dataset
            .states()
            .iter()
            .map(|state| (state.id.clone(), state.clone()))
            .collect();
        let city_by_id = dataset
            .cities()
            .iter()
            .map(|city| (city.id.clone(), city.clone()))
            .collect();

        let mut cities_by_state: HashMap<String, Vec<City>> = HashMap::new();
        for city in dataset.cities() {
            cities_by_state
                .entry(city.state_id.clone())
                .or_default()
                .push(city.clone());
        }

        // Later entries replace earlier ones sharing a prefix.
        let mut location_by_prefix = HashMap::new();
        for entry in dataset.pincodes() {
            if let Some(prefix) = entry.prefix() {
                location_by_prefix.insert(prefix.to_string(), entry.clone());
            }
        }

        Self {
            states: dataset.states().to_vec(),
            state_by_id,
            city_by_id,
            cities_by_state,
            location_by_prefix,
        }
    }

    /// Index over [`ReferenceDataset::builtin`].
    pub fn builtin() -> &'static LookupIndex {
        BUILTIN_INDEX.get_or_init(|| Self::new(ReferenceDataset::builtin()))
    }

    /// All states in dataset order.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn state_by_id(&self, id: &str) -> Option<&State> {
        self.state_by_id.get(id)
    }

    pub fn city_by_id(&self, id: &str) -> Option<&City> {
        self.city_by_id.get(id)
    }

    /// Cities of a state in dataset order. Empty for unknown states.
    pub fn cities_by_state(&self, state_id: &str) -> &[City] {
        self.cities_by_state
            .get(state_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Resolve a pincode by its administrative prefix.
    ///
    /// Only the first three characters are compared, so distinct full codes
    /// sharing a prefix resolve to the same entry.
    pub fn location_by_pincode_prefix(&self, pincode: &str) -> Option<&PostalEntry> {
        let prefix = pincode_prefix(pincode)?;
        let entry = self.location_by_prefix.get(prefix);
        trace!(prefix, hit = entry.is_some(), "pincode prefix lookup");
        entry
    }
}

/// First [`PINCODE_PREFIX_LEN`] characters, or `None` for shorter input.
fn pincode_prefix(pincode: &str) -> Option<&str> {
    match pincode.char_indices().nth(PINCODE_PREFIX_LEN) {
        Some((end, _)) => Some(&pincode[..end]),
        None if pincode.chars().count() == PINCODE_PREFIX_LEN => Some(pincode),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_input_never_matches() {
        let index = LookupIndex::builtin();
        assert!(index.location_by_pincode_prefix("40").is_none());
        assert!(index.location_by_pincode_prefix("").is_none());
    }

    #[test]
    fn prefix_ignores_trailing_characters() {
        let index = LookupIndex::builtin();
        let entry = index
            .location_by_pincode_prefix("400999")
            .expect("prefix 400 is mapped");
        assert_eq!(entry.city_id, "mumbai");
    }

    #[test]
    fn prefix_counts_characters_not_bytes() {
        assert_eq!(pincode_prefix("4é0001"), Some("4é0"));
        assert_eq!(pincode_prefix("€€€"), Some("€€€"));
        assert_eq!(pincode_prefix("12"), None);
        let index = LookupIndex::builtin();
        assert!(index.location_by_pincode_prefix("4€0001").is_none());
    }
}
