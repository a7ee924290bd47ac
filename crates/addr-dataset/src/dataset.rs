//! Immutable reference dataset of states, cities and postal entries.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::debug;

use addr_model::{City, PostalEntry, State};

use crate::DatasetError;

const BUILTIN_LOCATIONS: &str = include_str!("../data/locations.json");

static BUILTIN: OnceLock<ReferenceDataset> = OnceLock::new();

/// Fixed collection of locations. There is no mutation API.
#[derive(Debug, Clone)]
pub struct ReferenceDataset {
    states: Vec<State>,
    cities: Vec<City>,
    pincodes: Vec<PostalEntry>,
}

#[derive(Deserialize)]
struct RawDataset {
    states: Vec<State>,
    cities: Vec<City>,
    pincodes: Vec<PostalEntry>,
}

impl ReferenceDataset {
    /// Build a dataset, checking referential integrity.
    pub fn new(
        states: Vec<State>,
        cities: Vec<City>,
        pincodes: Vec<PostalEntry>,
    ) -> Result<Self, DatasetError> {
        let dataset = Self {
            states,
            cities,
            pincodes,
        };
        dataset.check_integrity()?;
        debug!(
            states = dataset.states.len(),
            cities = dataset.cities.len(),
            pincodes = dataset.pincodes.len(),
            "loaded location dataset"
        );
        Ok(dataset)
    }

    /// Parse a dataset from its JSON document form.
    pub fn from_json_str(text: &str) -> Result<Self, DatasetError> {
        let raw: RawDataset =
            serde_json::from_str(text).map_err(|source| DatasetError::Parse { source })?;
        Self::new(raw.states, raw.cities, raw.pincodes)
    }

    /// The dataset compiled into the binary, loaded once per process.
    ///
    /// # Panics
    ///
    /// Panics if the embedded document fails its integrity checks, which the
    /// crate's tests rule out.
    pub fn builtin() -> &'static ReferenceDataset {
        BUILTIN.get_or_init(|| match Self::from_json_str(BUILTIN_LOCATIONS) {
            Ok(dataset) => dataset,
            Err(error) => panic!("embedded location dataset is invalid: {error}"),
        })
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn pincodes(&self) -> &[PostalEntry] {
        &self.pincodes
    }

    fn check_integrity(&self) -> Result<(), DatasetError> {
        let mut state_ids = BTreeSet::new();
        for state in &self.states {
            if !state_ids.insert(state.id.as_str()) {
                return Err(DatasetError::DuplicateState {
                    id: state.id.clone(),
                });
            }
        }

        let mut city_states: BTreeMap<&str, &str> = BTreeMap::new();
        for city in &self.cities {
            if !state_ids.contains(city.state_id.as_str()) {
                return Err(DatasetError::UnknownState {
                    referrer: format!("city {}", city.id),
                    state_id: city.state_id.clone(),
                });
            }
            if !is_pincode(&city.pincode) {
                return Err(DatasetError::MalformedPincode {
                    owner: format!("city {}", city.id),
                    pincode: city.pincode.clone(),
                });
            }
            if city_states
                .insert(city.id.as_str(), city.state_id.as_str())
                .is_some()
            {
                return Err(DatasetError::DuplicateCity {
                    id: city.id.clone(),
                });
            }
        }

        for entry in &self.pincodes {
            if !is_pincode(&entry.pincode) {
                return Err(DatasetError::MalformedPincode {
                    owner: format!("postal entry for {}", entry.city_id),
                    pincode: entry.pincode.clone(),
                });
            }
            if !state_ids.contains(entry.state_id.as_str()) {
                return Err(DatasetError::UnknownState {
                    referrer: format!("pincode {}", entry.pincode),
                    state_id: entry.state_id.clone(),
                });
            }
            let Some(city_state) = city_states.get(entry.city_id.as_str()) else {
                return Err(DatasetError::UnknownCity {
                    pincode: entry.pincode.clone(),
                    city_id: entry.city_id.clone(),
                });
            };
            if *city_state != entry.state_id {
                return Err(DatasetError::InconsistentPostalEntry {
                    pincode: entry.pincode.clone(),
                    state_id: entry.state_id.clone(),
                    city_id: entry.city_id.clone(),
                    city_state_id: (*city_state).to_string(),
                });
            }
        }
        Ok(())
    }
}

fn is_pincode(value: &str) -> bool {
    value.len() == 6 && value.bytes().all(|b| b.is_ascii_digit())
}
