//! Cross-field auto-fill rules.
//!
//! Each handler computes every downstream update in a single pass. Handlers
//! never call each other, so a cascade cannot re-trigger itself.

use tracing::debug;

use addr_dataset::LookupIndex;
use addr_model::{Field, FormRecord};
use addr_validate::{Issue, PINCODE_LEN};

/// Pincode length at which a lookup is attempted.
///
/// Counted in chars, matching `validate_pincode`.
pub const LOOKUP_TRIGGER_LEN: usize = PINCODE_LEN;

/// Outcome of one field change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Record after the change and any auto-fill.
    pub record: FormRecord,
    /// Errors the cascade raises.
    pub set_errors: Vec<(Field, Issue)>,
    /// Errors the cascade resolves.
    pub cleared_errors: Vec<Field>,
    /// Ask the view to move focus to the city input.
    pub focus_city: bool,
}

impl Resolution {
    fn stored(record: FormRecord) -> Self {
        Self {
            record,
            set_errors: Vec::new(),
            cleared_errors: Vec::new(),
            focus_city: false,
        }
    }
}

/// Dispatch a change to the matching handler. Name fields have no cascade.
pub fn resolve_change(
    record: &FormRecord,
    index: &LookupIndex,
    field: Field,
    value: &str,
) -> Option<Resolution> {
    match field {
        Field::Pincode => Some(resolve_pincode_change(record, index, value)),
        Field::State => Some(resolve_state_change(record, index, value)),
        Field::City => Some(resolve_city_change(record, index, value)),
        Field::FirstName | Field::LastName => None,
    }
}

/// Store the typed pincode and, once it is complete, fill state and city.
pub fn resolve_pincode_change(
    record: &FormRecord,
    index: &LookupIndex,
    pincode: &str,
) -> Resolution {
    let mut next = record.clone();
    next.pincode = pincode.to_string();
    let mut resolution = Resolution::stored(next);

    if pincode.chars().count() != LOOKUP_TRIGGER_LEN {
        return resolution;
    }

    match index.location_by_pincode_prefix(pincode) {
        Some(location) => {
            debug!(
                pincode,
                state = %location.state_id,
                city = %location.city_id,
                "pincode resolved"
            );
            resolution.record.state = location.state_id.clone();
            resolution.record.city = location.city_id.clone();
            resolution.cleared_errors = vec![Field::Pincode, Field::State, Field::City];
        }
        None => {
            debug!(pincode, "pincode not in dataset");
            resolution
                .set_errors
                .push((Field::Pincode, Issue::PincodeNotFound));
        }
    }
    resolution
}

/// Store the selected state and drop a city that no longer belongs to it.
pub fn resolve_state_change(
    record: &FormRecord,
    index: &LookupIndex,
    state_id: &str,
) -> Resolution {
    let mut next = record.clone();
    next.state = state_id.to_string();
    let mut resolution = Resolution::stored(next);

    if record.city.is_empty() {
        return resolution;
    }
    let city_matches = index
        .city_by_id(&record.city)
        .is_some_and(|city| city.state_id == state_id);
    if !city_matches {
        debug!(
            state = state_id,
            city = %record.city,
            "city does not belong to selected state, clearing"
        );
        resolution.record.city.clear();
        resolution.cleared_errors.push(Field::City);
        resolution.focus_city = true;
    }
    resolution
}

/// Store the selected city and make state and pincode follow it.
pub fn resolve_city_change(record: &FormRecord, index: &LookupIndex, city_id: &str) -> Resolution {
    let mut next = record.clone();
    next.city = city_id.to_string();
    let mut resolution = Resolution::stored(next);

    if city_id.is_empty() {
        return resolution;
    }
    if let Some(city) = index.city_by_id(city_id) {
        debug!(
            city = city_id,
            state = %city.state_id,
            pincode = %city.pincode,
            "city resolved"
        );
        resolution.record.state = city.state_id.clone();
        resolution.record.pincode = city.pincode.clone();
        resolution.cleared_errors = vec![Field::City, Field::State, Field::Pincode];
    }
    resolution
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> &'static LookupIndex {
        LookupIndex::builtin()
    }

    #[test]
    fn partial_pincode_only_stores() {
        let record = FormRecord {
            state: "KA".to_string(),
            ..FormRecord::default()
        };
        let resolution = resolve_pincode_change(&record, index(), "4000");
        assert_eq!(resolution.record.pincode, "4000");
        assert_eq!(resolution.record.state, "KA");
        assert!(resolution.set_errors.is_empty());
        assert!(resolution.cleared_errors.is_empty());
    }

    #[test]
    fn complete_pincode_fills_location() {
        let resolution = resolve_pincode_change(&FormRecord::default(), index(), "600001");
        assert_eq!(resolution.record.state, "TN");
        assert_eq!(resolution.record.city, "chennai");
        assert_eq!(
            resolution.cleared_errors,
            vec![Field::Pincode, Field::State, Field::City]
        );
    }

    #[test]
    fn unknown_pincode_keeps_location() {
        let record = FormRecord {
            state: "MH".to_string(),
            city: "pune".to_string(),
            ..FormRecord::default()
        };
        let resolution = resolve_pincode_change(&record, index(), "999999");
        assert_eq!(resolution.record.state, "MH");
        assert_eq!(resolution.record.city, "pune");
        assert_eq!(
            resolution.set_errors,
            vec![(Field::Pincode, Issue::PincodeNotFound)]
        );
    }

    #[test]
    fn state_change_without_city_does_not_focus() {
        let resolution = resolve_state_change(&FormRecord::default(), index(), "MH");
        assert_eq!(resolution.record.state, "MH");
        assert!(!resolution.focus_city);
    }

    #[test]
    fn state_change_drops_unknown_city() {
        let record = FormRecord {
            city: "atlantis".to_string(),
            ..FormRecord::default()
        };
        let resolution = resolve_state_change(&record, index(), "MH");
        assert!(resolution.record.city.is_empty());
        assert!(resolution.focus_city);
    }

    #[test]
    fn unknown_city_only_stores() {
        let record = FormRecord {
            state: "MH".to_string(),
            pincode: "400001".to_string(),
            ..FormRecord::default()
        };
        let resolution = resolve_city_change(&record, index(), "atlantis");
        assert_eq!(resolution.record.city, "atlantis");
        assert_eq!(resolution.record.state, "MH");
        assert_eq!(resolution.record.pincode, "400001");
        assert!(resolution.cleared_errors.is_empty());
    }

    #[test]
    fn trigger_counts_characters() {
        let resolution = resolve_pincode_change(&FormRecord::default(), index(), "40000é");
        assert_eq!(resolution.record.city, "mumbai");
        let resolution = resolve_pincode_change(&FormRecord::default(), index(), "4000é");
        assert!(resolution.record.city.is_empty());
    }

    #[test]
    fn name_fields_have_no_cascade() {
        assert!(resolve_change(&FormRecord::default(), index(), Field::FirstName, "Anna").is_none());
    }
}
