#![deny(unsafe_code)]

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to parse location dataset: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate state id: {id}")]
    DuplicateState { id: String },

    #[error("duplicate city id: {id}")]
    DuplicateCity { id: String },

    #[error("{referrer} references unknown state: {state_id}")]
    UnknownState { referrer: String, state_id: String },

    #[error("pincode {pincode} references unknown city: {city_id}")]
    UnknownCity { pincode: String, city_id: String },

    #[error(
        "pincode {pincode} maps to state {state_id} but city {city_id} belongs to {city_state_id}"
    )]
    InconsistentPostalEntry {
        pincode: String,
        state_id: String,
        city_id: String,
        city_state_id: String,
    },

    #[error("malformed pincode for {owner}: {pincode:?}")]
    MalformedPincode { owner: String, pincode: String },
}
