//! Validation check modules.
//!
//! Each module implements one rule. A rule returns `None` when the value is
//! valid and otherwise the first issue found.

mod name;
mod pincode;
mod required;

use addr_model::Field;

use crate::Issue;

pub use name::validate_name;
pub use pincode::{PINCODE_LEN, validate_pincode};
pub use required::validate_required;

/// Run the single rule that applies to `field`.
pub fn validate_field(field: Field, value: &str) -> Option<Issue> {
    match field {
        Field::FirstName | Field::LastName => validate_name(value),
        Field::Pincode => validate_pincode(value),
        Field::State | Field::City => validate_required(value, field.label()),
    }
}
