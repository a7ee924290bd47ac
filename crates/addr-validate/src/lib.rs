//! Syntactic and presence checks for address form fields.
//!
//! Checks are pure functions over raw field values. They never consult the
//! location dataset; lookup misses are reported by the resolution engine
//! using [`Issue::PincodeNotFound`].

pub mod checks;
mod issue;

pub use checks::{
    PINCODE_LEN, validate_field, validate_name, validate_pincode, validate_required,
};
pub use issue::{Issue, IssueKind};
