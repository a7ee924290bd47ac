//! Core logic of the address form.
//!
//! [`resolve`] holds the stateless cascade rules between pincode, state and
//! city. [`FormSession`] owns the mutable form state and is the only entry
//! point a view layer needs.

pub mod resolve;
pub mod session;

pub use resolve::{
    Resolution, resolve_change, resolve_city_change, resolve_pincode_change, resolve_state_change,
};
pub use session::{FormSession, SubmitOutcome, SubmittedAddress, ViewAdvisory};
