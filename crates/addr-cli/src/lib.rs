//! CLI library components for the address form.

pub mod fill;
pub mod logging;
