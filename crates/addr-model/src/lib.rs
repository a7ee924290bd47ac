pub mod error;
pub mod field;
pub mod form;
pub mod location;

pub use error::{ModelError, Result};
pub use field::Field;
pub use form::{FieldErrors, FieldTouched, FormRecord};
pub use location::{City, PostalEntry, State};
