//! Reference location data and the lookup index derived from it.

#![deny(unsafe_code)]

pub mod dataset;
pub mod error;
pub mod index;

pub use dataset::ReferenceDataset;
pub use error::DatasetError;
pub use index::LookupIndex;
