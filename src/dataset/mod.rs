//! The SEC reference dataset: an immutable ticker → company lookup table
//! fetched once at startup.

mod fetch;
mod record;

pub use fetch::{fetch, DatasetError};
pub use record::{CompanyRecord, ReferenceDataset};
