pub mod config;
pub mod counter;
pub mod dataset;
pub mod service;
pub mod ticker;

pub use config::Config;
pub use counter::KeyedCounterStore;
pub use dataset::{CompanyRecord, ReferenceDataset};
pub use service::LookupService;
pub use ticker::Ticker;
