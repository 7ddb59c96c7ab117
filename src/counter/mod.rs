//! Per-key concurrent access counting.

mod store;

pub use store::KeyedCounterStore;
