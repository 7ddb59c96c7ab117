//! Lookup orchestration: dataset find plus access counting.

use std::collections::HashMap;
use std::sync::Arc;

use crate::counter::KeyedCounterStore;
use crate::dataset::{CompanyRecord, ReferenceDataset};
use crate::ticker::Ticker;

/// Composes the reference dataset with the access counter store.
///
/// Both collaborators are injected at construction and live for the
/// service lifetime. A counter is bumped exactly once per successful
/// lookup, under the same normalized key the dataset was queried with;
/// misses leave no trace in the counter table.
pub struct LookupService {
    dataset: Arc<ReferenceDataset>,
    counters: Arc<KeyedCounterStore>,
}

impl LookupService {
    pub fn new(dataset: Arc<ReferenceDataset>, counters: Arc<KeyedCounterStore>) -> Self {
        LookupService { dataset, counters }
    }

    /// Look up `raw` by normalized ticker, counting the access on a hit.
    pub async fn lookup(&self, raw: &str) -> Option<CompanyRecord> {
        let key = Ticker::normalize(raw);
        let record = self.dataset.find(&key)?.clone();
        self.counters.increment(&key).await;
        Some(record)
    }

    /// Per-ticker access counts observed so far.
    pub async fn activity(&self) -> HashMap<String, u64> {
        self.counters.snapshot().await
    }

    /// Number of companies in the reference dataset.
    pub fn dataset_len(&self) -> usize {
        self.dataset.len()
    }
}
