//! Concurrent per-key access counters.
//!
//! The store maps a dynamically discovered key space (tickers) to
//! monotonically increasing counters. Callers on different keys never
//! contend with each other; callers on the same key are serialized by a
//! per-key async mutex created lazily on first sight of that key.

use std::collections::HashMap;
use std::sync::Arc;

use ahash::AHashMap;
use parking_lot::RwLock;
use tokio::sync::Mutex;

use crate::ticker::Ticker;

/// A count plus its mutual exclusion, allocated once per key.
///
/// The count lives inside the mutex so that holding the lock is the only
/// way to read or write it. Two cells for the same key would let two
/// increments proceed concurrently and lose one, which is why cell
/// creation goes through the write-locked entry path in `cell`.
struct CounterCell {
    count: Mutex<u64>,
}

impl CounterCell {
    fn new() -> Self {
        CounterCell {
            count: Mutex::new(0),
        }
    }
}

/// Concurrent map from ticker to access count.
///
/// Locking is two-level:
/// - an outer `RwLock` guards the key set itself, held only for map reads
///   and inserts, never while a counter is being updated;
/// - an inner `tokio::sync::Mutex` per key serializes increments on that
///   key. Tokio's mutex grants the lock to waiters in arrival order and
///   suspends the task instead of spinning, so sustained contention on a
///   hot ticker cannot starve a caller or burn a core.
///
/// Entries live for the process lifetime; there is no eviction.
pub struct KeyedCounterStore {
    cells: RwLock<AHashMap<String, Arc<CounterCell>>>,
}

impl KeyedCounterStore {
    pub fn new() -> Self {
        KeyedCounterStore {
            cells: RwLock::new(AHashMap::new()),
        }
    }

    /// Increment the counter for `key` by exactly one, returning the new
    /// count.
    ///
    /// Never fails. Counts are 64-bit, which no realistic request rate can
    /// overflow; arithmetic saturates as a backstop so a counter can never
    /// wrap back to a value it never held.
    pub async fn increment(&self, key: &Ticker) -> u64 {
        let cell = self.cell(key);
        let mut count = cell.count.lock().await;
        *count = count.saturating_add(1);
        *count
    }

    /// Fetch the cell for `key`, creating it on first sight.
    ///
    /// The fast path is a read lock plus an `Arc` clone. When the key is
    /// new, the write-locked entry API picks a single winner among racing
    /// first sightings; losers get the winner's cell, never a second one.
    fn cell(&self, key: &Ticker) -> Arc<CounterCell> {
        if let Some(cell) = self.cells.read().get(key.as_str()) {
            return cell.clone();
        }
        self.cells
            .write()
            .entry(key.as_str().to_owned())
            .or_insert_with(|| Arc::new(CounterCell::new()))
            .clone()
    }

    /// Copy out every counter.
    ///
    /// Each value is read while holding that key's lock, so every returned
    /// count is one the counter actually held; values for different keys
    /// may reflect slightly different instants. The key set is captured at
    /// a single point under the outer lock, which is released before any
    /// per-key lock is awaited.
    pub async fn snapshot(&self) -> HashMap<String, u64> {
        let cells: Vec<(String, Arc<CounterCell>)> = self
            .cells
            .read()
            .iter()
            .map(|(key, cell)| (key.clone(), cell.clone()))
            .collect();

        let mut counts = HashMap::with_capacity(cells.len());
        for (key, cell) in cells {
            let count = *cell.count.lock().await;
            counts.insert(key, count);
        }
        counts
    }

    /// Number of keys seen so far.
    pub fn tracked_keys(&self) -> usize {
        self.cells.read().len()
    }
}

impl Default for KeyedCounterStore {
    fn default() -> Self {
        Self::new()
    }
}
