//! Company records and the in-memory lookup table.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::ticker::Ticker;

/// One company from the reference dataset. Serializes to the shape the
/// lookup endpoint returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub cik: u64,
    pub name: String,
    pub ticker: String,
    /// Listing exchange; null for some OTC entries upstream.
    pub exchange: Option<String>,
}

/// Wire shape of `company_tickers_exchange.json`: a `fields` header plus
/// rows of `[cik, name, ticker, exchange]`.
#[derive(Deserialize)]
struct WireDataset {
    data: Vec<(u64, String, String, Option<String>)>,
}

/// Immutable ticker → company table, built once at startup and queried by
/// normalized key.
pub struct ReferenceDataset {
    by_ticker: AHashMap<String, CompanyRecord>,
}

impl ReferenceDataset {
    /// An empty table. Lookups miss until a populated dataset replaces it.
    pub fn empty() -> Self {
        ReferenceDataset {
            by_ticker: AHashMap::new(),
        }
    }

    /// Parse the SEC wire format and index rows by normalized ticker.
    ///
    /// Duplicate tickers keep the first row, matching a linear scan of the
    /// upstream file.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        let wire: WireDataset = serde_json::from_slice(body)?;

        let mut by_ticker = AHashMap::with_capacity(wire.data.len());
        for (cik, name, ticker, exchange) in wire.data {
            let key = Ticker::normalize(&ticker);
            by_ticker.entry(String::from(key)).or_insert(CompanyRecord {
                cik,
                name,
                ticker,
                exchange,
            });
        }

        Ok(ReferenceDataset { by_ticker })
    }

    /// Look up a company by normalized ticker. Pure and read-only.
    pub fn find(&self, key: &Ticker) -> Option<&CompanyRecord> {
        self.by_ticker.get(key.as_str())
    }

    pub fn len(&self) -> usize {
        self.by_ticker.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_ticker.is_empty()
    }
}
