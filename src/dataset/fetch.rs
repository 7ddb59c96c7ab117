//! Startup fetch of the reference dataset.

use std::time::Instant;

use tracing::info;

use super::record::ReferenceDataset;
use crate::config::Config;

/// Error fetching or decoding the reference dataset
#[derive(Debug)]
pub enum DatasetError {
    /// Transport failure or non-success status from the upstream server
    Http(reqwest::Error),
    /// Body did not match the expected wire format
    Decode(serde_json::Error),
}

impl std::fmt::Display for DatasetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetError::Http(e) => write!(f, "dataset fetch failed: {}", e),
            DatasetError::Decode(e) => write!(f, "dataset body malformed: {}", e),
        }
    }
}

impl std::error::Error for DatasetError {}

impl From<reqwest::Error> for DatasetError {
    fn from(e: reqwest::Error) -> Self {
        DatasetError::Http(e)
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(e: serde_json::Error) -> Self {
        DatasetError::Decode(e)
    }
}

/// Download and index the dataset named by `config.dataset_url`.
///
/// The upstream SEC endpoint rejects anonymous clients, so the request
/// carries the configured User-Agent.
pub async fn fetch(config: &Config) -> Result<ReferenceDataset, DatasetError> {
    let client = reqwest::Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.fetch_timeout)
        .build()?;

    let started = Instant::now();
    let body = client
        .get(&config.dataset_url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;

    let dataset = ReferenceDataset::from_json(&body)?;
    info!(
        "reference dataset fetched: {} companies in {}ms",
        dataset.len(),
        started.elapsed().as_millis()
    );

    Ok(dataset)
}
