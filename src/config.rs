//! Service configuration.
//!
//! All settings are loaded from environment variables:
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | TICKERD_ADDR | 0.0.0.0:3000 | HTTP listen address |
//! | TICKERD_DATASET_URL | SEC company tickers URL | Reference dataset location |
//! | TICKERD_USER_AGENT | tickerd/0.1 (ops@tickerd.dev) | User-Agent for the dataset fetch |
//! | TICKERD_FETCH_TIMEOUT_SECS | 30 | Dataset fetch timeout |

use std::net::SocketAddr;
use std::time::Duration;

const DEFAULT_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_DATASET_URL: &str = "https://www.sec.gov/files/company_tickers_exchange.json";
const DEFAULT_USER_AGENT: &str = concat!("tickerd/", env!("CARGO_PKG_VERSION"), " (ops@tickerd.dev)");
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds
    pub addr: SocketAddr,
    /// Upstream URL of the reference dataset
    pub dataset_url: String,
    /// User-Agent sent with the dataset fetch (the SEC endpoint requires one)
    pub user_agent: String,
    /// Timeout for the startup fetch
    pub fetch_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Config {
            addr: std::env::var("TICKERD_ADDR")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_else(|| DEFAULT_ADDR.parse().expect("hardcoded address must parse")),
            dataset_url: std::env::var("TICKERD_DATASET_URL")
                .unwrap_or_else(|_| DEFAULT_DATASET_URL.to_string()),
            user_agent: std::env::var("TICKERD_USER_AGENT")
                .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string()),
            fetch_timeout: Duration::from_secs(
                std::env::var("TICKERD_FETCH_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_FETCH_TIMEOUT_SECS),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::from_env();
        assert_eq!(config.addr.port(), 3000);
        assert!(config.dataset_url.contains("sec.gov"));
        assert_eq!(config.fetch_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_invalid_addr_falls_back_to_default() {
        std::env::set_var("TICKERD_ADDR", "not-an-address");
        let config = Config::from_env();
        assert_eq!(config.addr, DEFAULT_ADDR.parse().unwrap());
        std::env::remove_var("TICKERD_ADDR");
    }
}
