use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}

/// Where emitted log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Destination {
    /// Console sink only.
    #[default]
    Local,
    /// Loki push endpoint only.
    Remote,
    /// Console sink and Loki push endpoint.
    Both,
}

impl Destination {
    pub fn writes_console(self) -> bool {
        matches!(self, Self::Local | Self::Both)
    }

    pub fn ships_remote(self) -> bool {
        matches!(self, Self::Remote | Self::Both)
    }
}

/// Configuration for a [`crate::Shipper`], fixed at construction time.
///
/// `job` is attached as the `job` stream label on every remote entry. The
/// timeouts bound the blocking push call so a slow collector cannot stall a
/// logging thread indefinitely.
#[derive(Debug, Clone)]
pub struct ShipperConfig {
    pub endpoint: String,
    pub job: String,
    pub destination: Destination,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
}

impl ShipperConfig {
    /// Config with the given endpoint, job label, and destination, and
    /// default timeouts and user agent.
    pub fn new(
        endpoint: impl Into<String>,
        job: impl Into<String>,
        destination: Destination,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            job: job.into(),
            destination,
            ..Self::default()
        }
    }
}

impl Default for ShipperConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:3100/loki/api/v1/push".to_string(),
            job: "app".to_string(),
            destination: Destination::Local,
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
            user_agent: concat!("loki-shipper/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
