use crate::config::{ConfigError, ShipperConfig};
use crate::sender::payload::PushRequest;
use reqwest::StatusCode;
use reqwest::blocking::{Client, ClientBuilder};
use reqwest::header::CONTENT_TYPE;
use thiserror::Error;
use url::Url;

/// Failure of a single push call. Callers on the emit path log these and
/// move on; they never reach application code.
#[derive(Error, Debug)]
pub enum PushError {
    #[error("JSON serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Unexpected response status: {status}")]
    UnexpectedStatus { status: u16 },
}

/// Blocking HTTP client for a Loki-style push endpoint.
///
/// Built once per shipper and reused; requests are bounded by the configured
/// request and connect timeouts.
#[derive(Debug, Clone)]
pub struct LokiClient {
    client: Client,
    push_url: Url,
}

impl LokiClient {
    pub fn new(config: &ShipperConfig) -> Result<Self, ConfigError> {
        let push_url: Url = config
            .endpoint
            .parse()
            .map_err(|e| ConfigError::InvalidUrl(format!("{}: {e}", config.endpoint)))?;

        let client = ClientBuilder::new()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| ConfigError::ClientBuild(e.to_string()))?;

        Ok(Self { client, push_url })
    }

    pub fn endpoint(&self) -> &str {
        self.push_url.as_str()
    }

    /// Sends one push request and expects `204 No Content` back; any other
    /// status is reported as [`PushError::UnexpectedStatus`].
    pub fn push(&self, request: &PushRequest) -> Result<(), PushError> {
        let body = request.to_json()?;

        let response = self
            .client
            .post(self.push_url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()?;

        let status = response.status();
        if status != StatusCode::NO_CONTENT {
            return Err(PushError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        Ok(())
    }
}
