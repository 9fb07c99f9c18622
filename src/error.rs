use crate::config::ConfigError;
use crate::sender::PushError;
use thiserror::Error;

/// Top-level error type for the shipper.
///
/// Only configuration problems ever reach callers; push failures are
/// swallowed on the emit path and surface here solely through
/// [`crate::sender::LokiClient::push`] when it is driven directly.
#[derive(Error, Debug)]
pub enum ShipperError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Push error: {0}")]
    Push(#[from] PushError),
}
