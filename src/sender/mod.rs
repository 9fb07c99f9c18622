pub mod client;
pub mod payload;

pub use client::{LokiClient, PushError};
pub use payload::PushRequest;
