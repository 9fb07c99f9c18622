#![deny(warnings, rust_2024_compatibility)]
// Specific pedantic lints enforced (not blanket allow):
#![deny(
    clippy::explicit_iter_loop,
    clippy::manual_let_else,
    clippy::semicolon_if_nothing_returned,
    clippy::inconsistent_struct_constructor
)]
// Noisy pedantic lints suppressed with justification:
#![allow(
    clippy::missing_errors_doc,      // Internal API
    clippy::module_name_repetitions, // e.g. ShipperConfig in config module
    clippy::must_use_candidate,      // Annotated selectively on critical APIs
    clippy::doc_markdown             // Internal API
)]

//! Process-wide logging facade with an optional Loki push backend.
//!
//! A [`Shipper`] writes `[level] message` lines to a console sink, forwards
//! single-entry payloads to a Loki-style push endpoint over blocking HTTP, or
//! does both, depending on its configured [`Destination`]. The crate also
//! offers a once-only global instance ([`init`] / [`get`]) for applications
//! that want a plain `loki_shipper::info("...")` call site.
//!
//! Delivery is best-effort: serialization failures, transport failures, and
//! unexpected response statuses are reported through `tracing` diagnostics
//! and never propagate into application logic.

pub mod config;
pub mod domain;
pub mod error;
pub mod global;
pub mod sender;
pub mod shipper;

// Re-export main types for easy access
pub use config::{Destination, ShipperConfig};
pub use domain::{LogEntry, LogLevel};
pub use error::ShipperError;
pub use global::{error, get, info, init, try_get, warn};
pub use sender::{LokiClient, PushError, PushRequest};
pub use shipper::Shipper;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
