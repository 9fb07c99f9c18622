//! Once-only process-wide shipper instance.

use crate::config::ShipperConfig;
use crate::error::ShipperError;
use crate::shipper::Shipper;
use once_cell::sync::OnceCell;

static SHIPPER: OnceCell<Shipper> = OnceCell::new();

/// Configures the process-wide shipper on first call.
///
/// First writer wins: exactly one construction runs even when multiple
/// threads race here, every caller observes the fully configured instance,
/// and later calls return the existing instance with their arguments
/// ignored. Fails only on invalid configuration, in which case the global
/// stays unset and a later call may retry.
pub fn init(config: ShipperConfig) -> Result<&'static Shipper, ShipperError> {
    SHIPPER.get_or_try_init(|| Shipper::new(config))
}

/// Returns the process-wide shipper.
///
/// # Panics
/// Panics if called before a successful [`init`]; logging before
/// initialization is a programming defect, not a runtime condition.
pub fn get() -> &'static Shipper {
    let Some(shipper) = SHIPPER.get() else {
        panic!("loki-shipper not initialized; call loki_shipper::init() first");
    };
    shipper
}

/// Non-panicking accessor for callers that prefer to handle the
/// uninitialized case themselves.
pub fn try_get() -> Option<&'static Shipper> {
    SHIPPER.get()
}

/// Logs an informational message through the process-wide shipper.
///
/// # Panics
/// Panics if [`init`] has not run.
pub fn info(message: &str) {
    get().info(message);
}

/// Logs a warning message through the process-wide shipper.
///
/// # Panics
/// Panics if [`init`] has not run.
pub fn warn(message: &str) {
    get().warn(message);
}

/// Logs an error message through the process-wide shipper.
///
/// # Panics
/// Panics if [`init`] has not run.
pub fn error(message: &str) {
    get().error(message);
}
