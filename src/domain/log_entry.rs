use super::log_level::LogLevel;
use chrono::Utc;

/// A single log line captured at emission time.
///
/// `timestamp_ns` is the wall-clock capture instant as a decimal Unix-epoch
/// nanosecond string, the form the Loki push API expects in `values[n][0]`.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub timestamp_ns: String,
}

impl LogEntry {
    /// Captures `message` at the current wall-clock time.
    pub fn capture(level: LogLevel, message: impl Into<String>) -> Self {
        let now = Utc::now();
        // i128 keeps the multiply exact for any representable instant.
        let nanos =
            i128::from(now.timestamp()) * 1_000_000_000 + i128::from(now.timestamp_subsec_nanos());

        Self {
            level,
            message: message.into(),
            timestamp_ns: nanos.to_string(),
        }
    }
}
