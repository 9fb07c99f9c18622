use crate::domain::{LogEntry, LogLevel};
use serde::Serialize;

/// Loki push-API request body.
///
/// Wire shape:
/// `{"streams":[{"stream":{"job":...,"level":...},"values":[[ts,msg]]}]}`
#[derive(Debug, Serialize)]
pub struct PushRequest {
    streams: Vec<StreamEntry>,
}

#[derive(Debug, Serialize)]
struct StreamEntry {
    stream: StreamLabels,
    values: Vec<[String; 2]>,
}

#[derive(Debug, Serialize)]
struct StreamLabels {
    job: String,
    level: LogLevel,
}

impl PushRequest {
    /// A request carrying a single entry, labeled with `job` and the entry's
    /// level.
    pub fn single(job: &str, entry: &LogEntry) -> Self {
        Self {
            streams: vec![StreamEntry {
                stream: StreamLabels {
                    job: job.to_string(),
                    level: entry.level,
                },
                values: vec![[entry.timestamp_ns.clone(), entry.message.clone()]],
            }],
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_entry_wire_shape() {
        let entry = LogEntry::capture(LogLevel::Info, "hello");
        let json = PushRequest::single("my-service", &entry).to_json().unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let streams = parsed["streams"].as_array().unwrap();
        assert_eq!(streams.len(), 1);

        assert_eq!(streams[0]["stream"]["job"], "my-service");
        assert_eq!(streams[0]["stream"]["level"], "info");

        let values = streams[0]["values"].as_array().unwrap();
        assert_eq!(values.len(), 1);
        assert_eq!(values[0][1], "hello");

        let timestamp = values[0][0].as_str().unwrap();
        assert!(!timestamp.is_empty());
        assert!(timestamp.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_level_label_matches_entry_level() {
        let entry = LogEntry::capture(LogLevel::Error, "boom");
        let json = PushRequest::single("job", &entry).to_json().unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["streams"][0]["stream"]["level"], "error");
    }
}
