use crate::config::{Destination, ShipperConfig};
use crate::domain::{LogEntry, LogLevel};
use crate::error::ShipperError;
use crate::sender::{LokiClient, PushError, PushRequest};
use parking_lot::Mutex;
use std::io::{self, Write};
use tracing::{error, warn};

/// Log emitter routing entries to the console sink, the remote push
/// endpoint, or both.
///
/// Construct one directly and share it by reference, or install it
/// process-wide through [`crate::init`]. Configuration is immutable after
/// construction; the only lock on the emit path guards the console sink so
/// concurrent lines do not interleave.
pub struct Shipper {
    job: String,
    destination: Destination,
    client: Option<LokiClient>,
    console: Mutex<Box<dyn Write + Send>>,
}

impl Shipper {
    /// Shipper writing console output to stderr.
    pub fn new(config: ShipperConfig) -> Result<Self, ShipperError> {
        Self::with_console(config, Box::new(io::stderr()))
    }

    /// Shipper with a caller-supplied console sink, for embedders that
    /// redirect the stream or tests that capture it.
    pub fn with_console(
        config: ShipperConfig,
        console: Box<dyn Write + Send>,
    ) -> Result<Self, ShipperError> {
        let client = if config.destination.ships_remote() {
            Some(LokiClient::new(&config).map_err(ShipperError::Config)?)
        } else {
            None
        };

        Ok(Self {
            job: config.job,
            destination: config.destination,
            client,
            console: Mutex::new(console),
        })
    }

    pub fn job(&self) -> &str {
        &self.job
    }

    pub fn destination(&self) -> Destination {
        self.destination
    }

    /// Logs an informational message.
    pub fn info(&self, message: &str) {
        self.emit(LogLevel::Info, message);
    }

    /// Logs a warning message.
    pub fn warn(&self, message: &str) {
        self.emit(LogLevel::Warn, message);
    }

    /// Logs an error message.
    pub fn error(&self, message: &str) {
        self.emit(LogLevel::Error, message);
    }

    fn emit(&self, level: LogLevel, message: &str) {
        let entry = LogEntry::capture(level, message);

        if self.destination.writes_console() {
            self.write_console(&entry);
        }

        if self.destination.ships_remote() {
            self.ship(&entry);
        }
    }

    fn write_console(&self, entry: &LogEntry) {
        let mut console = self.console.lock();
        // Best-effort; console failures are not surfaced.
        let _ = writeln!(console, "[{}] {}", entry.level, entry.message);
        let _ = console.flush();
    }

    fn ship(&self, entry: &LogEntry) {
        // Only absent when the destination is console-only.
        let Some(client) = &self.client else {
            return;
        };

        let request = PushRequest::single(&self.job, entry);
        match client.push(&request) {
            Ok(()) => {}
            Err(PushError::UnexpectedStatus { status }) => {
                warn!(status, "log aggregator returned an unexpected status");
            }
            Err(err) => {
                error!(error = %err, "failed to ship log line");
            }
        }
    }
}

impl std::fmt::Debug for Shipper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shipper")
            .field("job", &self.job)
            .field("destination", &self.destination)
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedSink(Arc<Mutex<Vec<u8>>>);

    impl SharedSink {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().clone()).unwrap()
        }
    }

    impl Write for SharedSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn local_shipper(sink: &SharedSink) -> Shipper {
        let config = ShipperConfig::new("http://unused.invalid/", "test", Destination::Local);
        Shipper::with_console(config, Box::new(sink.clone())).unwrap()
    }

    #[test]
    fn test_console_line_format() {
        let sink = SharedSink::default();
        let shipper = local_shipper(&sink);

        shipper.error("boom");

        assert_eq!(sink.contents(), "[error] boom\n");
    }

    #[test]
    fn test_one_line_per_call() {
        let sink = SharedSink::default();
        let shipper = local_shipper(&sink);

        shipper.info("first");
        shipper.warn("second");

        assert_eq!(sink.contents(), "[info] first\n[warn] second\n");
    }

    #[test]
    fn test_local_mode_builds_no_client() {
        let sink = SharedSink::default();
        let shipper = local_shipper(&sink);

        assert!(shipper.client.is_none());
        assert_eq!(shipper.destination(), Destination::Local);
        assert_eq!(shipper.job(), "test");
    }

    #[test]
    fn test_concurrent_console_lines_do_not_interleave() {
        let sink = SharedSink::default();
        let shipper = Arc::new(local_shipper(&sink));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let shipper = Arc::clone(&shipper);
                std::thread::spawn(move || {
                    for _ in 0..50 {
                        shipper.info(&format!("message-{i}"));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let contents = sink.contents();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 400);
        for line in lines {
            assert!(line.starts_with("[info] message-"), "corrupt line: {line}");
        }
    }
}
