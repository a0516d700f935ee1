//! Destinations for "entry was opened" reports

use std::ffi::OsStr;
use tracing::info;

/// Receives one call per detected change
pub trait OpenedSink {
    fn opened(&mut self, name: &OsStr, last_opened: Option<&str>);
}

/// Writes each change as an `info` event
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl OpenedSink for TracingSink {
    fn opened(&mut self, name: &OsStr, last_opened: Option<&str>) {
        info!(
            "Opened directory or file: {} at {}",
            name.to_string_lossy(),
            last_opened.unwrap_or("None")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    /// In-memory log destination shared with the subscriber
    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn lines(&self) -> Vec<String> {
            let bytes = self.0.lock().unwrap();
            String::from_utf8_lossy(&bytes)
                .lines()
                .map(str::to_string)
                .collect()
        }
    }

    impl io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture(report: impl FnOnce(&mut TracingSink)) -> Vec<String> {
        let buffer = SharedBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_target(false)
            .without_time()
            .finish();

        tracing::subscriber::with_default(subscriber, || report(&mut TracingSink));
        buffer.lines()
    }

    #[test]
    fn test_change_is_logged_with_name_and_time() {
        let lines = capture(|sink| sink.opened(OsStr::new("B"), Some("2024-01-01 15:30:00")));

        assert_eq!(lines.len(), 1);
        assert_eq!(
            lines[0].trim_start(),
            "INFO Opened directory or file: B at 2024-01-01 15:30:00"
        );
    }

    #[test]
    fn test_null_time_is_logged_as_none() {
        let lines = capture(|sink| sink.opened(OsStr::new("Projects"), None));

        assert_eq!(lines.len(), 1);
        assert_eq!(
            lines[0].trim_start(),
            "INFO Opened directory or file: Projects at None"
        );
    }
}
