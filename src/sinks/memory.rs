//! In-memory sink for tests and diagnostics

use crate::core::{LoggerError, Result, Sink};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// Keeps every record as a separate string
///
/// [`MemorySink::set_failing`] makes subsequent writes fail, which is handy
/// for exercising error paths.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<String>>,
    failing: AtomicBool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::Release);
    }

    pub fn records(&self) -> Vec<String> {
        self.records.lock().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.records.lock().last().cloned()
    }

    /// All records concatenated
    pub fn contents(&self) -> String {
        self.records.lock().concat()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Sink for MemorySink {
    fn write(&self, record: &[u8]) -> Result<()> {
        if self.failing.load(Ordering::Acquire) {
            return Err(LoggerError::writer("memory sink is set to fail"));
        }
        self.records
            .lock()
            .push(String::from_utf8_lossy(record).into_owned());
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_kept_in_order() {
        let sink = MemorySink::new();
        sink.write(b"first\n").expect("write");
        sink.write(b"second\n").expect("write");

        assert_eq!(sink.records(), vec!["first\n", "second\n"]);
        assert_eq!(sink.last().as_deref(), Some("second\n"));
        assert_eq!(sink.contents(), "first\nsecond\n");

        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_failing_mode_rejects_writes() {
        let sink = MemorySink::new();
        sink.set_failing(true);
        assert!(matches!(sink.write(b"x"), Err(LoggerError::WriterError(_))));
        assert!(sink.is_empty());

        sink.set_failing(false);
        sink.write(b"y").expect("write");
        assert_eq!(sink.len(), 1);
    }
}
