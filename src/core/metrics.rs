//! Sink metrics for observability
//!
//! Counters for sinks that write on a background thread, where a failed
//! write cannot be reported back to the caller that produced the record.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for sink observability
///
/// # Example
///
/// ```
/// use rust_structured_logger::SinkMetrics;
///
/// let metrics = SinkMetrics::new();
/// metrics.record_written(42);
/// metrics.record_failed();
///
/// assert_eq!(metrics.records_written(), 1);
/// assert_eq!(metrics.bytes_written(), 42);
/// assert_eq!(metrics.write_failures(), 1);
/// ```
#[derive(Debug)]
pub struct SinkMetrics {
    /// Records accepted into the sink's queue
    records_queued: AtomicU64,

    /// Records written to the underlying writer
    records_written: AtomicU64,

    /// Bytes written to the underlying writer
    bytes_written: AtomicU64,

    /// Records the underlying writer rejected
    write_failures: AtomicU64,
}

impl SinkMetrics {
    pub const fn new() -> Self {
        Self {
            records_queued: AtomicU64::new(0),
            records_written: AtomicU64::new(0),
            bytes_written: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn records_queued(&self) -> u64 {
        self.records_queued.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn records_written(&self) -> u64 {
        self.records_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_queued(&self) {
        self.records_queued.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_written(&self, bytes: usize) {
        self.records_written.fetch_add(1, Ordering::Relaxed);
        self.bytes_written.fetch_add(bytes as u64, Ordering::Relaxed);
    }

    /// Record a failed write, returning the previous failure count
    #[inline]
    pub fn record_failed(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Records accepted but not yet written or failed
    pub fn pending(&self) -> u64 {
        self.records_queued()
            .saturating_sub(self.records_written() + self.write_failures())
    }

    /// Failure rate as a percentage (0.0 - 100.0)
    pub fn failure_rate(&self) -> f64 {
        let failed = self.write_failures() as f64;
        let total = self.records_written() as f64 + failed;
        if total == 0.0 {
            0.0
        } else {
            (failed / total) * 100.0
        }
    }
}

impl Default for SinkMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for SinkMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            records_queued: AtomicU64::new(self.records_queued()),
            records_written: AtomicU64::new(self.records_written()),
            bytes_written: AtomicU64::new(self.bytes_written()),
            write_failures: AtomicU64::new(self.write_failures()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = SinkMetrics::new();
        assert_eq!(metrics.records_queued(), 0);
        assert_eq!(metrics.records_written(), 0);
        assert_eq!(metrics.bytes_written(), 0);
        assert_eq!(metrics.write_failures(), 0);
    }

    #[test]
    fn test_metrics_pending() {
        let metrics = SinkMetrics::new();
        metrics.record_queued();
        metrics.record_queued();
        metrics.record_queued();
        metrics.record_written(10);
        metrics.record_failed();
        assert_eq!(metrics.pending(), 1);
    }

    #[test]
    fn test_metrics_record_failed_returns_previous() {
        let metrics = SinkMetrics::new();
        assert_eq!(metrics.record_failed(), 0);
        assert_eq!(metrics.record_failed(), 1);
        assert_eq!(metrics.write_failures(), 2);
    }

    #[test]
    fn test_metrics_failure_rate() {
        let metrics = SinkMetrics::new();
        assert_eq!(metrics.failure_rate(), 0.0);

        for _ in 0..90 {
            metrics.record_written(1);
        }
        for _ in 0..10 {
            metrics.record_failed();
        }
        let rate = metrics.failure_rate();
        assert!((9.9..=10.1).contains(&rate), "Failure rate was {}", rate);
    }

    #[test]
    fn test_metrics_clone_is_snapshot() {
        let metrics = SinkMetrics::new();
        metrics.record_written(5);

        let snapshot = metrics.clone();
        metrics.record_written(5);

        assert_eq!(snapshot.records_written(), 1);
        assert_eq!(metrics.records_written(), 2);
        assert_eq!(metrics.bytes_written(), 10);
    }
}
