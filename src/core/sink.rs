//! Sink trait for log output destinations

use super::error::Result;
use std::sync::Arc;

/// Byte destination for formatted records
///
/// `write` receives one complete, normalized record per call and takes
/// `&self`: a logger may be driven from several threads at once, and the
/// sink is responsible for keeping each record's bytes together.
pub trait Sink: Send + Sync {
    fn write(&self, record: &[u8]) -> Result<()>;

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;
}

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn write(&self, record: &[u8]) -> Result<()> {
        (**self).write(record)
    }

    fn flush(&self) -> Result<()> {
        (**self).flush()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::MemorySink;

    #[test]
    fn test_arc_forwards_to_inner_sink() {
        let inner = Arc::new(MemorySink::new());
        let shared: Arc<dyn Sink> = inner.clone();

        shared.write(b"one\n").expect("write");
        shared.flush().expect("flush");

        assert_eq!(shared.name(), "memory");
        assert_eq!(inner.records(), vec!["one\n".to_string()]);
    }
}
