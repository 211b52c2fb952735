//! Synchronous sink over any `io::Write`

use crate::core::{LoggerError, Result, Sink};
use parking_lot::Mutex;
use std::io::{self, Write};

/// Writes each record straight to the wrapped writer under a lock
///
/// ```
/// use rust_structured_logger::prelude::*;
///
/// let sink = WriterSink::new(Vec::<u8>::new(), "buffer");
/// sink.write(b"hello\n")?;
/// assert_eq!(sink.into_inner(), b"hello\n");
/// # Ok::<(), rust_structured_logger::LoggerError>(())
/// ```
pub struct WriterSink<W: Write + Send> {
    writer: Mutex<W>,
    name: String,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W, name: impl Into<String>) -> Self {
        Self {
            writer: Mutex::new(writer),
            name: name.into(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl WriterSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout(), "stdout")
    }
}

impl WriterSink<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr(), "stderr")
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn write(&self, record: &[u8]) -> Result<()> {
        self.writer
            .lock()
            .write_all(record)
            .map_err(|e| LoggerError::io_operation("writing record", self.name.clone(), e))
    }

    fn flush(&self) -> Result<()> {
        self.writer
            .lock()
            .flush()
            .map_err(|e| LoggerError::io_operation("flushing", self.name.clone(), e))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
