//! Fan-out over several independently configured loggers

use super::{
    error::{LoggerError, Result},
    log_level::LogLevel,
    logger::{Log, LoggerConfig},
    property::Prop,
};
use std::io;

/// Forwards every call to each child logger, in order
///
/// Each child keeps its own level gate, formatter and sink. A failing child
/// does not stop the others; all failures come back together as
/// [`LoggerError::Aggregate`].
///
/// ```
/// use rust_structured_logger::prelude::*;
/// use std::sync::Arc;
///
/// let audit = Arc::new(MemorySink::new());
/// let debug = Arc::new(MemorySink::new());
///
/// let multi = MultiLogger::new()
///     .with(presets::kv(audit.clone(), LogLevel::Warning)?)
///     .with(presets::json(debug.clone(), LogLevel::Debug)?);
///
/// multi.info("cache warm", &[])?;
/// multi.error("cache miss storm", &[])?;
///
/// assert_eq!(audit.len(), 1);
/// assert_eq!(debug.len(), 2);
/// # Ok::<(), rust_structured_logger::LoggerError>(())
/// ```
#[derive(Default)]
pub struct MultiLogger {
    children: Vec<Box<dyn Log>>,
}

impl MultiLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_loggers(children: Vec<Box<dyn Log>>) -> Self {
        Self { children }
    }

    #[must_use = "builder methods return a new value"]
    pub fn with<L: Log + 'static>(mut self, logger: L) -> Self {
        self.children.push(Box::new(logger));
        self
    }

    pub fn push<L: Log + 'static>(&mut self, logger: L) {
        self.children.push(Box::new(logger));
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    fn each<F>(&self, mut call: F) -> Result<()>
    where
        F: FnMut(&dyn Log) -> Result<()>,
    {
        let errors: Vec<LoggerError> = self
            .children
            .iter()
            .filter_map(|child| call(child.as_ref()).err())
            .collect();
        match LoggerError::aggregate(errors) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl Log for MultiLogger {
    /// Always fails: children are configured individually
    fn configure(&mut self, _config: LoggerConfig) -> Result<()> {
        Err(LoggerError::MultiConfigure)
    }

    fn log(&self, level: LogLevel, message: &str, props: &[Prop]) -> Result<()> {
        self.each(|child| child.log(level, message, props))
    }

    fn write_raw(&self, bytes: &[u8]) -> Result<usize> {
        self.each(|child| child.write_raw(bytes).map(|_| ()))?;
        Ok(bytes.len())
    }

    /// Flush every child, aggregating failures like [`Log::log`]
    fn flush(&self) -> Result<()> {
        self.each(|child| child.flush())
    }
}

impl io::Write for MultiLogger {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_raw(buf).map_err(io::Error::other)
    }

    fn flush(&mut self) -> io::Result<()> {
        Log::flush(self).map_err(io::Error::other)
    }
}
