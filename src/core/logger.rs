//! Main logger implementation

use super::{
    error::{LoggerError, Result},
    formatter::Formatter,
    log_level::LogLevel,
    property::Prop,
    property_set::PropertySet,
    sink::Sink,
};
use std::fmt;
use std::io;
use std::sync::Arc;

/// Leveled logging contract shared by [`Logger`] and [`MultiLogger`]
///
/// [`MultiLogger`]: crate::MultiLogger
pub trait Log: Send + Sync {
    /// Replace the whole configuration
    fn configure(&mut self, config: LoggerConfig) -> Result<()>;

    /// Log `message` at `level` with the given properties
    ///
    /// Messages less urgent than the configured maximum are dropped and
    /// reported as `Ok(())`.
    fn log(&self, level: LogLevel, message: &str, props: &[Prop]) -> Result<()>;

    /// Write `bytes` as one message at the default level, bypassing the
    /// severity gate. Returns the number of input bytes consumed.
    fn write_raw(&self, bytes: &[u8]) -> Result<usize>;

    /// Flush whatever sinks sit behind this logger
    fn flush(&self) -> Result<()>;

    fn emergency(&self, message: &str, props: &[Prop]) -> Result<()> {
        self.log(LogLevel::Emergency, message, props)
    }

    fn alert(&self, message: &str, props: &[Prop]) -> Result<()> {
        self.log(LogLevel::Alert, message, props)
    }

    fn critical(&self, message: &str, props: &[Prop]) -> Result<()> {
        self.log(LogLevel::Critical, message, props)
    }

    fn error(&self, message: &str, props: &[Prop]) -> Result<()> {
        self.log(LogLevel::Error, message, props)
    }

    fn warning(&self, message: &str, props: &[Prop]) -> Result<()> {
        self.log(LogLevel::Warning, message, props)
    }

    fn notice(&self, message: &str, props: &[Prop]) -> Result<()> {
        self.log(LogLevel::Notice, message, props)
    }

    fn info(&self, message: &str, props: &[Prop]) -> Result<()> {
        self.log(LogLevel::Informational, message, props)
    }

    fn debug(&self, message: &str, props: &[Prop]) -> Result<()> {
        self.log(LogLevel::Debug, message, props)
    }
}

/// Logger configuration
///
/// `max_level` is the least urgent level still written; it defaults to
/// [`LogLevel::Debug`] so nothing is filtered. `default_level` is used by
/// [`Log::write_raw`].
#[derive(Clone)]
pub struct LoggerConfig {
    pub max_level: LogLevel,
    pub default_level: LogLevel,
    pub formatter: Option<Arc<dyn Formatter>>,
    pub sink: Option<Arc<dyn Sink>>,
}

impl LoggerConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_level: LogLevel::LEAST_SEVERE,
            default_level: LogLevel::Informational,
            formatter: None,
            sink: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_max_level(mut self, level: LogLevel) -> Self {
        self.max_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_default_level(mut self, level: LogLevel) -> Self {
        self.default_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_formatter<F: Formatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_shared_formatter(mut self, formatter: Arc<dyn Formatter>) -> Self {
        self.formatter = Some(formatter);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    /// Use a sink that other loggers also write to
    #[must_use = "builder methods return a new value"]
    pub fn with_shared_sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sink = Some(sink);
        self
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LoggerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerConfig")
            .field("max_level", &self.max_level)
            .field("default_level", &self.default_level)
            .field("formatter", &self.formatter.is_some())
            .field("sink", &self.sink.as_ref().map(|s| s.name()))
            .finish()
    }
}

/// Validated configuration: formatter and sink are both present
#[derive(Clone)]
struct ActiveConfig {
    max_level: LogLevel,
    default_level: LogLevel,
    formatter: Arc<dyn Formatter>,
    sink: Arc<dyn Sink>,
}

impl TryFrom<LoggerConfig> for ActiveConfig {
    type Error = LoggerError;

    fn try_from(config: LoggerConfig) -> Result<Self> {
        let sink = config.sink.ok_or(LoggerError::MissingSink)?;
        let formatter = config.formatter.ok_or(LoggerError::MissingFormatter)?;
        Ok(Self {
            max_level: config.max_level,
            default_level: config.default_level,
            formatter,
            sink,
        })
    }
}

enum LoggerState {
    Configured(ActiveConfig),
    Unconfigured,
}

/// Severity-gated logger writing one formatter's output to one sink
///
/// # Example
///
/// ```
/// use rust_structured_logger::prelude::*;
/// use std::sync::Arc;
///
/// let sink = Arc::new(MemorySink::new());
/// let logger = Logger::builder()
///     .max_level(LogLevel::Informational)
///     .formatter(KvFormat::new(KvConfig::default()))
///     .shared_sink(sink.clone())
///     .build()?;
///
/// logger.info("user login", &[Prop::string("user", "alice")])?;
/// logger.debug("filtered out", &[])?;
///
/// assert_eq!(sink.len(), 1);
/// assert!(sink.contents().contains(r#"message="user login" user="alice""#));
/// # Ok::<(), rust_structured_logger::LoggerError>(())
/// ```
pub struct Logger {
    state: LoggerState,
}

impl Logger {
    /// Create a configured logger
    ///
    /// Fails with [`LoggerError::MissingSink`] or
    /// [`LoggerError::MissingFormatter`], sink checked first.
    pub fn new(config: LoggerConfig) -> Result<Self> {
        Ok(Self {
            state: LoggerState::Configured(ActiveConfig::try_from(config)?),
        })
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn is_configured(&self) -> bool {
        matches!(self.state, LoggerState::Configured(_))
    }

    /// Least urgent level still written, if configured
    pub fn max_level(&self) -> Option<LogLevel> {
        self.active().ok().map(|active| active.max_level)
    }

    /// Whether a message at `level` would pass the severity gate
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.max_level().is_some_and(|max| level.passes(max))
    }

    /// Flush the configured sink
    pub fn flush(&self) -> Result<()> {
        self.active()?.sink.flush()
    }

    fn active(&self) -> Result<&ActiveConfig> {
        match &self.state {
            LoggerState::Configured(active) => Ok(active),
            LoggerState::Unconfigured => Err(LoggerError::NotConfigured),
        }
    }

    fn emit(active: &ActiveConfig, level: LogLevel, message: &str, props: &[Prop]) -> Result<()> {
        let mut set = PropertySet::new(props);
        let payload = active.formatter.format_and_normalize(level, message, &mut set);
        set.release();
        active.sink.write(payload.as_bytes())
    }
}

impl Log for Logger {
    /// Replace the configuration; on failure the logger is left unconfigured
    fn configure(&mut self, config: LoggerConfig) -> Result<()> {
        match ActiveConfig::try_from(config) {
            Ok(active) => {
                self.state = LoggerState::Configured(active);
                Ok(())
            }
            Err(e) => {
                self.state = LoggerState::Unconfigured;
                Err(e)
            }
        }
    }

    fn log(&self, level: LogLevel, message: &str, props: &[Prop]) -> Result<()> {
        let active = self.active()?;
        if !level.passes(active.max_level) {
            return Ok(());
        }
        Self::emit(active, level, message, props)
    }

    fn write_raw(&self, bytes: &[u8]) -> Result<usize> {
        let active = self.active()?;
        let message = String::from_utf8_lossy(bytes);
        Self::emit(active, active.default_level, &message, &[])?;
        Ok(bytes.len())
    }

    fn flush(&self) -> Result<()> {
        Logger::flush(self)
    }
}

impl io::Write for Logger {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_raw(buf).map_err(io::Error::other)
    }

    fn flush(&mut self) -> io::Result<()> {
        Logger::flush(self).map_err(io::Error::other)
    }
}

/// Builder for constructing Logger with a fluent API
pub struct LoggerBuilder {
    config: LoggerConfig,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::new(),
        }
    }

    /// Set the least urgent level still written
    #[must_use = "builder methods return a new value"]
    pub fn max_level(mut self, level: LogLevel) -> Self {
        self.config.max_level = level;
        self
    }

    /// Set the level used for raw writes
    #[must_use = "builder methods return a new value"]
    pub fn default_level(mut self, level: LogLevel) -> Self {
        self.config.default_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn formatter<F: Formatter + 'static>(mut self, formatter: F) -> Self {
        self.config = self.config.with_formatter(formatter);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.config = self.config.with_sink(sink);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn shared_sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.config = self.config.with_shared_sink(sink);
        self
    }

    /// The configuration built so far
    pub fn config(self) -> LoggerConfig {
        self.config
    }

    pub fn build(self) -> Result<Logger> {
        Logger::new(self.config)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
