//! # Rust Structured Logger
//!
//! A structured logging pipeline: messages carry a severity and named, typed
//! properties, pass a severity gate, are rendered by a pluggable format and
//! written to a sink.
//!
//! ## Features
//!
//! - **Formats**: syslog (RFC 3164 and RFC 5424), JSON, pretty JSON, key-value
//! - **Pooled properties**: per-call property sets are recycled through a shared pool
//! - **Fan-out**: `MultiLogger` forwards to several loggers and aggregates their errors
//! - **Async file sink**: bounded queue, one writer thread, drain on shutdown
//!
//! ## Example
//!
//! ```
//! use rust_structured_logger::prelude::*;
//! use std::sync::Arc;
//!
//! let sink = Arc::new(MemorySink::new());
//! let logger = Logger::builder()
//!     .max_level(LogLevel::Informational)
//!     .formatter(Syslog5424Format::new(
//!         SyslogConfig::default().with_app_name("billing").with_tag("invoice"),
//!     )?)
//!     .shared_sink(sink.clone())
//!     .build()?;
//!
//! logger.info("invoice sent", &[Prop::string("customer", "acme"), Prop::uint("total", 1200)])?;
//!
//! let line = sink.last().unwrap();
//! assert!(line.starts_with("<14>1 "));
//! assert!(line.ends_with("invoice - invoice sent customer=\"acme\" total=1200\n"));
//! # Ok::<(), rust_structured_logger::LoggerError>(())
//! ```

pub mod core;
pub mod formats;
pub mod macros;
pub mod presets;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        normalize_whitespace, Formatter, Keywords, Log, LogLevel, Logger, LoggerBuilder,
        LoggerConfig, LoggerError, MultiLogger, Prop, PropValue, PropertySet, Result, Sink,
        SinkMetrics, TimestampFormat,
    };
    pub use crate::formats::{
        JsonConfig, JsonFormat, JsonPrettyFormat, KvConfig, KvFormat, QuoteStyle, ResidualProps,
        Syslog3164Format, Syslog5424Format, SyslogConfig, SYSLOG_APPNAME, SYSLOG_HOSTNAME,
        SYSLOG_TAG,
    };
    pub use crate::presets;
    pub use crate::sinks::{FileSink, MemorySink, WriterSink, DEFAULT_SHUTDOWN_TIMEOUT};
}

pub use crate::core::{
    keywords, normalize_whitespace, set_keywords, use_all_caps_keywords, use_syslog_keywords,
    Formatter, Keywords, Log, LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError,
    MultiLogger, Prop, PropValue, PropertySet, Result, Sink, SinkMetrics, TimestampFormat,
    MAX_POOLED_SETS,
};
pub use crate::formats::{
    JsonConfig, JsonFormat, JsonPrettyFormat, KvConfig, KvFormat, QuoteStyle, ResidualProps,
    Syslog3164Format, Syslog5424Format, SyslogConfig, SYSLOG_APPNAME, SYSLOG_HOSTNAME, SYSLOG_TAG,
};
pub use crate::sinks::{FileSink, MemorySink, WriterSink, DEFAULT_SHUTDOWN_TIMEOUT};
