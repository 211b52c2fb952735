//! Core logger types and traits

pub mod error;
pub mod formatter;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod multi_logger;
pub mod property;
pub mod property_set;
pub mod sink;
pub mod timestamp;

pub use error::{LoggerError, Result};
pub use formatter::{normalize_whitespace, Formatter};
pub use log_level::{
    keywords, set_keywords, use_all_caps_keywords, use_syslog_keywords, Keywords, LogLevel,
};
pub use logger::{Log, Logger, LoggerBuilder, LoggerConfig};
pub use metrics::SinkMetrics;
pub use multi_logger::MultiLogger;
pub use property::{Prop, PropValue};
pub use property_set::{PropertySet, MAX_POOLED_SETS};
pub use sink::Sink;
pub use timestamp::TimestampFormat;
