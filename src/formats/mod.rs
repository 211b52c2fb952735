//! Wire-format encoders
//!
//! Each encoder implements [`Formatter`](crate::Formatter) and also exposes
//! `format_at`, which takes the record time explicitly.

pub mod json;
pub mod kv;
pub mod syslog;

pub use json::{JsonConfig, JsonFormat, JsonPrettyFormat};
pub use kv::{format_props, KvConfig, KvFormat, QuoteStyle};
pub use syslog::{
    machine_hostname, ResidualProps, Syslog3164Format, Syslog5424Format, SyslogConfig, NILVALUE,
    SYSLOG_APPNAME, SYSLOG_HOSTNAME, SYSLOG_TAG,
};
