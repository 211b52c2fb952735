//! Key-value (logfmt-style) encoder

use crate::core::{Formatter, LogLevel, PropertySet, TimestampFormat};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Quote character used for string property values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuoteStyle {
    #[default]
    Double,
    Single,
}

impl QuoteStyle {
    pub fn quote_char(self) -> char {
        match self {
            QuoteStyle::Double => '"',
            QuoteStyle::Single => '\'',
        }
    }

    /// Wrap `value` in quotes, escaping backslashes and the quote character
    pub fn quote(self, value: &str) -> String {
        let q = self.quote_char();
        let mut out = String::with_capacity(value.len() + 2);
        out.push(q);
        for c in value.chars() {
            if c == '\\' || c == q {
                out.push('\\');
            }
            out.push(c);
        }
        out.push(q);
        out
    }
}

/// Render the live properties as `name=value ` pairs in position order
///
/// Numbers and booleans are bare, everything else is quoted. Each pair is
/// followed by a single space, including the last one.
pub fn format_props(props: &PropertySet, quote: QuoteStyle) -> String {
    let mut out = String::new();
    for prop in props.iter() {
        out.push_str(&prop.name);
        out.push('=');
        if prop.value.is_bare() {
            out.push_str(&prop.value.to_string());
        } else {
            out.push_str(&quote.quote(&prop.value.to_string()));
        }
        out.push(' ');
    }
    out
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KvConfig {
    pub timestamp_format: TimestampFormat,
    /// Quoting for string property values; the message is always double quoted
    pub quote: QuoteStyle,
}

impl KvConfig {
    #[must_use = "builder methods return a new value"]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_quote(mut self, quote: QuoteStyle) -> Self {
        self.quote = quote;
        self
    }
}

/// `level=N timestamp=T message="M" k1=v1 k2="v2"`
///
/// ```
/// use rust_structured_logger::prelude::*;
/// use chrono::{TimeZone, Utc};
///
/// let kv = KvFormat::new(KvConfig::default());
/// let at = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// let mut props = PropertySet::new(&[Prop::int("status", 200), Prop::string("path", "/")]);
///
/// assert_eq!(
///     kv.format_at(at, LogLevel::Notice, "served", &mut props),
///     r#"level=5 timestamp=2025-01-08T10:30:45Z message="served" status=200 path="/" "#
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct KvFormat {
    config: KvConfig,
}

impl KvFormat {
    pub fn new(config: KvConfig) -> Self {
        Self { config }
    }

    pub fn format_at(
        &self,
        now: DateTime<Utc>,
        level: LogLevel,
        message: &str,
        props: &mut PropertySet,
    ) -> String {
        format!(
            "level={} timestamp={} message={} {}",
            level.as_u8(),
            self.config.timestamp_format.format(&now),
            QuoteStyle::Double.quote(message),
            format_props(props, self.config.quote)
        )
    }
}

impl Formatter for KvFormat {
    fn format(&self, level: LogLevel, message: &str, props: &mut PropertySet) -> String {
        self.format_at(Utc::now(), level, message, props)
    }
}
