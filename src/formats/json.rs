//! JSON encoders
//!
//! Both encoders emit the same record: `level`, `level_str`, `timestamp`,
//! `message` and, when the set has live entries, `props`. Property keys are
//! sorted. Serialization failures degrade to an empty payload.

use crate::core::{Formatter, LogLevel, PropertySet, TimestampFormat};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const DEFAULT_INDENT: &str = "\t";

#[derive(Serialize)]
struct JsonRecord<'a> {
    level: u8,
    level_str: String,
    timestamp: String,
    message: &'a str,
    #[serde(skip_serializing_if = "serde_json::Map::is_empty")]
    props: serde_json::Map<String, serde_json::Value>,
}

impl<'a> JsonRecord<'a> {
    fn new(
        timestamp_format: &TimestampFormat,
        now: DateTime<Utc>,
        level: LogLevel,
        message: &'a str,
        props: &PropertySet,
    ) -> Self {
        Self {
            level: level.as_u8(),
            level_str: level.keyword(),
            timestamp: timestamp_format.format(&now),
            message,
            props: props.to_json_map(&[]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonConfig {
    pub timestamp_format: TimestampFormat,
    /// Written at the start of every line but the first (pretty output only)
    pub prefix: String,
    /// One nesting level of indentation (pretty output only)
    pub indent: String,
}

impl Default for JsonConfig {
    fn default() -> Self {
        Self {
            timestamp_format: TimestampFormat::default(),
            prefix: String::new(),
            indent: DEFAULT_INDENT.to_string(),
        }
    }
}

impl JsonConfig {
    #[must_use = "builder methods return a new value"]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }
}

/// Single-line JSON records
///
/// ```
/// use rust_structured_logger::prelude::*;
/// use chrono::{TimeZone, Utc};
///
/// let json = JsonFormat::new(JsonConfig::default());
/// let at = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// let mut props = PropertySet::new(&[Prop::string("k", "v")]);
///
/// let out = json.format_at(at, LogLevel::Error, "failed", &mut props);
/// assert!(out.ends_with(r#""message":"failed","props":{"k":"v"}}"#));
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonFormat {
    config: JsonConfig,
}

impl JsonFormat {
    pub fn new(config: JsonConfig) -> Self {
        Self { config }
    }

    pub fn format_at(
        &self,
        now: DateTime<Utc>,
        level: LogLevel,
        message: &str,
        props: &mut PropertySet,
    ) -> String {
        let record = JsonRecord::new(&self.config.timestamp_format, now, level, message, props);
        serde_json::to_string(&record).unwrap_or_default()
    }
}

impl Formatter for JsonFormat {
    fn format(&self, level: LogLevel, message: &str, props: &mut PropertySet) -> String {
        self.format_at(Utc::now(), level, message, props)
    }
}

/// Indented JSON records, same fields as [`JsonFormat`]
#[derive(Debug, Clone, Default)]
pub struct JsonPrettyFormat {
    config: JsonConfig,
}

impl JsonPrettyFormat {
    pub fn new(config: JsonConfig) -> Self {
        Self { config }
    }

    pub fn format_at(
        &self,
        now: DateTime<Utc>,
        level: LogLevel,
        message: &str,
        props: &mut PropertySet,
    ) -> String {
        let record = JsonRecord::new(&self.config.timestamp_format, now, level, message, props);

        let mut buf = Vec::new();
        let formatter =
            serde_json::ser::PrettyFormatter::with_indent(self.config.indent.as_bytes());
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        if record.serialize(&mut ser).is_err() {
            return String::new();
        }
        let pretty = String::from_utf8(buf).unwrap_or_default();

        if self.config.prefix.is_empty() {
            pretty
        } else {
            pretty.replace('\n', &format!("\n{}", self.config.prefix))
        }
    }
}

impl Formatter for JsonPrettyFormat {
    fn format(&self, level: LogLevel, message: &str, props: &mut PropertySet) -> String {
        self.format_at(Utc::now(), level, message, props)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Prop;
    use chrono::TimeZone;
    use serde_json::Value;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
    }

    #[test]
    fn test_props_omitted_when_empty() {
        let json = JsonFormat::new(JsonConfig::default());
        let mut props = PropertySet::empty();
        let out = json.format_at(at(), LogLevel::Informational, "hello", &mut props);

        assert!(!out.contains("props"), "{}", out);
        assert!(out.starts_with(r#"{"level":6,"level_str":""#), "{}", out);
        assert!(out.ends_with(r#""timestamp":"2025-01-08T10:30:45Z","message":"hello"}"#));
    }

    #[test]
    fn test_props_included_when_present() {
        let json = JsonFormat::new(JsonConfig::default());
        let mut props = PropertySet::new(&[Prop::string("k", "v")]);
        let out = json.format_at(at(), LogLevel::Informational, "hello", &mut props);

        assert!(out.contains(r#""props":{"k":"v"}"#), "{}", out);
    }

    #[test]
    fn test_deleted_props_are_not_emitted() {
        let json = JsonFormat::new(JsonConfig::default());
        let mut props = PropertySet::new(&[Prop::string("gone", "x")]);
        props.delete(&["gone"]);
        let out = json.format_at(at(), LogLevel::Debug, "m", &mut props);

        assert!(!out.contains("props"), "{}", out);
    }

    #[test]
    fn test_typed_values_and_non_finite_float() {
        let json = JsonFormat::new(JsonConfig::default());
        let mut props = PropertySet::new(&[
            Prop::int("n", 3),
            Prop::bool("ok", true),
            Prop::float("nan", f64::NAN),
        ]);
        let out = json.format_at(at(), LogLevel::Debug, "m", &mut props);
        let value: Value = serde_json::from_str(&out).expect("valid json");

        assert_eq!(value["props"]["n"], 3);
        assert_eq!(value["props"]["ok"], true);
        assert_eq!(value["props"]["nan"], Value::Null);
    }

    #[test]
    fn test_pretty_matches_compact_fields() {
        let config = JsonConfig::default().with_timestamp_format(TimestampFormat::UnixMillis);
        let compact = JsonFormat::new(config.clone());
        let pretty = JsonPrettyFormat::new(config);

        let mut a = PropertySet::new(&[Prop::string("z", "1"), Prop::string("a", "2")]);
        let mut b = PropertySet::new(&[Prop::string("z", "1"), Prop::string("a", "2")]);
        let c: Value = serde_json::from_str(&compact.format_at(at(), LogLevel::Alert, "m", &mut a))
            .expect("compact json");
        let p: Value = serde_json::from_str(&pretty.format_at(at(), LogLevel::Alert, "m", &mut b))
            .expect("pretty json");

        assert_eq!(c, p);
    }

    #[test]
    fn test_pretty_uses_tab_indent_by_default() {
        let pretty = JsonPrettyFormat::new(JsonConfig::default());
        let mut props = PropertySet::empty();
        let out = pretty.format_at(at(), LogLevel::Emergency, "m", &mut props);

        assert!(out.starts_with("{\n\t\"level\": 0,\n"), "{}", out);
        assert!(out.ends_with("\n}"));
    }

    #[test]
    fn test_pretty_prefix_on_continuation_lines() {
        let pretty =
            JsonPrettyFormat::new(JsonConfig::default().with_prefix("> ").with_indent("  "));
        let mut props = PropertySet::empty();
        let out = pretty.format_at(at(), LogLevel::Emergency, "m", &mut props);

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "{");
        assert_eq!(lines[1], ">   \"level\": 0,");
        assert_eq!(*lines.last().expect("closing line"), "> }");
    }
}
