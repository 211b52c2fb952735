//! Timestamp formatting utilities
//!
//! Every encoder renders time in UTC. [`TimestampFormat`] covers the layouts
//! the encoders need (RFC 3339 for JSON, key-value and RFC 5424, the BSD
//! `Mmm dd hh:mm:ss` stamp for RFC 3164) plus numeric and custom layouts for
//! JSON and key-value output.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::time::SystemTime;

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use rust_structured_logger::TimestampFormat;
/// use chrono::{TimeZone, Utc};
///
/// let at = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(TimestampFormat::Rfc3339.format(&at), "2025-01-08T10:30:45Z");
/// assert_eq!(TimestampFormat::Stamp.format(&at), "Jan  8 10:30:45");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// RFC 3339 in UTC with second precision: `2025-01-08T10:30:45Z`
    ///
    /// Default for JSON and key-value output, and the only layout RFC 5424
    /// headers use.
    #[default]
    Rfc3339,

    /// RFC 3339 in UTC with as many fractional digits (3, 6 or 9) as needed:
    /// `2025-01-08T10:30:45.123456Z`
    Rfc3339Nanos,

    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    Iso8601,

    /// BSD syslog stamp, day padded with a space: `Jan  8 10:30:45`
    Stamp,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format
    ///
    /// A pattern chrono cannot render (such as `%Q`) falls back to
    /// [`TimestampFormat::Rfc3339`].
    ///
    /// ```
    /// use rust_structured_logger::TimestampFormat;
    ///
    /// // Apache log format
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S %z".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// Format a `DateTime<Utc>` according to this format
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Rfc3339 => datetime.to_rfc3339_opts(SecondsFormat::Secs, true),
            TimestampFormat::Rfc3339Nanos => {
                datetime.to_rfc3339_opts(SecondsFormat::AutoSi, true)
            }
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Stamp => datetime.format("%b %e %H:%M:%S").to_string(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => {
                let mut rendered = String::new();
                if write!(rendered, "{}", datetime.format(format_str)).is_err() {
                    return datetime.to_rfc3339_opts(SecondsFormat::Secs, true);
                }
                rendered
            }
        }
    }

    /// Format a `SystemTime` according to this format
    #[must_use]
    pub fn format_system_time(&self, timestamp: &SystemTime) -> String {
        let datetime: DateTime<Utc> = (*timestamp).into();
        self.format(&datetime)
    }

    /// Check if this is a Unix-based numeric format
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, TimestampFormat::Unix | TimestampFormat::UnixMillis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Utc> {
        // 2025-01-08 10:30:45.123456 UTC
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::microseconds(123456)
    }

    #[test]
    fn test_rfc3339_format() {
        let result = TimestampFormat::Rfc3339.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08T10:30:45Z");
    }

    #[test]
    fn test_rfc3339_nanos_format() {
        let result = TimestampFormat::Rfc3339Nanos.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08T10:30:45.123456Z");
    }

    #[test]
    fn test_iso8601_format() {
        let result = TimestampFormat::Iso8601.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08T10:30:45.123Z");
    }

    #[test]
    fn test_stamp_pads_day_with_space() {
        assert_eq!(TimestampFormat::Stamp.format(&fixed_datetime()), "Jan  8 10:30:45");

        let later = Utc
            .with_ymd_and_hms(2025, 11, 23, 1, 2, 3)
            .single()
            .expect("valid datetime");
        assert_eq!(TimestampFormat::Stamp.format(&later), "Nov 23 01:02:03");
    }

    #[test]
    fn test_unix_formats() {
        let secs: i64 = TimestampFormat::Unix
            .format(&fixed_datetime())
            .parse()
            .expect("valid unix timestamp");
        let millis: i64 = TimestampFormat::UnixMillis
            .format(&fixed_datetime())
            .parse()
            .expect("valid unix millis timestamp");
        assert_eq!(secs, 1736332245);
        assert_eq!(millis, 1736332245123);
    }

    #[test]
    fn test_custom_format() {
        let format = TimestampFormat::Custom("%Y/%m/%d %H:%M".to_string());
        assert_eq!(format.format(&fixed_datetime()), "2025/01/08 10:30");
    }

    #[test]
    fn test_unrenderable_custom_format_falls_back_to_rfc3339() {
        let format = TimestampFormat::Custom("%Q".to_string());
        assert_eq!(format.format(&fixed_datetime()), "2025-01-08T10:30:45Z");
    }

    #[test]
    fn test_default_is_rfc3339() {
        assert_eq!(TimestampFormat::default(), TimestampFormat::Rfc3339);
    }

    #[test]
    fn test_is_numeric() {
        assert!(!TimestampFormat::Rfc3339.is_numeric());
        assert!(!TimestampFormat::Stamp.is_numeric());
        assert!(TimestampFormat::Unix.is_numeric());
        assert!(TimestampFormat::UnixMillis.is_numeric());
    }

    #[test]
    fn test_format_system_time() {
        let result = TimestampFormat::Rfc3339.format_system_time(&SystemTime::now());
        assert!(result.ends_with('Z'));
        assert!(result.contains('T'));
    }

    #[test]
    fn test_serialization_roundtrip() {
        let json = serde_json::to_string(&TimestampFormat::Stamp).expect("serialize");
        assert_eq!(json, "\"Stamp\"");

        let format: TimestampFormat =
            serde_json::from_str(r#"{"Custom":"%Y-%m-%d"}"#).expect("deserialize Custom");
        assert_eq!(format, TimestampFormat::Custom("%Y-%m-%d".to_string()));
    }
}
