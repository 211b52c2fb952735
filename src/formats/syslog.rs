//! Syslog encoders (RFC 3164 and RFC 5424)
//!
//! Header fields resolve in this order: a reserved property on the log call,
//! then the configured value, then a computed fallback. Reserved properties
//! are removed from the set before the remaining ("residual") properties are
//! appended to the message.

use super::kv::{format_props, QuoteStyle};
use crate::core::{
    Formatter, LogLevel, LoggerError, PropValue, PropertySet, Result, TimestampFormat,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Property overriding the HOSTNAME header field
pub const SYSLOG_HOSTNAME: &str = "log_syslog_hostname";
/// Property overriding the RFC 5424 APP-NAME header field
pub const SYSLOG_APPNAME: &str = "log_syslog_appname";
/// Property overriding the RFC 3164 TAG and the RFC 5424 MSGID
pub const SYSLOG_TAG: &str = "log_syslog_TAG";

const RESERVED: [&str; 3] = [SYSLOG_HOSTNAME, SYSLOG_APPNAME, SYSLOG_TAG];

/// RFC 5424 NILVALUE, used when no hostname can be determined
pub const NILVALUE: &str = "-";

const DEFAULT_NAME: &str = "log";
const DEFAULT_FACILITY: u8 = 1;
const MAX_FACILITY: u8 = 23;

/// How properties left after header resolution are added to the message
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResidualProps {
    /// `message k1="v1" k2=2`
    #[default]
    KeyValue,
    /// `message {"k1":"v1","k2":2}`, nothing appended when empty
    Json,
    /// Residual properties are dropped
    Ignore,
}

impl ResidualProps {
    pub fn apply(self, message: &str, props: &PropertySet) -> String {
        match self {
            ResidualProps::KeyValue => {
                format!("{} {}", message, format_props(props, QuoteStyle::Double))
            }
            ResidualProps::Json => {
                let map = props.to_json_map(&[]);
                if map.is_empty() {
                    return message.to_string();
                }
                match serde_json::to_string(&map) {
                    Ok(raw) => format!("{} {}", message, raw),
                    Err(_) => message.to_string(),
                }
            }
            ResidualProps::Ignore => message.to_string(),
        }
    }
}

/// Configured header defaults shared by both syslog encoders
///
/// Unset or empty fields fall back to computed values: the machine hostname,
/// `log` for the app name and tag, and facility 1 (user-level).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyslogConfig {
    pub hostname: Option<String>,
    pub app_name: Option<String>,
    /// TAG for RFC 3164, MSGID for RFC 5424
    pub tag: Option<String>,
    /// 1 to 23; 0 (kernel) is reserved
    pub facility: Option<u8>,
    /// RFC 3339 timestamps in RFC 3164 output
    pub detailed_time: bool,
    pub residual: ResidualProps,
}

impl SyslogConfig {
    #[must_use = "builder methods return a new value"]
    pub fn with_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_facility(mut self, facility: u8) -> Self {
        self.facility = Some(facility);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_detailed_time(mut self, detailed: bool) -> Self {
        self.detailed_time = detailed;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn with_residual(mut self, residual: ResidualProps) -> Self {
        self.residual = residual;
        self
    }

    fn resolve(&self, component: &str) -> Result<SyslogHeader> {
        let facility = match self.facility {
            None => DEFAULT_FACILITY,
            Some(0) => {
                return Err(LoggerError::config(
                    component,
                    "facility 0 (kernel) may not be used",
                ))
            }
            Some(f) if f > MAX_FACILITY => {
                return Err(LoggerError::config(
                    component,
                    format!("facility {} is out of range 1..={}", f, MAX_FACILITY),
                ))
            }
            Some(f) => f,
        };

        Ok(SyslogHeader {
            hostname: non_empty(&self.hostname).unwrap_or_else(|| machine_hostname().to_string()),
            app_name: non_empty(&self.app_name).unwrap_or_else(|| DEFAULT_NAME.to_string()),
            tag: non_empty(&self.tag).unwrap_or_else(|| DEFAULT_NAME.to_string()),
            facility,
            detailed_time: self.detailed_time,
            residual: self.residual,
        })
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_deref().filter(|s| !s.is_empty()).map(str::to_string)
}

/// Hostname of this machine, looked up once per process
pub fn machine_hostname() -> &'static str {
    static HOSTNAME: OnceLock<String> = OnceLock::new();
    HOSTNAME.get_or_init(|| {
        hostname::get()
            .ok()
            .and_then(|name| name.into_string().ok())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| NILVALUE.to_string())
    })
}

#[derive(Debug, Clone)]
struct SyslogHeader {
    hostname: String,
    app_name: String,
    tag: String,
    facility: u8,
    detailed_time: bool,
    residual: ResidualProps,
}

impl SyslogHeader {
    fn pri(&self, level: LogLevel) -> u16 {
        8 * u16::from(self.facility) + u16::from(level.as_u8())
    }
}

fn reserved(props: &PropertySet, name: &str) -> Option<String> {
    props.get(name).and_then(PropValue::as_str).map(str::to_string)
}

/// BSD syslog: `<PRI>TIMESTAMP HOSTNAME TAG: MESSAGE`
///
/// ```
/// use rust_structured_logger::prelude::*;
/// use chrono::{TimeZone, Utc};
///
/// let syslog = Syslog3164Format::new(SyslogConfig::default().with_hostname("web-1"))?;
/// let at = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// let mut props = PropertySet::new(&[Prop::string("detail", "x")]);
///
/// let line = syslog.format_at(at, LogLevel::Informational, "test log", &mut props);
/// assert_eq!(
///     normalize_whitespace(&line),
///     "<14>Jan  8 10:30:45 web-1 log: test log detail=\"x\"\n"
/// );
/// # Ok::<(), rust_structured_logger::LoggerError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Syslog3164Format {
    header: SyslogHeader,
}

impl Syslog3164Format {
    /// Fails when the configured facility is 0 or above 23
    pub fn new(config: SyslogConfig) -> Result<Self> {
        Ok(Self {
            header: config.resolve("Syslog3164Format")?,
        })
    }

    pub fn format_at(
        &self,
        now: DateTime<Utc>,
        level: LogLevel,
        message: &str,
        props: &mut PropertySet,
    ) -> String {
        let timestamp = if self.header.detailed_time {
            TimestampFormat::Rfc3339.format(&now)
        } else {
            TimestampFormat::Stamp.format(&now)
        };
        let hostname =
            reserved(props, SYSLOG_HOSTNAME).unwrap_or_else(|| self.header.hostname.clone());
        let tag = reserved(props, SYSLOG_TAG).unwrap_or_else(|| self.header.tag.clone());

        props.delete(&RESERVED);
        let message = self.header.residual.apply(message, props);

        format!(
            "<{}>{} {} {}: {}",
            self.header.pri(level),
            timestamp,
            hostname,
            tag,
            message
        )
    }
}

impl Formatter for Syslog3164Format {
    fn format(&self, level: LogLevel, message: &str, props: &mut PropertySet) -> String {
        self.format_at(Utc::now(), level, message, props)
    }
}

/// IETF syslog: `<PRI>1 TIMESTAMP HOSTNAME APP-NAME PROCID MSGID - MESSAGE`
///
/// Structured data is never emitted.
#[derive(Debug, Clone)]
pub struct Syslog5424Format {
    header: SyslogHeader,
}

impl Syslog5424Format {
    /// Fails when the configured facility is 0 or above 23
    pub fn new(config: SyslogConfig) -> Result<Self> {
        Ok(Self {
            header: config.resolve("Syslog5424Format")?,
        })
    }

    pub fn format_at(
        &self,
        now: DateTime<Utc>,
        level: LogLevel,
        message: &str,
        props: &mut PropertySet,
    ) -> String {
        let hostname =
            reserved(props, SYSLOG_HOSTNAME).unwrap_or_else(|| self.header.hostname.clone());
        let app_name =
            reserved(props, SYSLOG_APPNAME).unwrap_or_else(|| self.header.app_name.clone());
        let msg_id = reserved(props, SYSLOG_TAG).unwrap_or_else(|| self.header.tag.clone());

        props.delete(&RESERVED);
        let message = self.header.residual.apply(message, props);

        format!(
            "<{}>1 {} {} {} {} {} - {}",
            self.header.pri(level),
            TimestampFormat::Rfc3339.format(&now),
            hostname,
            app_name,
            std::process::id(),
            msg_id,
            message
        )
    }
}

impl Formatter for Syslog5424Format {
    fn format(&self, level: LogLevel, message: &str, props: &mut PropertySet) -> String {
        self.format_at(Utc::now(), level, message, props)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{normalize_whitespace, Prop};
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
    }

    fn host_config() -> SyslogConfig {
        SyslogConfig::default().with_hostname("host")
    }

    #[test]
    fn test_3164_default_layout() {
        let syslog = Syslog3164Format::new(host_config()).expect("valid config");
        let mut props = PropertySet::new(&[Prop::string("detail", "x")]);
        let line = syslog.format_at(at(), LogLevel::Informational, "test log", &mut props);

        assert_eq!(
            normalize_whitespace(&line),
            "<14>Jan  8 10:30:45 host log: test log detail=\"x\"\n"
        );
    }

    #[test]
    fn test_3164_detailed_time() {
        let syslog = Syslog3164Format::new(host_config().with_detailed_time(true).with_tag("app"))
            .expect("valid config");
        let mut props = PropertySet::empty();
        let line = syslog.format_at(at(), LogLevel::Error, "m", &mut props);

        assert_eq!(normalize_whitespace(&line), "<11>2025-01-08T10:30:45Z host app: m\n");
    }

    #[test]
    fn test_3164_reserved_props_override_and_do_not_leak() {
        let syslog =
            Syslog3164Format::new(host_config().with_tag("cfg-tag")).expect("valid config");
        let mut props = PropertySet::new(&[
            Prop::string(SYSLOG_HOSTNAME, "custom-host"),
            Prop::string(SYSLOG_TAG, "prop-tag"),
            Prop::string(SYSLOG_APPNAME, "unused-in-3164"),
            Prop::int("code", 7),
        ]);
        let line = syslog.format_at(at(), LogLevel::Notice, "msg", &mut props);

        assert_eq!(
            normalize_whitespace(&line),
            "<13>Jan  8 10:30:45 custom-host prop-tag: msg code=7\n"
        );
        assert!(!line.contains("log_syslog"));
    }

    #[test]
    fn test_non_string_reserved_prop_is_ignored() {
        let syslog = Syslog3164Format::new(host_config()).expect("valid config");
        let mut props = PropertySet::new(&[Prop::int(SYSLOG_HOSTNAME, 1)]);
        let line = syslog.format_at(at(), LogLevel::Notice, "msg", &mut props);

        assert!(line.contains(" host log: msg"), "{}", line);
    }

    #[test]
    fn test_5424_layout() {
        let syslog = Syslog5424Format::new(host_config().with_app_name("svc").with_tag("req-1"))
            .expect("valid config");
        let mut props = PropertySet::empty();
        let line = syslog.format_at(at(), LogLevel::Error, "message", &mut props);

        let expected = format!(
            "<11>1 2025-01-08T10:30:45Z host svc {} req-1 - message\n",
            std::process::id()
        );
        assert_eq!(normalize_whitespace(&line), expected);
    }

    #[test]
    fn test_5424_ignores_detailed_time() {
        let syslog = Syslog5424Format::new(host_config().with_detailed_time(false))
            .expect("valid config");
        let mut props = PropertySet::empty();
        let line = syslog.format_at(at(), LogLevel::Debug, "m", &mut props);

        assert!(line.starts_with("<15>1 2025-01-08T10:30:45Z host log "), "{}", line);
    }

    #[test]
    fn test_5424_reserved_appname() {
        let syslog =
            Syslog5424Format::new(host_config().with_app_name("svc")).expect("valid config");
        let mut props = PropertySet::new(&[Prop::string(SYSLOG_APPNAME, "worker")]);
        let line = syslog.format_at(at(), LogLevel::Debug, "m", &mut props);

        assert!(line.contains(" host worker "), "{}", line);
        assert!(!line.contains("svc"));
    }

    #[test]
    fn test_facility_validation() {
        let zero = Syslog3164Format::new(SyslogConfig::default().with_facility(0));
        assert!(matches!(zero, Err(LoggerError::InvalidConfiguration { .. })));

        let too_big = Syslog5424Format::new(SyslogConfig::default().with_facility(24));
        assert!(matches!(too_big, Err(LoggerError::InvalidConfiguration { .. })));

        let local0 =
            Syslog3164Format::new(host_config().with_facility(16)).expect("valid facility");
        let mut props = PropertySet::empty();
        assert!(local0
            .format_at(at(), LogLevel::Warning, "m", &mut props)
            .starts_with("<132>"));
    }

    #[test]
    fn test_residual_json_and_ignore() {
        let json = Syslog3164Format::new(host_config().with_residual(ResidualProps::Json))
            .expect("valid config");
        let mut props = PropertySet::new(&[Prop::string("b", "2"), Prop::int("a", 1)]);
        let line = json.format_at(at(), LogLevel::Informational, "m", &mut props);
        assert!(line.ends_with(r#": m {"a":1,"b":"2"}"#), "{}", line);

        let mut empty = PropertySet::new(&[Prop::string(SYSLOG_TAG, "t")]);
        let line = json.format_at(at(), LogLevel::Informational, "m", &mut empty);
        assert!(line.ends_with("t: m"), "{}", line);

        let ignore = Syslog3164Format::new(host_config().with_residual(ResidualProps::Ignore))
            .expect("valid config");
        let mut props = PropertySet::new(&[Prop::string("k", "v")]);
        let line = ignore.format_at(at(), LogLevel::Informational, "m", &mut props);
        assert!(line.ends_with("log: m"), "{}", line);
    }

    #[test]
    fn test_empty_configured_values_fall_back() {
        let syslog = Syslog5424Format::new(SyslogConfig {
            hostname: Some(String::new()),
            app_name: Some(String::new()),
            ..SyslogConfig::default()
        })
        .expect("valid config");
        let mut props = PropertySet::empty();
        let line = syslog.format_at(at(), LogLevel::Debug, "m", &mut props);

        let expected = format!("<15>1 2025-01-08T10:30:45Z {} log ", machine_hostname());
        assert!(line.starts_with(&expected), "{}", line);
    }

    #[test]
    fn test_machine_hostname_is_stable() {
        let first = machine_hostname();
        assert!(!first.is_empty());
        assert_eq!(first, machine_hostname());
    }
}
