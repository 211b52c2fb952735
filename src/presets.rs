//! Ready-made loggers for the bundled formats
//!
//! Each preset writes to `sink`, drops messages less urgent than `max_level`
//! and uses [`LogLevel::Informational`] for raw writes. Use
//! [`Logger::builder`] when more control is needed.

use crate::core::{LogLevel, Logger, Result, Sink};
use crate::formats::{
    JsonConfig, JsonFormat, JsonPrettyFormat, KvConfig, KvFormat, Syslog3164Format,
    Syslog5424Format, SyslogConfig,
};

/// RFC 3164 logger with a default `tag`
///
/// `detailed_time` switches the header timestamp to RFC 3339.
pub fn syslog_3164(
    sink: impl Sink + 'static,
    max_level: LogLevel,
    tag: &str,
    detailed_time: bool,
) -> Result<Logger> {
    let format = Syslog3164Format::new(
        SyslogConfig::default()
            .with_tag(tag)
            .with_detailed_time(detailed_time),
    )?;
    build(sink, max_level, format)
}

/// RFC 5424 logger with default APP-NAME and MSGID
pub fn syslog_5424(
    sink: impl Sink + 'static,
    max_level: LogLevel,
    app_name: &str,
    msg_id: &str,
) -> Result<Logger> {
    let format = Syslog5424Format::new(
        SyslogConfig::default()
            .with_app_name(app_name)
            .with_tag(msg_id),
    )?;
    build(sink, max_level, format)
}

pub fn json(sink: impl Sink + 'static, max_level: LogLevel) -> Result<Logger> {
    build(sink, max_level, JsonFormat::new(JsonConfig::default()))
}

/// Pretty JSON logger; an empty `indent` keeps the tab default
pub fn json_pretty(sink: impl Sink + 'static, max_level: LogLevel, indent: &str) -> Result<Logger> {
    let mut config = JsonConfig::default();
    if !indent.is_empty() {
        config = config.with_indent(indent);
    }
    build(sink, max_level, JsonPrettyFormat::new(config))
}

pub fn kv(sink: impl Sink + 'static, max_level: LogLevel) -> Result<Logger> {
    build(sink, max_level, KvFormat::new(KvConfig::default()))
}

fn build<F>(sink: impl Sink + 'static, max_level: LogLevel, format: F) -> Result<Logger>
where
    F: crate::core::Formatter + 'static,
{
    Logger::builder()
        .max_level(max_level)
        .default_level(LogLevel::Informational)
        .formatter(format)
        .sink(sink)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Log, Prop};
    use crate::sinks::MemorySink;
    use std::sync::Arc;

    #[test]
    fn test_syslog_3164_preset() {
        let sink = Arc::new(MemorySink::new());
        let logger = syslog_3164(sink.clone(), LogLevel::Debug, "daemon", false).expect("preset");
        logger.notice("started", &[]).expect("log");

        let line = sink.last().expect("one record");
        assert!(line.starts_with("<13>"), "{}", line);
        assert!(line.ends_with(" daemon: started\n"), "{}", line);
    }

    #[test]
    fn test_syslog_5424_preset() {
        let sink = Arc::new(MemorySink::new());
        let logger = syslog_5424(sink.clone(), LogLevel::Debug, "svc", "boot").expect("preset");
        logger.info("ready", &[]).expect("log");

        let line = sink.last().expect("one record");
        assert!(line.starts_with("<14>1 "), "{}", line);
        assert!(line.contains(&format!(" svc {} boot - ready", std::process::id())));
    }

    #[test]
    fn test_json_presets_respect_max_level() {
        let sink = Arc::new(MemorySink::new());
        let logger = json(sink.clone(), LogLevel::Warning).expect("preset");
        logger.info("dropped", &[]).expect("filtered");
        logger
            .error("kept", &[Prop::string("k", "v")])
            .expect("log");

        assert_eq!(sink.len(), 1);
        assert!(sink.contents().contains(r#""props":{"k":"v"}"#));

        let pretty_sink = Arc::new(MemorySink::new());
        let pretty = json_pretty(pretty_sink.clone(), LogLevel::Debug, "  ").expect("preset");
        pretty.debug("m", &[]).expect("log");
        assert!(pretty_sink.contents().starts_with("{\n  \"level\": 7,"));
    }

    #[test]
    fn test_kv_preset_raw_write_uses_informational() {
        let sink = Arc::new(MemorySink::new());
        let logger = kv(sink.clone(), LogLevel::Emergency).expect("preset");
        logger.write_raw(b"plain output").expect("raw");

        assert!(sink.contents().starts_with("level=6 "));
    }
}
