//! Formatter contract and output normalization

use super::log_level::LogLevel;
use super::property_set::PropertySet;

/// Renders one log record as text
///
/// Formatters are pure: they build a payload and perform no I/O. The
/// pipeline never writes a formatter's raw output; it goes through
/// [`Formatter::format_and_normalize`], so a formatter does not need to care
/// about surrounding whitespace or the trailing newline.
///
/// Formatters receive the set mutably so they can drop fields they consume
/// (the syslog encoders remove their reserved header properties).
///
/// Any closure with the right signature is a formatter:
///
/// ```
/// use rust_structured_logger::{Formatter, LogLevel, PropertySet};
///
/// let plain = |level: LogLevel, msg: &str, _props: &mut PropertySet| {
///     format!("  [{}] {}  ", level.as_u8(), msg)
/// };
/// let mut props = PropertySet::empty();
/// assert_eq!(
///     plain.format_and_normalize(LogLevel::Error, "boom", &mut props),
///     "[3] boom\n"
/// );
/// ```
pub trait Formatter: Send + Sync {
    fn format(&self, level: LogLevel, message: &str, props: &mut PropertySet) -> String;

    fn format_and_normalize(
        &self,
        level: LogLevel,
        message: &str,
        props: &mut PropertySet,
    ) -> String {
        normalize_whitespace(&self.format(level, message, props))
    }
}

impl<F> Formatter for F
where
    F: Fn(LogLevel, &str, &mut PropertySet) -> String + Send + Sync,
{
    fn format(&self, level: LogLevel, message: &str, props: &mut PropertySet) -> String {
        self(level, message, props)
    }
}

/// Trim surrounding whitespace and terminate with exactly one newline
pub fn normalize_whitespace(payload: &str) -> String {
    let trimmed = payload.trim();
    let mut out = String::with_capacity(trimmed.len() + 1);
    out.push_str(trimmed);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Prop;

    #[test]
    fn test_normalize_trims_and_terminates() {
        assert_eq!(normalize_whitespace("  hello world \n\n"), "hello world\n");
        assert_eq!(normalize_whitespace("line"), "line\n");
        assert_eq!(normalize_whitespace(""), "\n");
        assert_eq!(normalize_whitespace("\t\r\n"), "\n");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for input in ["a", " a ", "a\n", "\n\na b\t\n", "{\n\t\"k\": 1\n}"] {
            let once = normalize_whitespace(input);
            assert_eq!(normalize_whitespace(&once), once);
        }
    }

    #[test]
    fn test_inner_newlines_survive() {
        assert_eq!(normalize_whitespace("{\n  \"a\": 1\n}\n"), "{\n  \"a\": 1\n}\n");
    }

    #[test]
    fn test_closure_formatter_sees_props() {
        let formatter = |_: LogLevel, msg: &str, props: &mut PropertySet| {
            format!("{} user={} ", msg, props.get_str("user").unwrap_or("-"))
        };

        let mut props = PropertySet::new(&[Prop::string("user", "alice")]);
        let out = formatter.format_and_normalize(LogLevel::Informational, "login", &mut props);
        assert_eq!(out, "login user=alice\n");
    }
}
