//! Log level definitions
//!
//! Levels follow syslog severity: `Emergency` (0) is the most urgent and
//! `Debug` (7) the least. Numeric values never change; the keyword each level
//! renders as comes from a process-wide [`Keywords`] table.
//!
//! # Keyword table
//!
//! The table is shared by every logger in the process. Replacing it (through
//! [`set_keywords`], [`use_all_caps_keywords`] or [`LogLevel::set_keyword`])
//! is not coordinated with formatting: a record being formatted on another
//! thread may render with either the old or the new keyword. Set the table
//! once at startup, before any logger runs.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[repr(u8)]
pub enum LogLevel {
    Emergency = 0,
    Alert = 1,
    Critical = 2,
    Error = 3,
    Warning = 4,
    Notice = 5,
    #[default]
    Informational = 6,
    Debug = 7,
}

impl LogLevel {
    pub const MOST_SEVERE: LogLevel = LogLevel::Emergency;
    pub const LEAST_SEVERE: LogLevel = LogLevel::Debug;

    /// All levels, most severe first
    pub const ALL: [LogLevel; 8] = [
        LogLevel::Emergency,
        LogLevel::Alert,
        LogLevel::Critical,
        LogLevel::Error,
        LogLevel::Warning,
        LogLevel::Notice,
        LogLevel::Informational,
        LogLevel::Debug,
    ];

    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    /// True when `self` is at least as urgent as `max`, i.e. passes a
    /// logger whose threshold is `max`.
    #[inline]
    pub fn passes(self, max: LogLevel) -> bool {
        self <= max
    }

    /// Keyword for this level from the process-wide table
    pub fn keyword(self) -> String {
        KEYWORDS.read().get(self).to_string()
    }

    /// Replace the keyword for this level in the process-wide table
    pub fn set_keyword(self, keyword: impl Into<String>) {
        KEYWORDS.write().set(self, keyword);
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(KEYWORDS.read().get(*self))
    }
}

impl FromStr for LogLevel {
    type Err = String;

    /// Accepts level names, both keyword presets and numeric values
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(n) = s.parse::<u8>() {
            return LogLevel::from_u8(n).ok_or_else(|| format!("Invalid log level: '{}'", s));
        }
        match s.to_uppercase().as_str() {
            "EMERGENCY" | "EMERG" => Ok(LogLevel::Emergency),
            "ALERT" => Ok(LogLevel::Alert),
            "CRITICAL" | "CRIT" => Ok(LogLevel::Critical),
            "ERROR" | "ERR" => Ok(LogLevel::Error),
            "WARNING" | "WARN" => Ok(LogLevel::Warning),
            "NOTICE" => Ok(LogLevel::Notice),
            "INFORMATIONAL" | "INFO" => Ok(LogLevel::Informational),
            "DEBUG" => Ok(LogLevel::Debug),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

/// Keyword table mapping each level to its textual form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keywords {
    names: [Cow<'static, str>; 8],
}

impl Keywords {
    /// Lowercase syslog keywords (the default)
    pub const SYSLOG: Keywords = Keywords {
        names: [
            Cow::Borrowed("emerg"),
            Cow::Borrowed("alert"),
            Cow::Borrowed("crit"),
            Cow::Borrowed("err"),
            Cow::Borrowed("warn"),
            Cow::Borrowed("notice"),
            Cow::Borrowed("info"),
            Cow::Borrowed("debug"),
        ],
    };

    pub const ALL_CAPS: Keywords = Keywords {
        names: [
            Cow::Borrowed("EMERGENCY"),
            Cow::Borrowed("ALERT"),
            Cow::Borrowed("CRITICAL"),
            Cow::Borrowed("ERROR"),
            Cow::Borrowed("WARN"),
            Cow::Borrowed("NOTICE"),
            Cow::Borrowed("INFORMATIONAL"),
            Cow::Borrowed("DEBUG"),
        ],
    };

    pub fn get(&self, level: LogLevel) -> &str {
        &self.names[level as usize]
    }

    pub fn set(&mut self, level: LogLevel, keyword: impl Into<String>) {
        self.names[level as usize] = Cow::Owned(keyword.into());
    }

    #[must_use]
    pub fn with(mut self, level: LogLevel, keyword: impl Into<String>) -> Self {
        self.set(level, keyword);
        self
    }
}

impl Default for Keywords {
    fn default() -> Self {
        Keywords::SYSLOG
    }
}

static KEYWORDS: RwLock<Keywords> = parking_lot::const_rwlock(Keywords::SYSLOG);

/// Snapshot of the process-wide keyword table
pub fn keywords() -> Keywords {
    KEYWORDS.read().clone()
}

/// Replace the process-wide keyword table
pub fn set_keywords(table: Keywords) {
    *KEYWORDS.write() = table;
}

pub fn use_syslog_keywords() {
    set_keywords(Keywords::SYSLOG);
}

pub fn use_all_caps_keywords() {
    set_keywords(Keywords::ALL_CAPS);
}
