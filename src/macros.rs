//! Logging macros for ergonomic log message formatting.
//!
//! These macros format the message like `format!` and forward to
//! [`Log::log`](crate::Log::log), so they work with both `Logger` and
//! `MultiLogger`. Properties go in an optional `props: [...]` list before
//! the format string. Each macro evaluates to the `Result` of the call.
//!
//! # Examples
//!
//! ```
//! use rust_structured_logger::prelude::*;
//! use rust_structured_logger::{info, warning};
//! use std::sync::Arc;
//!
//! let sink = Arc::new(MemorySink::new());
//! let logger = presets::kv(sink.clone(), LogLevel::Debug)?;
//!
//! // Basic logging
//! info!(logger, "Server started")?;
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port)?;
//!
//! // With properties
//! warning!(logger, props: [Prop::uint("port", port)], "Port {} is privileged", port)?;
//!
//! assert_eq!(sink.len(), 3);
//! assert!(sink.last().unwrap().ends_with("port=8080\n"));
//! # Ok::<(), rust_structured_logger::LoggerError>(())
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_structured_logger::prelude::*;
/// # let logger = presets::kv(MemorySink::new(), LogLevel::Debug)?;
/// use rust_structured_logger::log;
/// log!(logger, LogLevel::Notice, "Simple message")?;
/// log!(logger, LogLevel::Error, "Error code: {}", 500)?;
/// log!(logger, LogLevel::Error, props: [Prop::int("code", 500)], "request failed")?;
/// # Ok::<(), rust_structured_logger::LoggerError>(())
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, props: [$($prop:expr),* $(,)?], $($arg:tt)+) => {{
        use $crate::Log as _;
        $logger.log($level, &format!($($arg)+), &[$($prop),*])
    }};
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        use $crate::Log as _;
        $logger.log($level, &format!($($arg)+), &[])
    }};
}

/// Log an emergency-level message.
#[macro_export]
macro_rules! emergency {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Emergency, $($arg)+)
    };
}

/// Log an alert-level message.
#[macro_export]
macro_rules! alert {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Alert, $($arg)+)
    };
}

/// Log a critical-level message.
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Critical, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use rust_structured_logger::prelude::*;
/// # let logger = presets::kv(MemorySink::new(), LogLevel::Debug)?;
/// use rust_structured_logger::error;
/// let code = 503;
/// error!(logger, "Upstream returned {}", code)?;
/// # Ok::<(), rust_structured_logger::LoggerError>(())
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log a notice-level message.
#[macro_export]
macro_rules! notice {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Notice, $($arg)+)
    };
}

/// Log an informational message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Informational, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}
