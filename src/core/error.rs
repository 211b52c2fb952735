//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Logger constructed or reconfigured without a sink
    #[error("loggers must have a sink")]
    MissingSink,

    /// Logger constructed or reconfigured without a formatter
    #[error("loggers must have a formatter")]
    MissingFormatter,

    /// Logger left unusable by a failed reconfiguration
    #[error("logger is not configured")]
    NotConfigured,

    /// MultiLogger does not accept a configuration of its own
    #[error("can't configure MultiLogger; configure its child loggers instead")]
    MultiConfigure,

    /// Sink no longer accepts writes
    #[error("sink '{name}' is closed")]
    SinkClosed { name: String },

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),

    /// Errors collected from several loggers during one call
    #[error("{} logger(s) failed: {}", .errors.len(), join_errors(.errors))]
    Aggregate { errors: Vec<LoggerError> },
}

fn join_errors(errors: &[LoggerError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a closed sink error
    pub fn sink_closed(name: impl Into<String>) -> Self {
        LoggerError::SinkClosed { name: name.into() }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }

    /// Combine errors from one fan-out call; `None` when nothing failed
    pub fn aggregate(errors: Vec<LoggerError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(LoggerError::Aggregate { errors })
        }
    }

    /// Errors carried by an aggregate, or this error alone
    pub fn errors(&self) -> &[LoggerError] {
        match self {
            LoggerError::Aggregate { errors } => errors,
            other => std::slice::from_ref(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::config("Syslog3164Format", "facility 0 is reserved");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = LoggerError::sink_closed("file");
        assert!(matches!(err, LoggerError::SinkClosed { .. }));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(LoggerError::MissingSink.to_string(), "loggers must have a sink");
        assert_eq!(
            LoggerError::MissingFormatter.to_string(),
            "loggers must have a formatter"
        );
        assert_eq!(
            LoggerError::sink_closed("file").to_string(),
            "sink 'file' is closed"
        );
        assert_eq!(
            LoggerError::config("KvFormat", "bad quote").to_string(),
            "Invalid configuration for KvFormat: bad quote"
        );
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::io_operation("opening log file", "cannot open /var/log/x", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("opening log file"));
        assert!(err.to_string().contains("cannot open /var/log/x"));
    }

    #[test]
    fn test_aggregate() {
        assert!(LoggerError::aggregate(Vec::new()).is_none());

        let err = LoggerError::aggregate(vec![
            LoggerError::writer("disk full"),
            LoggerError::MissingSink,
        ])
        .expect("two errors aggregate");

        assert_eq!(err.errors().len(), 2);
        assert_eq!(
            err.to_string(),
            "2 logger(s) failed: Writer error: disk full; loggers must have a sink"
        );
    }

    #[test]
    fn test_errors_of_single() {
        let err = LoggerError::NotConfigured;
        assert_eq!(err.errors().len(), 1);
    }
}
