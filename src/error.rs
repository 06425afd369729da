use thiserror::Error;

/// Main error type for the logsmith logger factory
#[derive(Debug, Error)]
pub enum LogsmithError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid configuration file: {0}")]
    InvalidConfig(String),

    #[error("Logger name must not be empty")]
    EmptyLoggerName,

    // File sink errors
    #[error("Failed to open log file: {0}")]
    LogFileError(String),

    #[error("Log rotation failed: {0}")]
    LogRotationError(String),

    #[error("Failed to write log record: {0}")]
    WriteError(String),

    // IO errors (automatically converted from std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for logsmith operations
pub type Result<T> = std::result::Result<T, LogsmithError>;
