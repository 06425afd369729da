use crate::error::LogsmithError;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered severity of a log record.
///
/// `Critical` is the exception level: records emitted through
/// `Logger::exception` carry a trace and are tagged `Critical`. For routing
/// purposes it counts as at-or-above `Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
    #[serde(alias = "EXCEPTION")]
    Critical,
}

impl Severity {
    /// Upper-case token used in formatted log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = LogsmithError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(Severity::Debug),
            "INFO" => Ok(Severity::Info),
            "WARNING" | "WARN" => Ok(Severity::Warning),
            "ERROR" => Ok(Severity::Error),
            "CRITICAL" | "EXCEPTION" => Ok(Severity::Critical),
            other => Err(LogsmithError::ConfigError(format!(
                "Unknown severity level: {}",
                other
            ))),
        }
    }
}

/// A single emission, borrowed from the logger for the duration of dispatch
#[derive(Debug, Clone, Copy)]
pub struct LogRecord<'a> {
    /// Wall-clock time the record was emitted
    pub timestamp: DateTime<Local>,
    /// Name of the logger that emitted the record
    pub logger: &'a str,
    /// Record severity
    pub severity: Severity,
    /// Message text
    pub message: &'a str,
    /// Captured trace, present on exception records
    pub trace: Option<&'a str>,
}
