// Format module - log line rendering

use crate::record::LogRecord;

/// Default timestamp pattern for console lines (time of day only)
const TERSE_TIMESTAMP_FORMAT: &str = "%H:%M:%S";

/// Default timestamp pattern for file lines (full date and time)
const DETAILED_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// How much of a record a formatter renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatStyle {
    /// `<timestamp> <severity> <message>` - used for console output
    Terse,
    /// `<timestamp> <logger-name> <severity> <message>` plus trace lines - used for files
    Detailed,
}

/// Renders a `LogRecord` into a single output line (plus trace lines for
/// detailed formatting of exception records)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFormatter {
    style: FormatStyle,
    timestamp_format: String,
}

impl LineFormatter {
    /// Formatter for console sinks: time of day, severity, message
    pub fn terse() -> Self {
        Self {
            style: FormatStyle::Terse,
            timestamp_format: TERSE_TIMESTAMP_FORMAT.to_string(),
        }
    }

    /// Formatter for file sinks: full timestamp, logger name, severity,
    /// message, and the trace when the record carries one
    pub fn detailed() -> Self {
        Self {
            style: FormatStyle::Detailed,
            timestamp_format: DETAILED_TIMESTAMP_FORMAT.to_string(),
        }
    }

    /// Replace the timestamp pattern (a chrono format string)
    pub fn with_timestamp_format(mut self, format: &str) -> Self {
        self.timestamp_format = format.to_string();
        self
    }

    pub fn style(&self) -> FormatStyle {
        self.style
    }

    /// Render a record. The returned string has no trailing newline; the
    /// sink appends one per line when writing.
    pub fn format(&self, record: &LogRecord<'_>) -> String {
        let timestamp = record.timestamp.format(&self.timestamp_format);

        let mut line = match self.style {
            FormatStyle::Terse => {
                format!("{} {} {}", timestamp, record.severity, record.message)
            }
            FormatStyle::Detailed => {
                format!(
                    "{} {} {} {}",
                    timestamp, record.logger, record.severity, record.message
                )
            }
        };

        // Trace lines only appear in detailed output
        if self.style == FormatStyle::Detailed {
            if let Some(trace) = record.trace {
                for trace_line in trace.lines() {
                    line.push('\n');
                    line.push_str(trace_line);
                }
            }
        }

        line
    }
}
