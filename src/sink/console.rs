use crate::error::{LogsmithError, Result};
use crate::format::LineFormatter;
use crate::record::{LogRecord, Severity};
use std::io::Write;

/// Sink writing terse lines to the standard error stream
#[derive(Debug)]
pub struct ConsoleSink {
    level: Severity,
    formatter: LineFormatter,
}

impl ConsoleSink {
    pub fn new(level: Severity, formatter: LineFormatter) -> Self {
        Self { level, formatter }
    }

    /// Minimum severity this sink passes through
    pub fn level(&self) -> Severity {
        self.level
    }

    /// Write the record to stderr if it meets the level threshold
    pub fn emit(&mut self, record: &LogRecord<'_>) -> Result<()> {
        if record.severity < self.level {
            return Ok(());
        }

        let line = self.formatter.format(record);
        let stderr = std::io::stderr();
        let mut handle = stderr.lock();
        writeln!(handle, "{}", line)
            .map_err(|e| LogsmithError::WriteError(format!("console: {}", e)))?;

        Ok(())
    }
}
