use crate::error::Result;
use crate::format::LineFormatter;
use crate::record::{LogRecord, Severity};
use crate::sink::{RollingFileWriter, SinkKind};
use std::path::Path;

/// Sink writing detailed lines to a daily-rotated file
#[derive(Debug)]
pub struct FileSink {
    kind: SinkKind,
    level: Severity,
    formatter: LineFormatter,
    writer: RollingFileWriter,
}

impl FileSink {
    /// Open the sink's file, creating it (and parent directories) if needed
    pub fn new(
        kind: SinkKind,
        path: &Path,
        level: Severity,
        formatter: LineFormatter,
        backup_count: usize,
    ) -> Result<Self> {
        let writer = RollingFileWriter::new(path, backup_count)?;
        Ok(Self {
            kind,
            level,
            formatter,
            writer,
        })
    }

    pub fn kind(&self) -> SinkKind {
        self.kind
    }

    /// Minimum severity this sink passes through
    pub fn level(&self) -> Severity {
        self.level
    }

    /// Path of the current log file
    pub fn path(&self) -> &Path {
        self.writer.path()
    }

    /// Write the record (and its trace, if any) if it meets the level threshold
    pub fn emit(&mut self, record: &LogRecord<'_>) -> Result<()> {
        if record.severity < self.level {
            return Ok(());
        }
        self.writer.write_line(&self.formatter.format(record))
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()
    }
}
