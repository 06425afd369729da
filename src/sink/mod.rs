// Sink module - log record destinations

mod console;
mod file;
mod rolling;

pub use console::ConsoleSink;
pub use file::FileSink;
pub use rolling::RollingFileWriter;

use crate::error::Result;
use crate::record::LogRecord;
use std::path::{Path, PathBuf};

/// The three sink kinds a logger channel can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SinkKind {
    Console,
    GeneralFile,
    ErrorFile,
}

/// Identity of an attached sink: kind plus target path for file sinks.
///
/// Attachment is idempotent per identity, so requesting the same logger
/// twice with the same effective paths never duplicates a sink, while an
/// override pointing at a genuinely different file attaches a new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SinkId {
    kind: SinkKind,
    target: Option<PathBuf>,
}

impl SinkId {
    pub fn console() -> Self {
        Self {
            kind: SinkKind::Console,
            target: None,
        }
    }

    pub fn file(kind: SinkKind, path: &Path) -> Self {
        Self {
            kind,
            target: Some(path.to_path_buf()),
        }
    }

    pub fn kind(&self) -> SinkKind {
        self.kind
    }
}

/// An attached destination for log records
#[derive(Debug)]
pub enum Sink {
    Console(ConsoleSink),
    File(FileSink),
}

impl Sink {
    pub fn kind(&self) -> SinkKind {
        match self {
            Sink::Console(_) => SinkKind::Console,
            Sink::File(sink) => sink.kind(),
        }
    }

    /// Dispatch one record; records below the sink's threshold are skipped
    pub fn emit(&mut self, record: &LogRecord<'_>) -> Result<()> {
        match self {
            Sink::Console(sink) => sink.emit(record),
            Sink::File(sink) => sink.emit(record),
        }
    }

    pub fn flush(&mut self) -> Result<()> {
        match self {
            Sink::Console(_) => Ok(()),
            Sink::File(sink) => sink.flush(),
        }
    }
}
