use crate::config::{FactoryConfig, LoggerOptions};
use crate::error::{LogsmithError, Result};
use crate::format::LineFormatter;
use crate::record::{LogRecord, Severity};
use crate::sink::{ConsoleSink, FileSink, Sink, SinkId, SinkKind};
use chrono::Local;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

pub mod global;

/// Effective level when a call does not override it
const DEFAULT_LEVEL: Severity = Severity::Info;

/// LoggerFactory hands out named logger channels wired to a console sink,
/// a general rotating file, and an error-only rotating file
///
/// Requesting the same name twice returns the same channel; each sink
/// identity is attached at most once, so repeated setup never duplicates
/// output lines.
pub struct LoggerFactory {
    /// Defaults applied to every requested logger
    config: FactoryConfig,
    /// Map of logger name to its shared channel
    channels: Mutex<HashMap<String, Logger>>,
}

impl LoggerFactory {
    /// Create a factory, validating the configuration eagerly
    ///
    /// # Arguments
    /// * `config` - File prefixes and backup count applied to every logger
    ///
    /// # Returns
    /// * `Ok(LoggerFactory)` - Successfully created factory
    /// * `Err(LogsmithError)` - Configuration failed validation
    pub fn new(config: FactoryConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            channels: Mutex::new(HashMap::new()),
        })
    }

    pub fn config(&self) -> &FactoryConfig {
        &self.config
    }

    /// Look up or create the named logger and make sure its three sinks
    /// are attached
    ///
    /// Opening a file sink may create parent directories and the file
    /// itself; those failures propagate to the caller.
    ///
    /// # Arguments
    /// * `name` - Logger name, typically a module or component identifier
    /// * `options` - Call-scoped overrides for level, paths, and formatters
    ///
    /// # Returns
    /// * `Ok(Logger)` - Cloneable handle to the shared channel
    /// * `Err(LogsmithError)` - Empty name, or a sink file could not be opened
    pub fn get_logger(&self, name: &str, options: LoggerOptions) -> Result<Logger> {
        if name.trim().is_empty() {
            return Err(LogsmithError::EmptyLoggerName);
        }

        let logger = {
            let mut channels = lock(&self.channels);
            channels
                .entry(name.to_string())
                .or_insert_with(|| Logger::new(name))
                .clone()
        };

        let level = options.level.unwrap_or(DEFAULT_LEVEL);
        let general_path = options
            .log_file_name
            .unwrap_or_else(|| self.config.general_log_path());
        let error_path = options
            .error_log_file_name
            .unwrap_or_else(|| self.config.error_log_path());
        let console_formatter = options.console_formatter.unwrap_or_else(LineFormatter::terse);
        let file_formatter = options.file_formatter.unwrap_or_else(LineFormatter::detailed);

        logger.attach_console(level, console_formatter)?;
        logger.attach_file(
            SinkKind::GeneralFile,
            &general_path,
            level,
            file_formatter.clone(),
            self.config.backup_count,
        )?;
        // The error sink filters at ERROR regardless of the requested level
        logger.attach_file(
            SinkKind::ErrorFile,
            &error_path,
            Severity::Error,
            file_formatter,
            self.config.backup_count,
        )?;

        Ok(logger)
    }

    /// Check if a channel exists for a name
    pub fn has_logger(&self, name: &str) -> bool {
        lock(&self.channels).contains_key(name)
    }

    /// Number of named channels created so far
    pub fn logger_count(&self) -> usize {
        lock(&self.channels).len()
    }

    /// Flush every sink of every channel
    pub fn flush_all(&self) -> Result<()> {
        let channels: Vec<Logger> = lock(&self.channels).values().cloned().collect();
        for logger in channels {
            logger.flush()?;
        }
        Ok(())
    }
}

/// Cloneable handle to a named logging channel
///
/// Emission is synchronous: each call returns after the record has been
/// dispatched to every attached sink, and the first sink failure
/// propagates to the caller.
#[derive(Clone)]
pub struct Logger {
    inner: Arc<Channel>,
}

struct Channel {
    name: String,
    state: Mutex<ChannelState>,
}

#[derive(Default)]
struct ChannelState {
    sinks: Vec<Sink>,
    attached: HashSet<SinkId>,
}

impl Logger {
    fn new(name: &str) -> Self {
        Self {
            inner: Arc::new(Channel {
                name: name.to_string(),
                state: Mutex::new(ChannelState::default()),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Attach a console sink unless one is already present
    fn attach_console(&self, level: Severity, formatter: LineFormatter) -> Result<()> {
        let id = SinkId::console();
        let mut state = lock(&self.inner.state);
        if state.attached.contains(&id) {
            return Ok(());
        }
        state.sinks.push(Sink::Console(ConsoleSink::new(level, formatter)));
        state.attached.insert(id);
        Ok(())
    }

    /// Attach a file sink unless one with the same kind and target path is
    /// already present
    fn attach_file(
        &self,
        kind: SinkKind,
        path: &Path,
        level: Severity,
        formatter: LineFormatter,
        backup_count: usize,
    ) -> Result<()> {
        let id = SinkId::file(kind, path);
        let mut state = lock(&self.inner.state);
        if state.attached.contains(&id) {
            return Ok(());
        }
        let sink = FileSink::new(kind, path, level, formatter, backup_count)?;
        state.sinks.push(Sink::File(sink));
        state.attached.insert(id);
        Ok(())
    }

    /// Emit a record at the given severity
    pub fn log(&self, severity: Severity, message: &str) -> Result<()> {
        self.dispatch(severity, message, None)
    }

    pub fn debug(&self, message: &str) -> Result<()> {
        self.dispatch(Severity::Debug, message, None)
    }

    pub fn info(&self, message: &str) -> Result<()> {
        self.dispatch(Severity::Info, message, None)
    }

    pub fn warning(&self, message: &str) -> Result<()> {
        self.dispatch(Severity::Warning, message, None)
    }

    pub fn error(&self, message: &str) -> Result<()> {
        self.dispatch(Severity::Error, message, None)
    }

    pub fn critical(&self, message: &str) -> Result<()> {
        self.dispatch(Severity::Critical, message, None)
    }

    /// Emit a captured failure: the record is tagged `Critical` and carries
    /// the trace text, which file sinks render line by line after the message
    pub fn exception(&self, message: &str, trace: Option<&str>) -> Result<()> {
        self.dispatch(Severity::Critical, message, trace)
    }

    fn dispatch(&self, severity: Severity, message: &str, trace: Option<&str>) -> Result<()> {
        let record = LogRecord {
            timestamp: Local::now(),
            logger: &self.inner.name,
            severity,
            message,
            trace,
        };

        let mut state = lock(&self.inner.state);
        for sink in state.sinks.iter_mut() {
            sink.emit(&record)?;
        }
        Ok(())
    }

    /// Number of attached sinks
    pub fn sink_count(&self) -> usize {
        lock(&self.inner.state).sinks.len()
    }

    /// Check if a sink of the given kind is attached
    pub fn has_sink(&self, kind: SinkKind) -> bool {
        lock(&self.inner.state)
            .sinks
            .iter()
            .any(|sink| sink.kind() == kind)
    }

    /// Flush every attached sink
    pub fn flush(&self) -> Result<()> {
        let mut state = lock(&self.inner.state);
        for sink in state.sinks.iter_mut() {
            sink.flush()?;
        }
        Ok(())
    }
}

// A poisoned lock only means another thread panicked mid-write; the
// registry and sink state remain usable for subsequent records.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}
