use crate::error::{LogsmithError, Result};
use crate::format::LineFormatter;
use crate::record::Severity;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Factory-wide configuration: where log files live and how many rotated
/// files to keep
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactoryConfig {
    /// Base path for the general log file; the file lands at `<prefix>.log`
    pub log_file_prefix: String,

    /// Base path for the error log file (`<prefix>.error.log`); when unset,
    /// `log_file_prefix` is used
    #[serde(default)]
    pub error_log_file_prefix: Option<String>,

    /// Number of rotated historical files retained per sink
    #[serde(default = "default_backup_count")]
    pub backup_count: usize,
}

// Default value functions for serde
fn default_backup_count() -> usize {
    7
}

impl FactoryConfig {
    pub fn new(log_file_prefix: impl Into<String>) -> Self {
        Self {
            log_file_prefix: log_file_prefix.into(),
            error_log_file_prefix: None,
            backup_count: default_backup_count(),
        }
    }

    pub fn with_error_log_file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.error_log_file_prefix = Some(prefix.into());
        self
    }

    pub fn with_backup_count(mut self, backup_count: usize) -> Self {
        self.backup_count = backup_count;
        self
    }

    /// Load a factory configuration from a file (supports TOML and JSON)
    pub fn from_file(path: &Path) -> Result<FactoryConfig> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| LogsmithError::ConfigError(format!("Failed to read config file: {}", e)))?;

        let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");

        let config: FactoryConfig = match extension {
            "toml" => toml::from_str(&contents)
                .map_err(|e| LogsmithError::InvalidConfig(format!("Failed to parse TOML: {}", e)))?,
            "json" => serde_json::from_str(&contents)
                .map_err(|e| LogsmithError::InvalidConfig(format!("Failed to parse JSON: {}", e)))?,
            _ => {
                return Err(LogsmithError::InvalidConfig(format!(
                    "Unsupported file format: {}. Use .toml or .json",
                    extension
                )))
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration, surfacing problems at setup time
    pub fn validate(&self) -> Result<()> {
        if self.log_file_prefix.trim().is_empty() {
            return Err(LogsmithError::ConfigError(
                "log_file_prefix must not be empty".to_string(),
            ));
        }

        if let Some(prefix) = &self.error_log_file_prefix {
            if prefix.trim().is_empty() {
                return Err(LogsmithError::ConfigError(
                    "error_log_file_prefix must not be empty when set".to_string(),
                ));
            }
        }

        if self.backup_count == 0 {
            return Err(LogsmithError::ConfigError(
                "backup_count must be a positive integer".to_string(),
            ));
        }

        Ok(())
    }

    /// Default path of the general log file
    pub fn general_log_path(&self) -> PathBuf {
        PathBuf::from(format!("{}.log", self.log_file_prefix))
    }

    /// Default path of the error-only log file
    pub fn error_log_path(&self) -> PathBuf {
        let prefix = self
            .error_log_file_prefix
            .as_deref()
            .unwrap_or(&self.log_file_prefix);
        PathBuf::from(format!("{}.error.log", prefix))
    }
}

/// Per-call overrides for `LoggerFactory::get_logger`.
///
/// Overrides are call-scoped: they shape the sinks attached during that
/// call but never rewrite the factory defaults or sinks attached earlier.
/// Whether overrides should instead stick for later calls on the same name
/// is an open product decision; call-scoped is the conservative reading.
#[derive(Debug, Clone, Default)]
pub struct LoggerOptions {
    /// Minimum severity for the console and general-file sinks
    /// (the error-file sink is always pinned at ERROR)
    pub level: Option<Severity>,

    /// Replaces the factory-derived general log path for this call
    pub log_file_name: Option<PathBuf>,

    /// Replaces the factory-derived error log path for this call
    pub error_log_file_name: Option<PathBuf>,

    /// Replaces the terse console formatter for this call
    pub console_formatter: Option<LineFormatter>,

    /// Replaces the detailed file formatter for this call
    pub file_formatter: Option<LineFormatter>,
}

impl LoggerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(mut self, level: Severity) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_log_file_name(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file_name = Some(path.into());
        self
    }

    pub fn with_error_log_file_name(mut self, path: impl Into<PathBuf>) -> Self {
        self.error_log_file_name = Some(path.into());
        self
    }

    pub fn with_console_formatter(mut self, formatter: LineFormatter) -> Self {
        self.console_formatter = Some(formatter);
        self
    }

    pub fn with_file_formatter(mut self, formatter: LineFormatter) -> Self {
        self.file_formatter = Some(formatter);
        self
    }
}
