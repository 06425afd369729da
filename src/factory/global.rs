//! Process-wide default factory, for callers that prefer not to thread a
//! `LoggerFactory` reference through every call site.

use crate::config::{FactoryConfig, LoggerOptions};
use crate::error::{LogsmithError, Result};
use crate::factory::{Logger, LoggerFactory};
use std::sync::OnceLock;

static DEFAULT_FACTORY: OnceLock<LoggerFactory> = OnceLock::new();

/// Install the process-wide default factory. Init-once: a second call fails.
pub fn init(config: FactoryConfig) -> Result<()> {
    let factory = LoggerFactory::new(config)?;
    DEFAULT_FACTORY.set(factory).map_err(|_| {
        LogsmithError::ConfigError("Default logger factory is already initialized".to_string())
    })
}

/// The installed default factory, if any
pub fn default_factory() -> Option<&'static LoggerFactory> {
    DEFAULT_FACTORY.get()
}

/// `get_logger` against the process-wide default factory
pub fn get_logger(name: &str, options: LoggerOptions) -> Result<Logger> {
    let factory = DEFAULT_FACTORY.get().ok_or_else(|| {
        LogsmithError::ConfigError("Default logger factory is not initialized".to_string())
    })?;
    factory.get_logger(name, options)
}
