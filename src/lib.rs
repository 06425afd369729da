// Library exports for the logsmith logger factory

pub mod config;
pub mod error;
pub mod factory;
pub mod format;
pub mod record;
pub mod sink;

pub use config::{FactoryConfig, LoggerOptions};
pub use error::{LogsmithError, Result};
pub use factory::{Logger, LoggerFactory};
pub use record::Severity;
