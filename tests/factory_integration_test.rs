// Integration tests for end-to-end logger factory behavior

use logsmith::config::{FactoryConfig, LoggerOptions};
use logsmith::factory::LoggerFactory;
use logsmith::record::Severity;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn app_prefix(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("logs").join("app")
}

fn app_factory(temp_dir: &TempDir) -> LoggerFactory {
    let prefix = app_prefix(temp_dir);
    LoggerFactory::new(FactoryConfig::new(prefix.to_str().unwrap())).unwrap()
}

fn line_count(path: &Path) -> usize {
    std::fs::read_to_string(path).unwrap().lines().count()
}

#[test]
fn test_error_record_appears_in_both_files() {
    let temp_dir = TempDir::new().unwrap();
    let factory = app_factory(&temp_dir);

    let logger = factory
        .get_logger("main", LoggerOptions::new().with_level(Severity::Info))
        .unwrap();
    logger.error("Failed to connect").unwrap();

    let general = app_prefix(&temp_dir).with_extension("log");
    let errors = app_prefix(&temp_dir).with_extension("error.log");

    let general_content = std::fs::read_to_string(&general).unwrap();
    let error_content = std::fs::read_to_string(&errors).unwrap();

    assert_eq!(general_content.lines().count(), 1);
    assert_eq!(error_content.lines().count(), 1);
    // Same detailed line in both files
    assert_eq!(general_content, error_content);
    assert!(general_content.contains("main ERROR Failed to connect"));
}

#[test]
fn test_debug_record_below_default_level_is_dropped() {
    let temp_dir = TempDir::new().unwrap();
    let factory = app_factory(&temp_dir);

    let logger = factory
        .get_logger("main", LoggerOptions::new().with_level(Severity::Info))
        .unwrap();
    logger.error("Failed to connect").unwrap();
    logger.debug("probe").unwrap();

    let general = app_prefix(&temp_dir).with_extension("log");
    let errors = app_prefix(&temp_dir).with_extension("error.log");
    assert_eq!(line_count(&general), 1);
    assert_eq!(line_count(&errors), 1);
}

#[test]
fn test_info_record_stays_out_of_error_file() {
    let temp_dir = TempDir::new().unwrap();
    let factory = app_factory(&temp_dir);

    let logger = factory.get_logger("main", LoggerOptions::new()).unwrap();
    logger.info("started").unwrap();
    logger.warning("low disk").unwrap();

    let general = app_prefix(&temp_dir).with_extension("log");
    let errors = app_prefix(&temp_dir).with_extension("error.log");
    assert_eq!(line_count(&general), 2);
    assert_eq!(line_count(&errors), 0);
}

#[test]
fn test_warning_level_suppresses_lower_but_not_errors() {
    let temp_dir = TempDir::new().unwrap();
    let factory = app_factory(&temp_dir);

    let logger = factory
        .get_logger("main", LoggerOptions::new().with_level(Severity::Warning))
        .unwrap();
    logger.debug("ignored").unwrap();
    logger.info("ignored too").unwrap();
    logger.error("boom").unwrap();

    let general = app_prefix(&temp_dir).with_extension("log");
    let errors = app_prefix(&temp_dir).with_extension("error.log");
    assert_eq!(line_count(&general), 1);
    assert_eq!(line_count(&errors), 1);
}

#[test]
fn test_error_sink_never_loosens_below_error() {
    let temp_dir = TempDir::new().unwrap();
    let factory = app_factory(&temp_dir);

    // Even with the channel level at DEBUG, the error file stays ERROR-only
    let logger = factory
        .get_logger("main", LoggerOptions::new().with_level(Severity::Debug))
        .unwrap();
    logger.debug("detail").unwrap();
    logger.critical("meltdown").unwrap();

    let general = app_prefix(&temp_dir).with_extension("log");
    let errors = app_prefix(&temp_dir).with_extension("error.log");
    assert_eq!(line_count(&general), 2);
    assert_eq!(line_count(&errors), 1);
}

#[test]
fn test_repeated_get_logger_does_not_double_output() {
    let temp_dir = TempDir::new().unwrap();
    let factory = app_factory(&temp_dir);

    factory.get_logger("main", LoggerOptions::new()).unwrap();
    let logger = factory.get_logger("main", LoggerOptions::new()).unwrap();
    assert_eq!(logger.sink_count(), 3);

    logger.info("once").unwrap();
    logger.error("twice").unwrap();

    let general = app_prefix(&temp_dir).with_extension("log");
    let errors = app_prefix(&temp_dir).with_extension("error.log");
    assert_eq!(line_count(&general), 2);
    assert_eq!(line_count(&errors), 1);
}

#[test]
fn test_handles_share_one_channel() {
    let temp_dir = TempDir::new().unwrap();
    let factory = app_factory(&temp_dir);

    let first = factory.get_logger("main", LoggerOptions::new()).unwrap();
    let second = factory.get_logger("main", LoggerOptions::new()).unwrap();

    first.info("from first").unwrap();
    second.info("from second").unwrap();

    let general = app_prefix(&temp_dir).with_extension("log");
    assert_eq!(line_count(&general), 2);
}

#[test]
fn test_per_call_path_override_routes_exclusively() {
    let temp_dir = TempDir::new().unwrap();
    let factory = app_factory(&temp_dir);

    let worker_log = temp_dir.path().join("logs").join("worker.log");
    let worker_errors = temp_dir.path().join("logs").join("worker.error.log");

    let logger = factory
        .get_logger(
            "worker",
            LoggerOptions::new()
                .with_log_file_name(&worker_log)
                .with_error_log_file_name(&worker_errors),
        )
        .unwrap();
    logger.error("worker failed").unwrap();

    assert_eq!(line_count(&worker_log), 1);
    assert_eq!(line_count(&worker_errors), 1);

    // The factory-default files were never created
    assert!(!app_prefix(&temp_dir).with_extension("log").exists());
    assert!(!app_prefix(&temp_dir).with_extension("error.log").exists());
}

#[test]
fn test_exception_records_carry_trace_in_files() {
    let temp_dir = TempDir::new().unwrap();
    let factory = app_factory(&temp_dir);

    let logger = factory.get_logger("main", LoggerOptions::new()).unwrap();
    logger
        .exception(
            "division by zero",
            Some("at compute (math.rs:12)\nat main (main.rs:3)"),
        )
        .unwrap();

    let general = std::fs::read_to_string(app_prefix(&temp_dir).with_extension("log")).unwrap();
    let errors =
        std::fs::read_to_string(app_prefix(&temp_dir).with_extension("error.log")).unwrap();

    for content in [&general, &errors] {
        assert!(content.contains("main CRITICAL division by zero"));
        assert!(content.contains("at compute (math.rs:12)"));
        assert!(content.contains("at main (main.rs:3)"));
        assert_eq!(content.lines().count(), 3);
    }
}

#[test]
fn test_separate_error_prefix_routes_error_file_elsewhere() {
    let temp_dir = TempDir::new().unwrap();
    let general_prefix = temp_dir.path().join("logs").join("app");
    let error_prefix = temp_dir.path().join("errors").join("app");

    let config = FactoryConfig::new(general_prefix.to_str().unwrap())
        .with_error_log_file_prefix(error_prefix.to_str().unwrap());
    let factory = LoggerFactory::new(config).unwrap();

    let logger = factory.get_logger("main", LoggerOptions::new()).unwrap();
    logger.error("boom").unwrap();

    assert_eq!(line_count(&general_prefix.with_extension("log")), 1);
    assert_eq!(line_count(&error_prefix.with_extension("error.log")), 1);
    assert!(!general_prefix.with_extension("error.log").exists());
}

#[test]
fn test_detailed_line_shape() {
    let temp_dir = TempDir::new().unwrap();
    let factory = app_factory(&temp_dir);

    let logger = factory.get_logger("api", LoggerOptions::new()).unwrap();
    logger.warning("slow response").unwrap();

    let content = std::fs::read_to_string(app_prefix(&temp_dir).with_extension("log")).unwrap();
    let line = content.lines().next().unwrap();

    // <YYYY-MM-DD HH:MM:SS> <logger-name> <severity> <message>
    let fields: Vec<&str> = line.splitn(5, ' ').collect();
    assert_eq!(fields.len(), 5);
    assert_eq!(fields[2], "api");
    assert_eq!(fields[3], "WARNING");
    assert_eq!(fields[4], "slow response");
}
