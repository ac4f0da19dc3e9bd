use tariff_zones::config::LoggingConfig;
use tariff_zones::logging::{LogContext, get_logger_with_context, init_logging, parse_log_level};
use tracing::Level;

#[test]
fn init_logging_with_file_sink() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let config = LoggingConfig {
        level: "DEBUG".to_string(),
        file: tmp_dir.path().join("tariff.log").to_string_lossy().to_string(),
        console_output: false,
        ..LoggingConfig::default()
    };
    init_logging(&config).unwrap();

    let logger = get_logger_with_context(
        LogContext::new("test").with_policy("five-zone@v2".to_string()),
    );
    logger.info("file sink ready");
}

#[test]
fn level_aliases() {
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("Trace").unwrap(), Level::TRACE);
    assert!(parse_log_level("verbose").is_err());
}
