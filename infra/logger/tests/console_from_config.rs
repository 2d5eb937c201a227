use wodi_domain::config::LoggingConfig;
use wodi_logger::{LevelFilter, Logger, LoggerError};

#[test]
fn console_config_installs_once() {
    let config = LoggingConfig {
        name: "integration-console".to_owned(),
        level: "DEBUG".to_owned(),
        env_filter: Some("wodi=trace".to_owned()),
        ..LoggingConfig::default()
    };
    let logger = Logger::from_config(&config).expect("console logger should initialize");
    assert!(!logger.writes_files());
    assert!(logger.guard().is_none());

    let err = Logger::builder()
        .name("integration-console-again")
        .level(LevelFilter::WARN)
        .init()
        .expect_err("a second global subscriber is rejected");
    assert!(matches!(err, LoggerError::Subscriber { .. }));
}
