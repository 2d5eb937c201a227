use std::fs;
use std::time::Duration;
use tempfile::tempdir;
use wodi_domain::config::LoggingConfig;
use wodi_logger::Logger;

#[test]
fn json_file_logging_from_config() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let config = LoggingConfig {
        name: "integration-file-logging".to_owned(),
        console: false,
        directory: Some(log_dir.clone()),
        json: true,
        max_files: 3,
        ..LoggingConfig::default()
    };
    let logger = Logger::from_config(&config)?;
    assert!(logger.guard().is_some());

    tracing::info!(map = "Dungeon01.mps", "hello from integration test");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let entries = fs::read_dir(&log_dir)?;
    let log_file = entries
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let content = fs::read_to_string(&log_file)?;
    assert!(content.contains("hello from integration test"));
    assert!(content.lines().next().is_some_and(|line| line.starts_with('{')), "records should be JSON");

    Ok(())
}
