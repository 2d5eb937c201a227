use std::fs;
use tempfile::TempDir;
use wodi_domain::config::WodiConfig;
use wodi_kernel::config::{ConfigError, load_config};

fn write(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn loads_toml_file_with_defaults_for_missing_keys() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "wodi.toml",
        r#"
[logging]
name = "editor"
level = "debug"

[registry]
target_key = "Project"
"#,
    );

    let cfg: WodiConfig = load_config(Some(&path)).unwrap();
    assert_eq!(cfg.logging.name, "editor");
    assert_eq!(cfg.logging.level, "debug");
    assert!(cfg.logging.console);
    assert_eq!(cfg.logging.max_files, 10);
    assert_eq!(cfg.registry.target_key.as_deref(), Some("Project"));
}

#[test]
fn loads_json_file() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "wodi.json", r#"{ "logging": { "console": false, "json": true } }"#);

    let cfg: WodiConfig = load_config(Some(&path)).unwrap();
    assert!(!cfg.logging.console);
    assert!(cfg.logging.json);
    assert!(cfg.registry.target_key.is_none());
}

#[test]
fn missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let err = load_config::<WodiConfig>(Some(dir.path().join("absent.toml"))).unwrap_err();

    assert!(matches!(err, ConfigError::Config { .. }));
    assert_eq!(err.kind(), "Config");
    assert!(err.to_string().contains("Failed to build config"));
}

#[test]
fn wrong_types_fail_to_deserialize() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "wodi.toml", "[logging]\nmax_files = \"many\"\n");

    let err = load_config::<WodiConfig>(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("Failed to deserialize config"));
}

#[test]
fn local_overlay_overrides_the_base_file() {
    let dir = TempDir::new().unwrap();
    let base = write(&dir, "wodi.toml", "[logging]\nlevel = \"debug\"\nname = \"editor\"\n");
    write(&dir, "wodi.local.toml", "[logging]\nlevel = \"trace\"\n");

    let cfg: WodiConfig = load_config(Some(&base)).unwrap();
    assert_eq!(cfg.logging.level, "trace");
    assert_eq!(cfg.logging.name, "editor");
}
