//! Integration tests for configuration management

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use uni_records::config::{Config, ConfigOverrides};
use uni_records::core::database::{CorruptPolicy, DEFAULT_DATA_FILE};

/// Helper to create a temporary config location
fn setup_temp_config() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("unirecords").join("config.toml");
    (temp_dir, config_file)
}

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.storage.data_file.is_empty(),
        "Default data_file should not be empty"
    );
    assert_eq!(config.storage.data_path(), PathBuf::from(DEFAULT_DATA_FILE));
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[storage]
data_file = "/srv/records/students.data"
on_corrupt = "error"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.storage.data_file, "/srv/records/students.data");
    assert_eq!(config.storage.on_corrupt, CorruptPolicy::Error);
}

#[test]
fn test_config_from_toml_partial() {
    let toml_str = r#"
[logging]
level = "error"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    assert_eq!(config.storage.data_file, "");
    assert_eq!(config.storage.on_corrupt, CorruptPolicy::Empty);
    // An unset data file still resolves to the default path
    assert_eq!(config.storage.data_path(), PathBuf::from(DEFAULT_DATA_FILE));
}

#[test]
fn test_config_rejects_unknown_policy() {
    let toml_str = r#"
[logging]

[storage]
on_corrupt = "shrug"
"#;

    assert!(Config::from_toml(toml_str).is_err());
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$UNI_RECORDS/logs/app.log"

[storage]
data_file = "$UNI_RECORDS/students.data"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    assert!(config.logging.file.contains("unirecords"));
    assert!(!config.logging.file.contains("$UNI_RECORDS"));
    assert!(config.storage.data_file.ends_with("students.data"));
    assert!(!config.storage.data_file.contains("$UNI_RECORDS"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    assert!(config.get("level").is_some());

    config.set("level", "DEBUG").expect("Failed to set level");
    assert_eq!(config.get("level").unwrap(), "debug");

    config.set("verbose", "true").expect("Failed to set verbose");
    assert_eq!(config.get("verbose").unwrap(), "true");
    assert!(config.logging.verbose);

    config
        .set("data-file", "/tmp/records.data")
        .expect("Failed to set data file");
    assert_eq!(config.get("data_file").unwrap(), "/tmp/records.data");

    config
        .set("on_corrupt", "error")
        .expect("Failed to set policy");
    assert_eq!(config.get("on-corrupt").unwrap(), "error");

    assert!(config.set("verbose", "maybe").is_err());
    assert!(config.set("level", "loud").is_err());
    assert!(config.set("on_corrupt", "ignore").is_err());
    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    let flipped = match defaults.storage.on_corrupt {
        CorruptPolicy::Empty => "error",
        CorruptPolicy::Error => "empty",
    };
    config.set("data_file", "/elsewhere.data").unwrap();
    config.set("on_corrupt", flipped).unwrap();
    assert_ne!(config.storage.on_corrupt, defaults.storage.on_corrupt);

    config
        .unset("data_file", &defaults)
        .expect("Failed to unset data_file");
    config
        .unset("on_corrupt", &defaults)
        .expect("Failed to unset on_corrupt");

    assert_eq!(config.storage.data_file, defaults.storage.data_file);
    assert_eq!(config.storage.on_corrupt, defaults.storage.on_corrupt);
    assert!(config.unset("nope", &defaults).is_err());
}

#[test]
fn test_config_save_and_load() {
    let (temp_dir, config_file) = setup_temp_config();

    let data_file = temp_dir.path().join("students.data");
    let data_file = data_file.to_string_lossy().to_string();

    let mut config = Config::from_defaults();
    config.set("level", "error").unwrap();
    config.set("data_file", &data_file).unwrap();
    config
        .save_to(&config_file)
        .expect("Failed to save config");

    let loaded = Config::load_from(&config_file);
    assert_eq!(loaded.logging.level, "error");
    assert_eq!(loaded.storage.data_file, data_file);
}

#[test]
fn test_set_data_file_requires_existing_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut config = Config::from_defaults();
    let before = config.storage.data_file.clone();

    let missing = temp_dir.path().join("missing").join("students.data");
    let err = config
        .set("data_file", &missing.to_string_lossy())
        .unwrap_err();
    assert!(err.contains("does not exist"));
    assert_eq!(config.storage.data_file, before);

    config.set("data_file", "students.data").unwrap();
    assert_eq!(config.storage.data_file, "students.data");

    config
        .set("data_file", "$UNI_RECORDS/data/students.data")
        .unwrap();
    assert!(!config.storage.data_file.contains("$UNI_RECORDS"));
    assert!(config.storage.data_file.ends_with("students.data"));
}

#[test]
fn test_load_from_creates_file_on_first_run() {
    let (_temp_dir, config_file) = setup_temp_config();
    assert!(!config_file.exists());

    let config = Config::load_from(&config_file);

    assert!(config_file.exists());
    assert_eq!(
        config.storage.data_file,
        Config::from_defaults().storage.data_file
    );
}

#[test]
fn test_load_from_merges_and_saves_missing_fields() {
    let (_temp_dir, config_file) = setup_temp_config();
    fs::create_dir_all(config_file.parent().unwrap()).unwrap();
    fs::write(&config_file, "[logging]\nlevel = \"error\"\n").unwrap();

    let config = Config::load_from(&config_file);

    assert_eq!(config.logging.level, "error");
    assert!(!config.storage.data_file.is_empty());
    let saved = fs::read_to_string(&config_file).unwrap();
    assert!(saved.contains("data_file"));
}

#[test]
fn test_load_from_unparseable_file_uses_defaults() {
    let (_temp_dir, config_file) = setup_temp_config();
    fs::create_dir_all(config_file.parent().unwrap()).unwrap();
    fs::write(&config_file, "this is = = not toml").unwrap();

    let config = Config::load_from(&config_file);
    assert_eq!(config.logging.level, Config::from_defaults().logging.level);
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
        data_file: Some("./custom.data".to_string()),
        on_corrupt: Some(CorruptPolicy::Error),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
    assert_eq!(config.storage.data_file, "./custom.data");
    assert_eq!(config.storage.on_corrupt, CorruptPolicy::Error);
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let before = config.storage.data_file.clone();

    config.apply_overrides(&ConfigOverrides {
        level: Some("debug".to_string()),
        ..Default::default()
    });

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.storage.data_file, before);
}

#[test]
fn test_config_display_format() {
    let config = Config::from_defaults();
    let display_str = format!("{config}");

    assert!(display_str.contains("[logging]"));
    assert!(display_str.contains("[storage]"));
    assert!(display_str.contains("data_file"));
    assert!(display_str.contains("on_corrupt"));
}

#[test]
fn test_merge_defaults_adds_missing_fields() {
    let toml_str = r#"
[logging]
level = "error"

[storage]
data_file = ""
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse minimal config");
    let defaults = Config::from_defaults();

    assert!(config.merge_defaults(&defaults));
    assert_eq!(config.storage.data_file, defaults.storage.data_file);
    assert_eq!(config.logging.level, "error");
}

#[test]
fn test_get_unirecords_dir() {
    let dir = Config::get_unirecords_dir();

    assert!(dir.to_string_lossy().contains("unirecords"));
    assert_ne!(dir, PathBuf::from("."));
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();

    let path_str = path.to_string_lossy();
    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
}
