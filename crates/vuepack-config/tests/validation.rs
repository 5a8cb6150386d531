//! Filesystem validation against real project directories.

use std::fs;

use tempfile::TempDir;
use vuepack_config::{
    produce_config, validate_fs, ConfigError, ConfigValidator, Environment, FsValidator,
};

#[test]
fn fs_validator_accepts_existing_entry() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("main.js"), "import App from './App.vue'\n").expect("write entry");

    let config = produce_config(&Environment::new());
    FsValidator::new(dir.path())
        .validate(&config)
        .expect("entry exists");
}

#[test]
fn fs_validator_reports_missing_entry() {
    let dir = TempDir::new().expect("tempdir");
    let config = produce_config(&Environment::new().with("NODE_ENV", "production"));

    let err = validate_fs(&config, dir.path()).unwrap_err();
    match err {
        ConfigError::EntryNotFound { path } => assert!(path.ends_with("main.js")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn fs_validator_does_not_require_output_dir() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("main.js"), "").expect("write entry");

    let config = produce_config(&Environment::new());
    assert!(validate_fs(&config, dir.path()).is_ok());
    assert!(!dir.path().join("build").exists());
}

#[test]
fn fs_validator_rejects_directory_as_entry() {
    let dir = TempDir::new().expect("tempdir");
    fs::create_dir(dir.path().join("main.js")).expect("mkdir");

    let config = produce_config(&Environment::new());
    assert!(matches!(
        validate_fs(&config, dir.path()),
        Err(ConfigError::EntryNotFound { .. })
    ));
}
