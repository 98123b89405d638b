use std::fs;

use bintree::application::ApplicationError;
use bintree::config::Settings;
use bintree::util::testing;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("bintree.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn given_explicit_file_when_loading_then_values_override_defaults() {
    testing::init_test_setup();
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "show_paths = true\n\n[generator]\ncount = 12\nseed = 99\n",
    );

    let settings = Settings::load(Some(&path)).unwrap();

    assert!(settings.show_paths);
    assert_eq!(settings.generator.count, 12);
    assert_eq!(settings.generator.seed, Some(99));
    assert_eq!(settings.generator.max_value, 50);
}

#[test]
fn given_missing_explicit_file_when_loading_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let result = Settings::load(Some(&path));

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_malformed_toml_when_loading_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[generator\ncount = ");

    assert!(matches!(
        Settings::load(Some(&path)),
        Err(ApplicationError::Config { .. })
    ));
}

#[test]
fn given_zero_count_in_file_when_loading_then_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[generator]\ncount = 0\n");

    let err = Settings::load(Some(&path)).unwrap_err();

    assert!(err.to_string().contains("count"));
}

#[test]
fn given_template_when_written_and_loaded_then_defaults_result() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, &Settings::template());

    let settings = Settings::load(Some(&path)).unwrap();

    assert_eq!(settings.generator.count, 30);
    assert!(!settings.show_paths);
}
