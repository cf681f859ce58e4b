use crate::settings::manager::SettingsManager;
use crate::settings::Settings;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_from_path_creates_default_file() {
    let temp_dir = TempDir::new().unwrap();
    let settings_path = temp_dir.path().join("gauntlet.toml");

    let manager = SettingsManager::from_path(settings_path.clone()).unwrap();

    assert!(settings_path.exists());
    let settings = manager.settings();
    assert_eq!(settings.tests_dir, PathBuf::from("tests"));
    assert_eq!(settings.module_prefix, "test_");
    assert_eq!(settings.entry_scripts.len(), 3);
}

#[test]
fn test_loads_existing_settings() {
    let temp_dir = TempDir::new().unwrap();
    let settings_path = temp_dir.path().join("gauntlet.toml");

    let mut settings = Settings::default();
    settings.namespace = "suite".to_string();
    settings.omit.insert("test_slow".to_string());
    let contents = toml::to_string_pretty(&settings).unwrap();
    std::fs::write(&settings_path, contents).unwrap();

    let manager = SettingsManager::from_path(settings_path).unwrap();

    let loaded = manager.settings();
    assert_eq!(loaded.namespace, "suite");
    assert!(loaded.omit.contains("test_slow"));
}

#[test]
fn test_partial_file_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let settings_path = temp_dir.path().join("gauntlet.toml");

    std::fs::write(&settings_path, "namespace = \"pkg\"\n").unwrap();

    let manager = SettingsManager::from_path(settings_path).unwrap();

    let settings = manager.settings();
    assert_eq!(settings.namespace, "pkg");
    // Unspecified fields fall back to defaults
    assert_eq!(settings.module_prefix, "test_");
    assert_eq!(settings.interpreter, "python3");
}

#[test]
fn test_corrupt_file_backed_up_and_replaced() {
    let temp_dir = TempDir::new().unwrap();
    let settings_path = temp_dir.path().join("gauntlet.toml");

    std::fs::write(&settings_path, "this is { not toml").unwrap();

    let manager = SettingsManager::from_path(settings_path.clone()).unwrap();

    let backup_path = settings_path.with_extension("toml.backup");
    assert!(backup_path.exists());
    assert_eq!(
        std::fs::read_to_string(&backup_path).unwrap(),
        "this is { not toml"
    );
    // The live file is rewritten with defaults
    assert_eq!(manager.settings().module_prefix, "test_");
    let rewritten: Settings =
        toml::from_str(&std::fs::read_to_string(&settings_path).unwrap()).unwrap();
    assert_eq!(rewritten.namespace, "tests");
}

#[test]
fn test_update_setting_is_in_memory_only() {
    let temp_dir = TempDir::new().unwrap();
    let settings_path = temp_dir.path().join("gauntlet.toml");

    let manager = SettingsManager::from_path(settings_path.clone()).unwrap();
    manager.update_setting(|s| s.tests_dir = PathBuf::from("elsewhere"));

    assert_eq!(manager.settings().tests_dir, PathBuf::from("elsewhere"));
    let on_disk: Settings =
        toml::from_str(&std::fs::read_to_string(&settings_path).unwrap()).unwrap();
    assert_eq!(on_disk.tests_dir, PathBuf::from("tests"));

    manager.save().unwrap();
    let on_disk: Settings =
        toml::from_str(&std::fs::read_to_string(&settings_path).unwrap()).unwrap();
    assert_eq!(on_disk.tests_dir, PathBuf::from("elsewhere"));
}

#[test]
fn test_clones_share_one_instance() {
    let temp_dir = TempDir::new().unwrap();
    let settings_path = temp_dir.path().join("gauntlet.toml");

    let manager = SettingsManager::from_path(settings_path).unwrap();
    let clone = manager.clone();
    clone.update_setting(|s| s.interpreter = "sh".to_string());

    assert_eq!(manager.settings().interpreter, "sh");
}
