use prodmuse::Config;
use prodmuse::gateway::DEFAULT_MODEL;
use tempfile::TempDir;

#[test]
fn test_defaults() {
    let config = Config::default();

    assert_eq!(config.effective_model(), DEFAULT_MODEL);
    assert_eq!(config.gateway.request_timeout_secs, 30);
    assert!(config.instructions.is_empty());
}

#[test]
fn test_update_and_round_trip() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let config_path = temp_dir.path().join("config.toml");

    let mut config = Config::default();
    config.update(
        Some("test-key".to_string()),
        Some("gemini-2.5-pro".to_string()),
        Some(60),
        Some("Keep it short".to_string()),
    );

    config.save_to(&config_path).expect("Failed to save config");
    let loaded = Config::load_from(&config_path).expect("Failed to load config");

    assert_eq!(loaded.gateway.api_key, "test-key");
    assert_eq!(loaded.effective_model(), "gemini-2.5-pro");
    assert_eq!(loaded.gateway.request_timeout_secs, 60);
    assert_eq!(loaded.instructions, "Keep it short");
}

#[test]
fn test_load_missing_file_yields_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let config_path = temp_dir.path().join("does-not-exist.toml");

    let config = Config::load_from(&config_path).expect("Missing file falls back to defaults");
    assert_eq!(config.effective_model(), DEFAULT_MODEL);
}

#[test]
fn test_partial_config_file_fills_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let config_path = temp_dir.path().join("config.toml");

    std::fs::write(&config_path, "[gateway]\nmodel = \"gemini-2.5-pro\"\n")
        .expect("Failed to write config");

    let config = Config::load_from(&config_path).expect("Failed to load config");
    assert_eq!(config.effective_model(), "gemini-2.5-pro");
    assert_eq!(config.gateway.request_timeout_secs, 30);
}

#[test]
fn test_empty_api_key_not_serialized() {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let config_path = temp_dir.path().join("config.toml");

    let config = Config::default();
    config.save_to(&config_path).expect("Failed to save config");

    let raw = std::fs::read_to_string(&config_path).expect("Failed to read config");
    assert!(!raw.contains("api_key"), "empty credential must not be written");
}

#[test]
fn test_temp_instructions_override() {
    let mut config = Config::default();
    config.instructions = "persistent".to_string();
    assert_eq!(config.effective_instructions(), "persistent");

    config.set_temp_instructions(Some("one-shot".to_string()));
    assert_eq!(config.effective_instructions(), "one-shot");

    config.set_temp_instructions(None);
    assert_eq!(config.effective_instructions(), "persistent");
}
