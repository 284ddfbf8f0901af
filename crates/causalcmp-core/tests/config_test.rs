//! Configuration loading, layering, and validation tests.

use std::sync::Mutex;

use causalcmp_core::config::{CausalCmpConfig, CliOverrides};
use causalcmp_core::errors::ConfigError;

/// Serializes tests that touch process environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_defaults_resolve_to_constants() {
    let config = CausalCmpConfig::default();
    assert_eq!(config.comparison.effective_alpha(), 0.05);
    assert_eq!(config.comparison.effective_max_trek_length(), 8);
    assert!(config.transform.effective_complete_rule_set());
    assert_eq!(config.markup.effective_cache_capacity(), 512);
}

#[test]
fn test_from_toml_parses_sections() {
    let config = CausalCmpConfig::from_toml(
        r#"
        [comparison]
        alpha = 0.01
        statistics = ["AP", "AR"]

        [transform]
        complete_rule_set = false
        max_discriminating_path_length = 6
        "#,
    )
    .unwrap();
    assert_eq!(config.comparison.alpha, Some(0.01));
    assert_eq!(config.comparison.statistics, vec!["AP", "AR"]);
    assert!(!config.transform.effective_complete_rule_set());
    assert_eq!(config.transform.max_discriminating_path_length, Some(6));
}

#[test]
fn test_from_toml_rejects_bad_alpha() {
    let err = CausalCmpConfig::from_toml("[comparison]\nalpha = 1.5\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "comparison.alpha"));
}

#[test]
fn test_from_toml_rejects_invalid_syntax() {
    let err = CausalCmpConfig::from_toml("[comparison\nalpha = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_zero_cache_capacity_rejected() {
    let err = CausalCmpConfig::from_toml("[markup]\ncache_capacity = 0\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn test_load_layers_project_env_and_cli() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("causalcmp.toml"),
        "[comparison]\nalpha = 0.2\nmax_trek_length = 3\n",
    )
    .unwrap();

    std::env::set_var("CAUSALCMP_MAX_TREK_LENGTH", "5");
    let cli = CliOverrides {
        alpha: Some(0.3),
        ..Default::default()
    };
    let config = CausalCmpConfig::load(dir.path(), Some(&cli));
    std::env::remove_var("CAUSALCMP_MAX_TREK_LENGTH");
    let config = config.unwrap();

    // CLI beats project, env beats project.
    assert_eq!(config.comparison.alpha, Some(0.3));
    assert_eq!(config.comparison.max_trek_length, Some(5));
}

#[test]
fn test_load_without_project_file_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let config = CausalCmpConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.comparison.effective_alpha(), 0.05);
}

#[test]
fn test_invalid_project_file_is_fatal() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("causalcmp.toml"), "not = [valid").unwrap();
    let err = CausalCmpConfig::load(dir.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_to_toml_round_trip() {
    let mut config = CausalCmpConfig::default();
    config.comparison.alpha = Some(0.1);
    config.markup.cache_capacity = Some(64);
    let text = config.to_toml().unwrap();
    let back = CausalCmpConfig::from_toml(&text).unwrap();
    assert_eq!(back, config);
}
