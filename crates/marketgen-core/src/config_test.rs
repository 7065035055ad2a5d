use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("unknown").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "MARKETGEN_ENV"));
}

#[test]
fn build_app_config_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.brands_path.to_str(), Some("./config/brands.yaml"));
    assert_eq!(cfg.data_dir.to_str(), Some("./data"));
    assert_eq!(cfg.max_concurrent_platforms, 4);
    assert_eq!(cfg.sentence_length, SentenceLengthSettings::default());
    assert!(cfg.reflow_overrides.is_empty());
}

#[test]
fn brand_store_dir_is_under_data_dir() {
    let mut map = HashMap::new();
    map.insert("MARKETGEN_DATA_DIR", "/tmp/mg");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.brand_store_dir().to_str(), Some("/tmp/mg/brands"));
}

#[test]
fn max_concurrent_platforms_override() {
    let mut map = HashMap::new();
    map.insert("MARKETGEN_MAX_CONCURRENT_PLATFORMS", "8");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.max_concurrent_platforms, 8);
}

#[test]
fn max_concurrent_platforms_invalid() {
    let mut map = HashMap::new();
    map.insert("MARKETGEN_MAX_CONCURRENT_PLATFORMS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MARKETGEN_MAX_CONCURRENT_PLATFORMS"),
        "expected InvalidEnvVar(MARKETGEN_MAX_CONCURRENT_PLATFORMS), got: {result:?}"
    );
}

#[test]
fn max_concurrent_platforms_zero_rejected() {
    let mut map = HashMap::new();
    map.insert("MARKETGEN_MAX_CONCURRENT_PLATFORMS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::InvalidEnvVar { .. })));
}

#[test]
fn sentence_length_coefficients_override() {
    let mut map = HashMap::new();
    map.insert("MARKETGEN_SENTENCE_IDEAL_WORDS", "12");
    map.insert("MARKETGEN_CONCISE_SLOPE", "6.5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!((cfg.sentence_length.ideal_words - 12.0).abs() < f64::EPSILON);
    assert!((cfg.sentence_length.concise_slope - 6.5).abs() < f64::EPSILON);
    assert!((cfg.sentence_length.detailed_base - 15.0).abs() < f64::EPSILON);
}

#[test]
fn sentence_length_rejects_negative_and_nan() {
    for bad in ["-1", "NaN", "inf", "abc"] {
        let mut map = HashMap::new();
        map.insert("MARKETGEN_DETAILED_SLOPE", bad);
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MARKETGEN_DETAILED_SLOPE"),
            "expected InvalidEnvVar for {bad}, got: {result:?}"
        );
    }
}

#[test]
fn sentence_ideal_zero_rejected() {
    let mut map = HashMap::new();
    map.insert("MARKETGEN_SENTENCE_IDEAL_WORDS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::InvalidEnvVar { .. })));
}

#[test]
fn reflow_override_threshold_and_off() {
    let mut map = HashMap::new();
    map.insert("MARKETGEN_REFLOW_THRESHOLD_INSTAGRAM", "7");
    map.insert("MARKETGEN_REFLOW_THRESHOLD_FACEBOOK", "OFF");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(
        cfg.reflow_overrides.get(&Platform::Instagram),
        Some(&ReflowSetting::Threshold(7))
    );
    assert_eq!(
        cfg.reflow_overrides.get(&Platform::Facebook),
        Some(&ReflowSetting::Off)
    );
    assert!(!cfg.reflow_overrides.contains_key(&Platform::LinkedIn));
}

#[test]
fn reflow_override_invalid() {
    let mut map = HashMap::new();
    map.insert("MARKETGEN_REFLOW_THRESHOLD_YOUTUBE", "lots");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "MARKETGEN_REFLOW_THRESHOLD_YOUTUBE"),
        "got: {result:?}"
    );
}
