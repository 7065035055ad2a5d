use std::collections::BTreeMap;

use crate::app_config::{AppConfig, Environment, ReflowSetting, SentenceLengthSettings};
use crate::platform::Platform;
use crate::ConfigError;

/// Platforms whose reflow threshold can be overridden from the environment.
const REFLOW_PLATFORMS: [Platform; 4] = [
    Platform::Facebook,
    Platform::Instagram,
    Platform::LinkedIn,
    Platform::YouTube,
];

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if any value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if any value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional; unset variables take their documented default.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.trim()
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_f64 = |var: &str, default: f64| -> Result<f64, ConfigError> {
        let Ok(raw) = lookup(var) else {
            return Ok(default);
        };
        let value = raw
            .trim()
            .parse::<f64>()
            .map_err(|e| invalid(var, e.to_string()))?;
        if !value.is_finite() || value < 0.0 {
            return Err(invalid(var, "must be a finite, non-negative number".to_string()));
        }
        Ok(value)
    };

    let env = parse_environment(&or_default("MARKETGEN_ENV", "development"))?;
    let log_level = or_default("MARKETGEN_LOG_LEVEL", "info");
    let brands_path = PathBuf::from(or_default("MARKETGEN_BRANDS_PATH", "./config/brands.yaml"));
    let data_dir = PathBuf::from(or_default("MARKETGEN_DATA_DIR", "./data"));

    let max_concurrent_platforms = parse_usize("MARKETGEN_MAX_CONCURRENT_PLATFORMS", "4")?;
    if max_concurrent_platforms == 0 {
        return Err(invalid(
            "MARKETGEN_MAX_CONCURRENT_PLATFORMS",
            "must be at least 1".to_string(),
        ));
    }

    let defaults = SentenceLengthSettings::default();
    let sentence_length = SentenceLengthSettings {
        ideal_words: parse_f64("MARKETGEN_SENTENCE_IDEAL_WORDS", defaults.ideal_words)?,
        concise_base: parse_f64("MARKETGEN_CONCISE_BASE", defaults.concise_base)?,
        concise_slope: parse_f64("MARKETGEN_CONCISE_SLOPE", defaults.concise_slope)?,
        detailed_base: parse_f64("MARKETGEN_DETAILED_BASE", defaults.detailed_base)?,
        detailed_slope: parse_f64("MARKETGEN_DETAILED_SLOPE", defaults.detailed_slope)?,
    };
    if sentence_length.ideal_words == 0.0 {
        return Err(invalid(
            "MARKETGEN_SENTENCE_IDEAL_WORDS",
            "must be greater than zero".to_string(),
        ));
    }

    let mut reflow_overrides = BTreeMap::new();
    for platform in REFLOW_PLATFORMS {
        let var = reflow_var(&platform);
        if let Ok(raw) = lookup(&var) {
            let setting = parse_reflow(&raw).map_err(|reason| invalid(&var, reason))?;
            reflow_overrides.insert(platform, setting);
        }
    }

    Ok(AppConfig {
        env,
        log_level,
        brands_path,
        data_dir,
        max_concurrent_platforms,
        sentence_length,
        reflow_overrides,
    })
}

fn reflow_var(platform: &Platform) -> String {
    format!(
        "MARKETGEN_REFLOW_THRESHOLD_{}",
        platform.as_str().to_ascii_uppercase()
    )
}

/// Parse a reflow override: `off` or a non-negative inline-tag count.
fn parse_reflow(raw: &str) -> Result<ReflowSetting, String> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("off") {
        return Ok(ReflowSetting::Off);
    }
    raw.parse::<usize>()
        .map(ReflowSetting::Threshold)
        .map_err(|e| format!("expected 'off' or a count: {e}"))
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for unrecognized values.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "MARKETGEN_ENV".to_string(),
            reason: format!("expected development, test, or production; got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
