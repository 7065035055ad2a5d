use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::platform::Platform;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Coefficients for the sentence-length ideal used by brand scoring.
///
/// A `concise`/`brief` attribute moves the ideal to
/// `concise_base - concise_slope * target`; `detailed`/`elaborate` moves it to
/// `detailed_base + detailed_slope * target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentenceLengthSettings {
    pub ideal_words: f64,
    pub concise_base: f64,
    pub concise_slope: f64,
    pub detailed_base: f64,
    pub detailed_slope: f64,
}

impl Default for SentenceLengthSettings {
    fn default() -> Self {
        Self {
            ideal_words: 15.0,
            concise_base: 16.0,
            concise_slope: 10.0,
            detailed_base: 15.0,
            detailed_slope: 10.0,
        }
    }
}

/// Per-platform override of the hashtag reflow trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReflowSetting {
    /// Keep inline hashtags where they are.
    Off,
    /// Collect inline tags into a trailing block once more than this many are inline.
    Threshold(usize),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub brands_path: PathBuf,
    pub data_dir: PathBuf,
    pub max_concurrent_platforms: usize,
    pub sentence_length: SentenceLengthSettings,
    /// Only platforms with an explicit override appear here.
    pub reflow_overrides: BTreeMap<Platform, ReflowSetting>,
}

impl AppConfig {
    /// Directory holding one JSON document per saved brand.
    #[must_use]
    pub fn brand_store_dir(&self) -> PathBuf {
        self.data_dir.join("brands")
    }
}
