use std::collections::HashSet;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// A named tone target, e.g. `formal` at `0.8`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleAttribute {
    pub name: String,
    /// Target value in `[0.0, 1.0]`.
    #[serde(alias = "value")]
    pub target_value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A brand's declared voice: keywords, ordered style targets and audience.
///
/// Treated as a read-only snapshot for the duration of any adaptation or
/// scoring call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandModel {
    /// Sanitized identifier. Derived from `name` when omitted in YAML.
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub style_attributes: Vec<StyleAttribute>,
    #[serde(default)]
    pub target_audience: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl BrandModel {
    /// Minimal brand with only a name; the id is the sanitized name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: sanitize_id(&name),
            name,
            description: None,
            industry: None,
            keywords: Vec::new(),
            style_attributes: Vec::new(),
            target_audience: Vec::new(),
            updated_at: None,
        }
    }

    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = dedup_keywords(keywords.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_style(mut self, name: impl Into<String>, target_value: f64) -> Self {
        self.style_attributes.push(StyleAttribute {
            name: name.into(),
            target_value,
            description: None,
        });
        self
    }

    /// The id used as a storage key: the explicit id when set, otherwise
    /// derived from the name.
    #[must_use]
    pub fn storage_id(&self) -> String {
        if self.id.trim().is_empty() {
            sanitize_id(&self.name)
        } else {
            sanitize_id(&self.id)
        }
    }
}

/// Reduce an arbitrary name to a filesystem- and URL-safe identifier.
///
/// Lowercases, keeps ASCII alphanumerics, turns spaces, underscores and
/// dashes into single dashes and drops everything else.
#[must_use]
pub fn sanitize_id(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' {
                c
            } else if c == ' ' || c == '_' {
                '-'
            } else {
                '\0'
            }
        })
        .filter(|&c| c != '\0')
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Keep keywords in declared order, dropping blanks and case-insensitive
/// repeats.
fn dedup_keywords(keywords: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    keywords
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty() && seen.insert(k.to_lowercase()))
        .collect()
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BrandsFile {
    pub brands: Vec<BrandModel>,
}

impl BrandsFile {
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&BrandModel> {
        let wanted = sanitize_id(id);
        self.brands.iter().find(|b| b.id == wanted)
    }
}

/// Load and validate brand models from a YAML file.
///
/// Missing ids are derived from brand names and keyword lists are
/// de-duplicated before validation.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_brands(path: &Path) -> Result<BrandsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::BrandsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_brands(&content)
}

/// Parse and validate brand models from YAML text.
///
/// # Errors
///
/// Returns `ConfigError` if the YAML is malformed or fails validation.
pub fn parse_brands(yaml: &str) -> Result<BrandsFile, ConfigError> {
    let mut brands_file: BrandsFile =
        serde_yaml::from_str(yaml).map_err(ConfigError::BrandsFileParse)?;

    for brand in &mut brands_file.brands {
        brand.id = brand.storage_id();
        brand.keywords = dedup_keywords(std::mem::take(&mut brand.keywords).into_iter());
    }

    validate_brands(&brands_file)?;

    Ok(brands_file)
}

fn validate_brands(brands_file: &BrandsFile) -> Result<(), ConfigError> {
    let mut seen_ids = HashSet::new();

    for brand in &brands_file.brands {
        if brand.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "brand name must be non-empty".to_string(),
            ));
        }

        if brand.id.is_empty() {
            return Err(ConfigError::Validation(format!(
                "brand '{}' has no usable identifier characters",
                brand.name
            )));
        }

        if !seen_ids.insert(brand.id.clone()) {
            return Err(ConfigError::Validation(format!(
                "duplicate brand id: '{}' (from brand '{}')",
                brand.id, brand.name
            )));
        }

        for attr in &brand.style_attributes {
            if attr.name.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "brand '{}' has a style attribute without a name",
                    brand.name
                )));
            }
            if !(0.0..=1.0).contains(&attr.target_value) {
                return Err(ConfigError::Validation(format!(
                    "brand '{}' style attribute '{}' has target {} outside [0, 1]",
                    brand.name, attr.name, attr.target_value
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "brands_test.rs"]
mod tests;
