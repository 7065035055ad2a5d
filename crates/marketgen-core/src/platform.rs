use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A social platform content can be adapted for.
///
/// Only some platforms have a registered adapter; the rest are still valid
/// targets and are handled by the generic fallback.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Platform {
    Facebook,
    Instagram,
    LinkedIn,
    YouTube,
    Twitter,
    TikTok,
    /// Any other platform name, stored lowercased.
    Other(String),
}

impl Platform {
    /// Lowercase identifier used in config keys, logs and serialized output.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Platform::Facebook => "facebook",
            Platform::Instagram => "instagram",
            Platform::LinkedIn => "linkedin",
            Platform::YouTube => "youtube",
            Platform::Twitter => "twitter",
            Platform::TikTok => "tiktok",
            Platform::Other(name) => name,
        }
    }

    /// Human-facing name, e.g. `"LinkedIn"`.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Platform::Facebook => "Facebook",
            Platform::Instagram => "Instagram",
            Platform::LinkedIn => "LinkedIn",
            Platform::YouTube => "YouTube",
            Platform::Twitter => "Twitter",
            Platform::TikTok => "TikTok",
            Platform::Other(name) => name,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Platform::from(s.to_string()))
    }
}

impl From<String> for Platform {
    fn from(value: String) -> Self {
        let lower = value.trim().to_lowercase();
        match lower.as_str() {
            "facebook" | "fb" => Platform::Facebook,
            "instagram" | "ig" => Platform::Instagram,
            "linkedin" => Platform::LinkedIn,
            "youtube" | "yt" => Platform::YouTube,
            "twitter" | "x" => Platform::Twitter,
            "tiktok" => Platform::TikTok,
            _ => Platform::Other(lower),
        }
    }
}

impl From<Platform> for String {
    fn from(value: Platform) -> Self {
        value.as_str().to_string()
    }
}

/// The declared kind of a [`crate::ContentItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Text,
    Image,
    Video,
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentType::Text => write!(f, "text"),
            ContentType::Image => write!(f, "image"),
            ContentType::Video => write!(f, "video"),
        }
    }
}
