use marketgen_core::{ContentItem, ContentType, Platform};
use serde::Serialize;

use crate::error::AdaptError;

/// How urgently a recommendation should be acted on.
///
/// Ordered so that `High > Medium > Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationKind {
    Truncated,
    Length,
    Hashtags,
    Question,
    CallToAction,
    AltText,
    Caption,
    ImageFormat,
    Media,
    Title,
    Description,
    Duration,
    Thumbnail,
    Tags,
    Seo,
    Timestamps,
    Links,
}

/// A typed advisory attached to an adaptation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub priority: Priority,
    pub message: String,
}

impl Recommendation {
    pub fn low(kind: RecommendationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            priority: Priority::Low,
            message: message.into(),
        }
    }

    pub fn medium(kind: RecommendationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            priority: Priority::Medium,
            message: message.into(),
        }
    }

    pub fn high(kind: RecommendationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            priority: Priority::High,
            message: message.into(),
        }
    }
}

/// Shape the adapted content takes on the target platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    Post,
    Article,
    Image,
    Video,
    /// Text carried as a video description.
    VideoDescription,
    /// Image carried as a video thumbnail.
    Thumbnail,
    /// Labelled only; no platform rules applied.
    Generic,
}

/// Duration class of a video on its platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationClass {
    Feed,
    Reels,
    Shorts,
    Standard,
    OverLimit,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContentStats {
    pub character_count: usize,
    pub word_count: usize,
    pub hashtag_count: usize,
    pub mention_count: usize,
}

impl ContentStats {
    #[must_use]
    pub fn of(text: &str, hashtag_count: usize, mention_count: usize) -> Self {
        Self {
            character_count: text.chars().count(),
            word_count: text.split_whitespace().count(),
            hashtag_count,
            mention_count,
        }
    }
}

/// Whether the adapted content honours the platform's hard limits, and
/// which alterations were needed to get there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LimitFlags {
    pub within_limits: bool,
    pub text_truncated: bool,
    pub title_truncated: bool,
    pub description_truncated: bool,
    /// Number of hashtags dropped by the platform cap.
    pub hashtags_dropped: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_format_valid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_valid: Option<bool>,
}

impl Default for LimitFlags {
    fn default() -> Self {
        Self {
            within_limits: true,
            text_truncated: false,
            title_truncated: false,
            description_truncated: false,
            hashtags_dropped: 0,
            image_format_valid: None,
            duration_valid: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VideoInsights {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_class: Option<DurationClass>,
    pub title_length: usize,
    pub description_length: usize,
    pub tags: Vec<String>,
    /// Only evaluated on platforms with search-driven discovery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_seo_optimized: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_seo_optimized: Option<bool>,
    pub has_timestamps: bool,
    pub has_links: bool,
    pub has_call_to_action: bool,
    pub has_thumbnail: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdaptationMetadata {
    pub platform: Platform,
    pub format: Format,
    /// Set when the content type changed during adaptation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_type: Option<ContentType>,
    pub stats: ContentStats,
    pub limits: LimitFlags,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<VideoInsights>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub recommendations: Vec<Recommendation>,
}

impl AdaptationMetadata {
    #[must_use]
    pub fn new(platform: Platform, format: Format) -> Self {
        Self {
            platform,
            format,
            original_type: None,
            stats: ContentStats::default(),
            limits: LimitFlags::default(),
            video: None,
            note: None,
            recommendations: Vec::new(),
        }
    }

    /// Highest priority among the recommendations, if any.
    #[must_use]
    pub fn max_priority(&self) -> Option<Priority> {
        self.recommendations.iter().map(|r| r.priority).max()
    }
}

/// Outcome of adapting one item for one platform.
///
/// On failure `content` is the untouched input and `error` says why.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdaptationResult {
    pub platform: Platform,
    pub success: bool,
    pub content: ContentItem,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AdaptationMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<AdaptError>,
}

impl AdaptationResult {
    #[must_use]
    pub fn adapted(content: ContentItem, metadata: AdaptationMetadata) -> Self {
        Self {
            platform: metadata.platform.clone(),
            success: true,
            content,
            metadata: Some(metadata),
            error: None,
        }
    }

    #[must_use]
    pub fn failed(platform: Platform, original: ContentItem, error: AdaptError) -> Self {
        Self {
            platform,
            success: false,
            content: original,
            metadata: None,
            error: Some(error),
        }
    }

    #[must_use]
    pub fn recommendations(&self) -> &[Recommendation] {
        self.metadata
            .as_ref()
            .map_or(&[], |m| m.recommendations.as_slice())
    }
}
