//! Table-driven platform adapters.
//!
//! Each supported platform is one [`PlatformSpec`]: its limits plus a handler
//! per content type. Adding a platform means adding one table entry to
//! [`AdapterRegistry::standard`].

mod common;
pub mod facebook;
pub mod generic;
pub mod instagram;
pub mod linkedin;
pub mod youtube;

use std::collections::{BTreeMap, HashMap};

use marketgen_core::{
    ContentItem, ContentType, ImageContent, Payload, Platform, ReflowSetting, TextContent,
    VideoContent,
};

use crate::error::AdaptError;
use crate::hashtags::{HashtagReconciler, ReflowPolicy};
use crate::truncate::Truncator;
use crate::types::AdaptationResult;

pub type TextHandler = fn(&PlatformSpec, &ContentItem, &TextContent) -> AdaptationResult;
pub type ImageHandler = fn(&PlatformSpec, &ContentItem, &ImageContent) -> AdaptationResult;
pub type VideoHandler = fn(&PlatformSpec, &ContentItem, &VideoContent) -> AdaptationResult;

/// Recommended hashtag count range, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashtagRange {
    pub min: usize,
    pub max: usize,
}

/// Description length bounds in chars.
///
/// Below `min` and above `ideal` produce advisories; above `max` the
/// description is shortened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DescriptionBounds {
    pub min: usize,
    pub ideal: usize,
    pub max: usize,
}

/// Video duration guidance in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoBounds {
    pub min: Option<u32>,
    pub ideal: Option<u32>,
    pub max: Option<u32>,
}

/// Limits and handlers for one platform.
#[derive(Debug, Clone)]
pub struct PlatformSpec {
    pub platform: Platform,
    pub max_text_length: usize,
    pub ideal_word_count: usize,
    /// Word counts above `ideal_word_count * long_post_factor` get a length advisory.
    pub long_post_factor: f64,
    pub max_hashtags: usize,
    pub optimal_hashtags: HashtagRange,
    pub reflow: ReflowPolicy,
    pub max_title_length: Option<usize>,
    pub ideal_title_length: Option<usize>,
    pub description: DescriptionBounds,
    pub image_extensions: &'static [&'static str],
    pub video: VideoBounds,
    pub marker: &'static str,
    pub dashed_mentions: bool,
    pub text: TextHandler,
    pub image: ImageHandler,
    pub video_handler: VideoHandler,
}

impl PlatformSpec {
    /// Dispatch on the item's declared content type.
    ///
    /// A missing payload yields a failed result carrying the original item.
    #[must_use]
    pub fn adapt(&self, item: &ContentItem) -> AdaptationResult {
        tracing::debug!(
            platform = %self.platform,
            content_type = %item.content_type,
            item = %item.id,
            "adapting content"
        );
        match item.payload() {
            Some(Payload::Text(text)) => (self.text)(self, item, text),
            Some(Payload::Image(image)) => (self.image)(self, item, image),
            Some(Payload::Video(video)) => (self.video_handler)(self, item, video),
            None => {
                tracing::warn!(
                    platform = %self.platform,
                    content_type = %item.content_type,
                    item = %item.id,
                    "content item is missing the payload for its declared type"
                );
                AdaptationResult::failed(
                    self.platform.clone(),
                    item.clone(),
                    AdaptError::MissingPayload {
                        expected: item.content_type,
                    },
                )
            }
        }
    }

    #[must_use]
    pub fn truncator(&self) -> Truncator {
        Truncator::new(self.marker)
    }

    #[must_use]
    pub fn reconciler(&self) -> HashtagReconciler {
        HashtagReconciler::new(self.max_hashtags, self.reflow)
    }

    /// Content type the platform's handler produces for `input`.
    #[must_use]
    pub fn output_type(&self, input: ContentType) -> ContentType {
        match (&self.platform, input) {
            (Platform::Instagram, ContentType::Text) => ContentType::Image,
            (Platform::YouTube, _) => ContentType::Video,
            (_, t) => t,
        }
    }
}

/// Registered platform specs, keyed by platform.
#[derive(Debug, Clone)]
pub struct AdapterRegistry {
    specs: HashMap<Platform, PlatformSpec>,
}

impl Default for AdapterRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl AdapterRegistry {
    /// Empty registry; every platform goes to the generic fallback.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            specs: HashMap::new(),
        }
    }

    /// Facebook, Instagram, LinkedIn and YouTube with their default tables.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        registry.register(facebook::spec());
        registry.register(instagram::spec());
        registry.register(linkedin::spec());
        registry.register(youtube::spec());
        registry
    }

    /// Add or replace the spec for its platform.
    pub fn register(&mut self, spec: PlatformSpec) {
        self.specs.insert(spec.platform.clone(), spec);
    }

    #[must_use]
    pub fn get(&self, platform: &Platform) -> Option<&PlatformSpec> {
        self.specs.get(platform)
    }

    /// Registered platforms in a stable order.
    #[must_use]
    pub fn platforms(&self) -> Vec<Platform> {
        let mut platforms: Vec<Platform> = self.specs.keys().cloned().collect();
        platforms.sort();
        platforms
    }

    /// Apply per-platform reflow overrides from configuration.
    ///
    /// Overrides for unregistered platforms are ignored.
    #[must_use]
    pub fn with_reflow_overrides(mut self, overrides: &BTreeMap<Platform, ReflowSetting>) -> Self {
        for (platform, setting) in overrides {
            if let Some(spec) = self.specs.get_mut(platform) {
                spec.reflow = match setting {
                    ReflowSetting::Off => ReflowPolicy::Preserve,
                    ReflowSetting::Threshold(threshold) => ReflowPolicy::Collect {
                        threshold: *threshold,
                    },
                };
            }
        }
        self
    }

    /// Adapt `item` for `platform`, using the generic fallback when no spec
    /// is registered.
    #[must_use]
    pub fn adapt(&self, item: &ContentItem, platform: &Platform) -> AdaptationResult {
        match self.get(platform) {
            Some(spec) => spec.adapt(item),
            None => generic::adapt(platform, item),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_registry_has_four_platforms() {
        let registry = AdapterRegistry::standard();
        assert_eq!(
            registry.platforms(),
            vec![
                Platform::Facebook,
                Platform::Instagram,
                Platform::LinkedIn,
                Platform::YouTube
            ]
        );
    }

    #[test]
    fn reflow_override_switches_policy() {
        let mut overrides = BTreeMap::new();
        overrides.insert(Platform::Instagram, ReflowSetting::Off);
        overrides.insert(Platform::LinkedIn, ReflowSetting::Threshold(2));
        overrides.insert(Platform::TikTok, ReflowSetting::Threshold(1));
        let registry = AdapterRegistry::standard().with_reflow_overrides(&overrides);

        assert_eq!(
            registry.get(&Platform::Instagram).unwrap().reflow,
            ReflowPolicy::Preserve
        );
        assert_eq!(
            registry.get(&Platform::LinkedIn).unwrap().reflow,
            ReflowPolicy::Collect { threshold: 2 }
        );
        assert!(registry.get(&Platform::TikTok).is_none());
    }

    #[test]
    fn missing_payload_fails_with_original_content() {
        let mut item = ContentItem::text("acme", TextContent::default());
        item.content_type = ContentType::Video;
        let result = AdapterRegistry::standard().adapt(&item, &Platform::Facebook);
        assert!(!result.success);
        assert_eq!(result.content, item);
        assert_eq!(
            result.error,
            Some(AdaptError::MissingPayload {
                expected: ContentType::Video
            })
        );
    }

    #[test]
    fn output_type_reflects_conversions() {
        let registry = AdapterRegistry::standard();
        let ig = registry.get(&Platform::Instagram).unwrap();
        let yt = registry.get(&Platform::YouTube).unwrap();
        assert_eq!(ig.output_type(ContentType::Text), ContentType::Image);
        assert_eq!(yt.output_type(ContentType::Image), ContentType::Video);
        assert_eq!(ig.output_type(ContentType::Video), ContentType::Video);
    }
}
