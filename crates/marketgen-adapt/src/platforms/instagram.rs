//! Instagram has no text-only posts: inbound text becomes an image caption.

use marketgen_core::{ContentItem, ContentType, ImageContent, Platform, TextContent, VideoContent};

use super::common::{self, DurationVerdict};
use super::{DescriptionBounds, HashtagRange, PlatformSpec, VideoBounds};
use crate::hashtags::{merge_mentions, ReflowPolicy};
use crate::signals::{char_count, word_count};
use crate::truncate::DEFAULT_MARKER;
use crate::types::{
    AdaptationMetadata, AdaptationResult, ContentStats, DurationClass, Format, Recommendation,
    RecommendationKind as Kind,
};

pub const MAX_CAPTION_LENGTH: usize = 2_200;
pub const IDEAL_CAPTION_WORDS: usize = 150;
pub const MAX_HASHTAGS: usize = 30;
pub const MAX_FEED_VIDEO_SECONDS: u32 = 60;
pub const MAX_REELS_SECONDS: u32 = 90;
pub const ALLOWED_IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png"];

const CONVERTED_PROMPT: &str = "Generate an image that illustrates the caption";

#[must_use]
pub fn spec() -> PlatformSpec {
    PlatformSpec {
        platform: Platform::Instagram,
        max_text_length: MAX_CAPTION_LENGTH,
        ideal_word_count: IDEAL_CAPTION_WORDS,
        long_post_factor: 1.0,
        max_hashtags: MAX_HASHTAGS,
        optimal_hashtags: HashtagRange { min: 5, max: 11 },
        reflow: ReflowPolicy::Collect { threshold: 3 },
        max_title_length: None,
        ideal_title_length: None,
        description: DescriptionBounds {
            min: 0,
            ideal: 1_000,
            max: MAX_CAPTION_LENGTH,
        },
        image_extensions: ALLOWED_IMAGE_EXTENSIONS,
        video: VideoBounds {
            min: None,
            ideal: Some(MAX_FEED_VIDEO_SECONDS),
            max: Some(MAX_REELS_SECONDS),
        },
        marker: DEFAULT_MARKER,
        dashed_mentions: false,
        text: adapt_text,
        image: adapt_image,
        video_handler: adapt_video,
    }
}

/// Wrap text as the caption of an image still to be produced.
fn adapt_text(spec: &PlatformSpec, item: &ContentItem, text: &TextContent) -> AdaptationResult {
    let fitted = common::fit_and_reconcile(
        spec,
        &text.text,
        &text.hashtags,
        spec.max_text_length,
        true,
    );
    let mentions = merge_mentions(&fitted.text, &text.mentions, spec.dashed_mentions);

    let mut meta = AdaptationMetadata::new(spec.platform.clone(), Format::Image);
    meta.original_type = Some(ContentType::Text);
    meta.note = Some(
        "Text was converted to an image caption because Instagram has no text-only posts"
            .to_string(),
    );
    meta.stats = ContentStats::of(&fitted.text, fitted.tags.len(), mentions.len());
    meta.limits.within_limits = char_count(&fitted.text) <= spec.max_text_length;
    meta.limits.text_truncated = fitted.truncated;
    meta.limits.hashtags_dropped = fitted.dropped;

    let recs = &mut meta.recommendations;
    if fitted.truncated {
        recs.push(common::truncated_rec(
            "Caption",
            char_count(&text.text),
            char_count(&fitted.text),
        ));
    }
    if let Some(rec) = common::length_advice(
        spec,
        word_count(&fitted.text),
        spec.ideal_word_count,
        spec.long_post_factor,
    ) {
        recs.push(rec);
    }
    if let Some(rec) = common::hashtag_advice(spec, fitted.tags.len()) {
        recs.push(rec);
    }
    recs.push(Recommendation::low(
        Kind::Media,
        "Generate or attach an image before publishing",
    ));

    let mut out = common::labelled(spec, item).retyped(ContentType::Image);
    out.image_content = Some(ImageContent {
        prompt: CONVERTED_PROMPT.to_string(),
        image_url: None,
        alt_text: Some(format!("Image created for {}", item.brand_id)),
        caption: Some(fitted.text),
    });
    AdaptationResult::adapted(out, meta)
}

fn adapt_image(spec: &PlatformSpec, item: &ContentItem, image: &ImageContent) -> AdaptationResult {
    let (out, meta) = common::adapt_image(spec, item, image, spec.max_text_length, Format::Image);
    AdaptationResult::adapted(out, meta)
}

fn adapt_video(spec: &PlatformSpec, item: &ContentItem, video: &VideoContent) -> AdaptationResult {
    let (out, meta) = common::adapt_video(spec, item, video, classify_duration);
    AdaptationResult::adapted(out, meta)
}

fn classify_duration(spec: &PlatformSpec, seconds: Option<u32>) -> DurationVerdict {
    let feed_max = spec.video.ideal.unwrap_or(MAX_FEED_VIDEO_SECONDS);
    let reels_max = spec.video.max.unwrap_or(MAX_REELS_SECONDS);
    match seconds {
        Some(s) if s > reels_max => DurationVerdict {
            class: DurationClass::OverLimit,
            valid: false,
            advice: Some(Recommendation::high(
                Kind::Duration,
                format!("Video exceeds the Instagram Reels maximum ({s}s > {reels_max}s)"),
            )),
        },
        Some(s) if s > feed_max => DurationVerdict {
            class: DurationClass::Reels,
            valid: true,
            advice: Some(Recommendation::medium(
                Kind::Duration,
                format!("Video ({s}s) exceeds the {feed_max}s feed limit but fits Reels"),
            )),
        },
        _ => DurationVerdict {
            class: DurationClass::Feed,
            valid: true,
            advice: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_item(body: &str, tags: &[&str]) -> ContentItem {
        ContentItem::text(
            "acme",
            TextContent {
                text: body.to_string(),
                hashtags: tags.iter().map(|t| (*t).to_string()).collect(),
                mentions: Vec::new(),
            },
        )
    }

    #[test]
    fn text_becomes_image_caption() {
        let item = text_item("Fresh drop today", &["style"]);
        let result = spec().adapt(&item);
        assert!(result.success);
        assert_eq!(result.content.content_type, ContentType::Image);
        assert!(result.content.text_content.is_none());
        let image = result.content.image_content.as_ref().unwrap();
        assert_eq!(image.caption.as_deref(), Some("Fresh drop today\n\n#style"));
        assert_eq!(image.alt_text.as_deref(), Some("Image created for acme"));
        assert!(!image.prompt.is_empty());
        let meta = result.metadata.unwrap();
        assert_eq!(meta.original_type, Some(ContentType::Text));
        assert!(meta.note.is_some());
    }

    #[test]
    fn twelve_inline_tags_are_all_kept_and_reflowed() {
        let tags: Vec<String> = (1..=12).map(|i| format!("#tag{i}")).collect();
        let body = format!("Summer vibes {}", tags.join(" "));
        let result = spec().adapt(&text_item(&body, &[]));
        let caption = result
            .content
            .image_content
            .as_ref()
            .and_then(|i| i.caption.clone())
            .unwrap();
        assert_eq!(caption, format!("Summer vibes\n\n{}", tags.join(" ")));
        let meta = result.metadata.unwrap();
        assert_eq!(meta.stats.hashtag_count, 12);
        assert_eq!(meta.limits.hashtags_dropped, 0);
    }

    #[test]
    fn video_duration_classes() {
        let s = spec();
        assert_eq!(classify_duration(&s, Some(45)).class, DurationClass::Feed);
        assert_eq!(classify_duration(&s, Some(75)).class, DurationClass::Reels);
        let over = classify_duration(&s, Some(120));
        assert_eq!(over.class, DurationClass::OverLimit);
        assert!(!over.valid);
    }

    #[test]
    fn over_limit_video_is_not_within_limits() {
        let item = ContentItem::video(
            "acme",
            VideoContent {
                title: String::new(),
                script: String::new(),
                duration_seconds: Some(200),
                ..VideoContent::default()
            },
        );
        let meta = spec().adapt(&item).metadata.unwrap();
        assert!(!meta.limits.within_limits);
        assert_eq!(meta.limits.duration_valid, Some(false));
    }

    #[test]
    fn gif_is_not_an_instagram_format() {
        let item = ContentItem::image(
            "acme",
            ImageContent {
                prompt: "loop".to_string(),
                image_url: Some("https://cdn.example.com/loop.gif".to_string()),
                alt_text: Some("A loop".to_string()),
                caption: Some("Loop".to_string()),
            },
        );
        let meta = spec().adapt(&item).metadata.unwrap();
        assert_eq!(meta.limits.image_format_valid, Some(false));
    }

    #[test]
    fn tag_cut_by_shortening_leaves_the_tag_list() {
        let body = format!("hi #{}", "a".repeat(2_500));
        let result = spec().adapt(&text_item(&body, &[]));
        let caption = result
            .content
            .image_content
            .as_ref()
            .and_then(|i| i.caption.clone())
            .unwrap();
        assert!(caption.chars().count() <= MAX_CAPTION_LENGTH);
        let meta = result.metadata.unwrap();
        assert!(meta.limits.text_truncated);
        assert_eq!(meta.stats.hashtag_count, 0);
        assert_eq!(meta.limits.hashtags_dropped, 1);
    }
}
