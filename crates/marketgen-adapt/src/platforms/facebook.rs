use marketgen_core::{ContentItem, ImageContent, Platform, TextContent, VideoContent};

use super::common::{self, DurationVerdict};
use super::{DescriptionBounds, HashtagRange, PlatformSpec, VideoBounds};
use crate::hashtags::ReflowPolicy;
use crate::signals::word_count;
use crate::truncate::DEFAULT_MARKER;
use crate::types::{
    AdaptationResult, DurationClass, Format, Recommendation, RecommendationKind as Kind,
};

pub const MAX_POST_LENGTH: usize = 63_206;
pub const IDEAL_POST_WORDS: usize = 40;
pub const MAX_HASHTAGS: usize = 5;
pub const ALLOWED_IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".gif"];

#[must_use]
pub fn spec() -> PlatformSpec {
    PlatformSpec {
        platform: Platform::Facebook,
        max_text_length: MAX_POST_LENGTH,
        ideal_word_count: IDEAL_POST_WORDS,
        long_post_factor: 2.0,
        max_hashtags: MAX_HASHTAGS,
        optimal_hashtags: HashtagRange { min: 2, max: 5 },
        reflow: ReflowPolicy::Collect { threshold: 5 },
        max_title_length: Some(100),
        ideal_title_length: None,
        description: DescriptionBounds {
            min: 0,
            ideal: 1_000,
            max: 5_000,
        },
        image_extensions: ALLOWED_IMAGE_EXTENSIONS,
        video: VideoBounds {
            min: Some(15),
            ideal: Some(240),
            max: None,
        },
        marker: DEFAULT_MARKER,
        dashed_mentions: false,
        text: adapt_text,
        image: adapt_image,
        video_handler: adapt_video,
    }
}

fn adapt_text(spec: &PlatformSpec, item: &ContentItem, text: &TextContent) -> AdaptationResult {
    let (adapted, mut meta) =
        common::adapt_text_post(spec, text, spec.max_text_length, Format::Post);
    if let Some(rec) = common::length_advice(
        spec,
        word_count(&adapted.text),
        spec.ideal_word_count,
        spec.long_post_factor,
    ) {
        meta.recommendations.push(rec);
    }

    let mut out = common::labelled(spec, item);
    out.text_content = Some(adapted);
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

/// Facebook has no hard video cap; short and long videos only get advice.
fn classify_duration(spec: &PlatformSpec, seconds: Option<u32>) -> DurationVerdict {
    let min = spec.video.min.unwrap_or(0);
    let ideal = spec.video.ideal.unwrap_or(u32::MAX);
    let advice = match seconds {
        Some(s) if s < min => Some(Recommendation::medium(
            Kind::Duration,
            format!("Video is short; Facebook recommends at least {min} seconds"),
        )),
        Some(s) if s > ideal => Some(Recommendation::medium(
            Kind::Duration,
            "Video is long; consider a 2-4 minute cut for better engagement",
        )),
        _ => None,
    };
    DurationVerdict {
        class: DurationClass::Feed,
        valid: true,
        advice,
    }
}
