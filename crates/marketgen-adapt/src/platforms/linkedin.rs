use marketgen_core::{ContentItem, ImageContent, Platform, TextContent, VideoContent};

use super::common::{self, DurationVerdict};
use super::{DescriptionBounds, HashtagRange, PlatformSpec, VideoBounds};
use crate::hashtags::ReflowPolicy;
use crate::signals::{char_count, word_count};
use crate::types::{
    AdaptationResult, DurationClass, Format, Recommendation, RecommendationKind as Kind,
};

pub const MAX_POST_LENGTH: usize = 3_000;
pub const MAX_ARTICLE_LENGTH: usize = 100_000;
pub const IDEAL_POST_WORDS: usize = 200;
pub const IDEAL_ARTICLE_WORDS: usize = 1_500;
pub const MAX_HASHTAGS: usize = 10;
pub const ALLOWED_IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".gif"];

/// Text longer than either bound is treated as an article.
const ARTICLE_MIN_WORDS: usize = 300;
const ARTICLE_MIN_CHARS: usize = 1_000;
const ARTICLE_SHORT_WORDS: usize = 800;
const ARTICLE_LONG_WORDS: usize = 2_000;

pub const MARKER: &str = "...\n\n(continued in the full article)";

#[must_use]
pub fn spec() -> PlatformSpec {
    PlatformSpec {
        platform: Platform::LinkedIn,
        max_text_length: MAX_POST_LENGTH,
        ideal_word_count: IDEAL_POST_WORDS,
        long_post_factor: 1.5,
        max_hashtags: MAX_HASHTAGS,
        optimal_hashtags: HashtagRange { min: 3, max: 5 },
        reflow: ReflowPolicy::Preserve,
        max_title_length: Some(150),
        ideal_title_length: Some(70),
        description: DescriptionBounds {
            min: 0,
            ideal: 1_000,
            max: 2_000,
        },
        image_extensions: ALLOWED_IMAGE_EXTENSIONS,
        video: VideoBounds {
            min: None,
            ideal: Some(180),
            max: Some(600),
        },
        marker: MARKER,
        dashed_mentions: true,
        text: adapt_text,
        image: adapt_image,
        video_handler: adapt_video,
    }
}

#[must_use]
pub fn is_article(text: &str) -> bool {
    word_count(text) > ARTICLE_MIN_WORDS || char_count(text) > ARTICLE_MIN_CHARS
}

fn article_advice(words: usize) -> Option<Recommendation> {
    if words < ARTICLE_SHORT_WORDS {
        Some(Recommendation::low(
            Kind::Length,
            format!(
                "Article is short; expand it to {ARTICLE_SHORT_WORDS}-{ARTICLE_LONG_WORDS} words for best results"
            ),
        ))
    } else if words > ARTICLE_LONG_WORDS {
        Some(Recommendation::low(
            Kind::Length,
            "Article is long; consider splitting it into a series",
        ))
    } else {
        None
    }
}

fn adapt_text(spec: &PlatformSpec, item: &ContentItem, text: &TextContent) -> AdaptationResult {
    let article = is_article(&text.text);
    let (limit, format) = if article {
        (MAX_ARTICLE_LENGTH, Format::Article)
    } else {
        (MAX_POST_LENGTH, Format::Post)
    };

    let (adapted, mut meta) = common::adapt_text_post(spec, text, limit, format);
    let words = word_count(&adapted.text);
    let advice = if article {
        article_advice(words)
    } else {
        common::length_advice(spec, words, spec.ideal_word_count, spec.long_post_factor)
    };
    meta.recommendations.extend(advice);
    meta.recommendations.push(Recommendation::low(
        Kind::Media,
        "Posts with an image draw noticeably more engagement on LinkedIn",
    ));

    let mut out = common::labelled(spec, item);
    out.text_content = Some(adapted);
    AdaptationResult::adapted(out, meta)
}

fn adapt_image(spec: &PlatformSpec, item: &ContentItem, image: &ImageContent) -> AdaptationResult {
    let caption = image.caption.as_deref().unwrap_or_default();
    let article = is_article(caption);
    let (limit, format) = if article {
        (MAX_ARTICLE_LENGTH, Format::Article)
    } else {
        (MAX_POST_LENGTH, Format::Image)
    };

    let (out, mut meta) = common::adapt_image(spec, item, image, limit, format);
    if article {
        meta.recommendations.extend(article_advice(word_count(caption)));
    }
    AdaptationResult::adapted(out, meta)
}

fn adapt_video(spec: &PlatformSpec, item: &ContentItem, video: &VideoContent) -> AdaptationResult {
    let (out, meta) = common::adapt_video(spec, item, video, classify_duration);
    AdaptationResult::adapted(out, meta)
}

fn classify_duration(spec: &PlatformSpec, seconds: Option<u32>) -> DurationVerdict {
    let ideal = spec.video.ideal.unwrap_or(u32::MAX);
    let max = spec.video.max.unwrap_or(u32::MAX);
    match seconds {
        Some(s) if s > max => DurationVerdict {
            class: DurationClass::OverLimit,
            valid: false,
            advice: Some(Recommendation::high(
                Kind::Duration,
                format!("Video exceeds the LinkedIn maximum ({s}s > {max}s)"),
            )),
        },
        Some(s) if s > ideal => DurationVerdict {
            class: DurationClass::Feed,
            valid: true,
            advice: Some(Recommendation::medium(
                Kind::Duration,
                format!("Video is long; LinkedIn videos under {ideal} seconds tend to perform better"),
            )),
        },
        _ => DurationVerdict {
            class: DurationClass::Feed,
            valid: true,
            advice: None,
        },
    }
}
