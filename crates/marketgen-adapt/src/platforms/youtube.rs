//! YouTube is video-first: text becomes a video description and images
//! become thumbnails.

use std::sync::LazyLock;

use marketgen_core::{ContentItem, ContentType, ImageContent, Platform, TextContent, VideoContent};
use regex::Regex;

use super::common::{self, DurationVerdict};
use super::{DescriptionBounds, HashtagRange, PlatformSpec, VideoBounds};
use crate::hashtags::{extract_hashtags, ReflowPolicy};
use crate::signals::{
    capitalize_first, char_count, first_sentence, has_call_to_action, has_links, has_timestamps,
    is_description_seo_optimized, is_title_seo_optimized,
};
use crate::truncate::{Truncator, DEFAULT_MARKER};
use crate::types::{
    AdaptationMetadata, AdaptationResult, ContentStats, DurationClass, Format, Recommendation,
    RecommendationKind as Kind, VideoInsights,
};

pub const MAX_TITLE_LENGTH: usize = 100;
pub const IDEAL_TITLE_LENGTH: usize = 60;
pub const MIN_DESCRIPTION_LENGTH: usize = 250;
pub const IDEAL_DESCRIPTION_LENGTH: usize = 1_000;
pub const MAX_DESCRIPTION_LENGTH: usize = 5_000;
pub const MAX_HASHTAGS: usize = 15;
/// Aggregate length of all tags, separators included.
pub const MAX_TAGS_LENGTH: usize = 500;
pub const MAX_TAG_LENGTH: usize = 30;
pub const OPTIMAL_TAG_COUNT: usize = 5;
pub const MIN_VIDEO_SECONDS: u32 = 30;
pub const IDEAL_VIDEO_SECONDS: u32 = 480;
pub const MAX_SHORTS_SECONDS: u32 = 60;
const MIN_SHORTS_SECONDS: u32 = 15;
pub const THUMBNAIL_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".gif", ".bmp"];

const TITLE_WORDS: usize = 10;
const TITLE_TAGS: usize = 3;
pub const PLACEHOLDER_TITLE: &str = "YouTube video";
const SCRIPT_PLACEHOLDER: &str = "[Video script to be provided]";
const DEFAULT_THUMBNAIL_PROMPT: &str = "High quality YouTube video thumbnail";

static PUNCTUATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("valid regex"));

static QUOTED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]+)""#).expect("valid regex"));

static BOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("valid regex"));

#[must_use]
pub fn spec() -> PlatformSpec {
    PlatformSpec {
        platform: Platform::YouTube,
        max_text_length: MAX_DESCRIPTION_LENGTH,
        ideal_word_count: 0,
        long_post_factor: 1.0,
        max_hashtags: MAX_HASHTAGS,
        optimal_hashtags: HashtagRange { min: 1, max: 15 },
        reflow: ReflowPolicy::Preserve,
        max_title_length: Some(MAX_TITLE_LENGTH),
        ideal_title_length: Some(IDEAL_TITLE_LENGTH),
        description: DescriptionBounds {
            min: MIN_DESCRIPTION_LENGTH,
            ideal: IDEAL_DESCRIPTION_LENGTH,
            max: MAX_DESCRIPTION_LENGTH,
        },
        image_extensions: THUMBNAIL_EXTENSIONS,
        video: VideoBounds {
            min: Some(MIN_VIDEO_SECONDS),
            ideal: Some(IDEAL_VIDEO_SECONDS),
            max: None,
        },
        marker: DEFAULT_MARKER,
        dashed_mentions: false,
        text: adapt_text,
        image: adapt_image,
        video_handler: adapt_video,
    }
}

/// Video tags from the title, inline hashtags and emphasised phrases.
///
/// Takes up to three title words longer than three chars, then description
/// hashtags, then quoted or `**bold**` phrases of three or four words. Tags
/// are de-duplicated, each at most [`MAX_TAG_LENGTH`] chars, and the list
/// stops growing once [`MAX_TAGS_LENGTH`] would be exceeded.
#[must_use]
pub fn extract_video_tags(description: &str, title: &str) -> Vec<String> {
    let title_words = PUNCTUATION_RE.replace_all(title, " ");
    let from_title = title_words
        .split_whitespace()
        .filter(|w| w.chars().count() > 3)
        .map(str::to_lowercase)
        .take(TITLE_TAGS);

    let phrases = QUOTED_RE
        .captures_iter(description)
        .chain(BOLD_RE.captures_iter(description))
        .map(|c| c[1].to_string())
        .filter(|p| {
            let words = p.split_whitespace().count();
            (3..=4).contains(&words) && char_count(p) < MAX_TAG_LENGTH
        })
        .map(|p| p.to_lowercase());

    let mut tags: Vec<String> = Vec::new();
    let mut total = 0;
    for tag in from_title
        .chain(extract_hashtags(description))
        .chain(phrases)
    {
        let len = char_count(&tag);
        if tags.contains(&tag) || len > MAX_TAG_LENGTH || total + len + 1 > MAX_TAGS_LENGTH {
            continue;
        }
        total += len + 1;
        tags.push(tag);
    }
    tags
}

/// Title built from the first sentence of `text`: at most ten words, then at
/// most [`IDEAL_TITLE_LENGTH`] chars, first letter capitalised.
#[must_use]
pub fn synthesize_title(text: &str) -> String {
    let sentence = first_sentence(text);
    if sentence.is_empty() {
        return PLACEHOLDER_TITLE.to_string();
    }
    let words: Vec<&str> = sentence.split_whitespace().collect();
    let mut title = if words.len() > TITLE_WORDS {
        format!("{}{DEFAULT_MARKER}", words[..TITLE_WORDS].join(" "))
    } else {
        sentence.to_string()
    };
    if char_count(&title) > IDEAL_TITLE_LENGTH {
        title = Truncator::new(DEFAULT_MARKER)
            .fit(&title, IDEAL_TITLE_LENGTH)
            .into_owned();
    }
    capitalize_first(&title)
}

fn tag_advice(count: usize) -> Option<Recommendation> {
    if count == 0 {
        Some(Recommendation::low(
            Kind::Tags,
            "Add relevant tags; YouTube recommends 5-15",
        ))
    } else if count < OPTIMAL_TAG_COUNT {
        Some(Recommendation::low(
            Kind::Tags,
            "Use more tags; YouTube recommends 5-15",
        ))
    } else {
        None
    }
}

/// Engagement advisories on a finished description.
fn description_signals(description: &str, shorts: bool, recs: &mut Vec<Recommendation>) {
    if !shorts && !has_timestamps(description) {
        recs.push(Recommendation::low(
            Kind::Timestamps,
            "Add timestamps so viewers can navigate the video",
        ));
    }
    if !has_call_to_action(description) {
        recs.push(Recommendation::low(
            Kind::CallToAction,
            "Add a clear call to action such as subscribe, like or comment",
        ));
    }
    if !has_links(description) {
        recs.push(Recommendation::low(
            Kind::Links,
            "Link related content such as your site or social profiles",
        ));
    }
}

fn insights(
    video: &VideoContent,
    description: &str,
    tags: Vec<String>,
    verdict: Option<&DurationVerdict>,
) -> VideoInsights {
    VideoInsights {
        duration_seconds: video.duration_seconds,
        duration_class: verdict.map(|v| v.class),
        title_length: char_count(&video.title),
        description_length: char_count(description),
        tags,
        title_seo_optimized: Some(is_title_seo_optimized(&video.title, IDEAL_TITLE_LENGTH)),
        description_seo_optimized: Some(is_description_seo_optimized(
            description,
            MIN_DESCRIPTION_LENGTH,
        )),
        has_timestamps: has_timestamps(description),
        has_links: has_links(description),
        has_call_to_action: has_call_to_action(description),
        has_thumbnail: common::has_thumbnail(video),
    }
}

fn adapt_video(spec: &PlatformSpec, item: &ContentItem, video: &VideoContent) -> AdaptationResult {
    let mut meta = AdaptationMetadata::new(spec.platform.clone(), Format::Video);
    let recs = &mut meta.recommendations;

    let (title, title_truncated) = if video.title.trim().is_empty() {
        recs.push(Recommendation::high(
            Kind::Title,
            "Video has no title; add one before publishing",
        ));
        (PLACEHOLDER_TITLE.to_string(), false)
    } else {
        common::fit_field(spec, &video.title, MAX_TITLE_LENGTH)
    };
    if title_truncated {
        recs.push(common::truncated_rec(
            "Title",
            char_count(&video.title),
            char_count(&title),
        ));
    }
    if !is_title_seo_optimized(&title, IDEAL_TITLE_LENGTH) {
        recs.push(Recommendation::low(
            Kind::Seo,
            "Lead the title with the main keyword, include a number and a hook word such as how, best or guide",
        ));
    }

    let original_description = video.description.as_deref().unwrap_or_default();
    let fitted = common::fit_and_reconcile(
        spec,
        original_description,
        &[],
        MAX_DESCRIPTION_LENGTH,
        false,
    );
    common::description_advice(
        spec,
        original_description,
        &fitted.text,
        fitted.truncated,
        recs,
    );

    let verdict = video
        .duration_seconds
        .map(|s| classify_duration(spec, Some(s)));
    let shorts = verdict
        .as_ref()
        .is_some_and(|v| v.class == DurationClass::Shorts);
    if let Some(advice) = verdict.as_ref().and_then(|v| v.advice.clone()) {
        recs.push(advice);
    }
    common::thumbnail_advice(video, recs);

    let tags = extract_video_tags(&fitted.text, &video.title);
    recs.extend(tag_advice(tags.len()));
    description_signals(&fitted.text, shorts, recs);

    let mut out = common::labelled(spec, item);
    if let Some(v) = out.video_content.as_mut() {
        v.title = title;
        if video.description.is_some() {
            v.description = Some(fitted.text.clone());
        }
    }
    let adapted = out.video_content.as_ref().unwrap_or(video);

    meta.stats = ContentStats::of(&fitted.text, fitted.tags.len(), 0);
    meta.limits.title_truncated = title_truncated;
    meta.limits.description_truncated = fitted.truncated;
    meta.limits.hashtags_dropped = fitted.dropped;
    meta.limits.duration_valid = verdict.as_ref().map(|v| v.valid);
    meta.limits.within_limits = verdict.as_ref().is_none_or(|v| v.valid);
    meta.video = Some(insights(adapted, &fitted.text, tags, verdict.as_ref()));
    AdaptationResult::adapted(out, meta)
}

/// Carry text as the description of a video still to be produced.
fn adapt_text(spec: &PlatformSpec, item: &ContentItem, text: &TextContent) -> AdaptationResult {
    let fitted = common::fit_and_reconcile(
        spec,
        &text.text,
        &text.hashtags,
        MAX_DESCRIPTION_LENGTH,
        true,
    );
    let video = VideoContent {
        title: synthesize_title(&text.text),
        script: SCRIPT_PLACEHOLDER.to_string(),
        description: Some(fitted.text.clone()),
        ..VideoContent::default()
    };
    let tags = extract_video_tags(&fitted.text, "");

    let mut meta = AdaptationMetadata::new(spec.platform.clone(), Format::VideoDescription);
    meta.original_type = Some(ContentType::Text);
    meta.note = Some(
        "Text was converted to a video description; the video itself still needs to be produced"
            .to_string(),
    );
    meta.stats = ContentStats::of(&fitted.text, fitted.tags.len(), 0);
    meta.limits.text_truncated = fitted.truncated;
    meta.limits.description_truncated = fitted.truncated;
    meta.limits.hashtags_dropped = fitted.dropped;

    let recs = &mut meta.recommendations;
    common::description_advice(spec, &text.text, &fitted.text, fitted.truncated, recs);
    if !is_description_seo_optimized(&fitted.text, MIN_DESCRIPTION_LENGTH) {
        recs.push(Recommendation::low(
            Kind::Seo,
            "Put keywords in the first two lines of the description",
        ));
    }
    description_signals(&fitted.text, false, recs);
    recs.push(Recommendation::low(
        Kind::Title,
        "Review the generated title before publishing",
    ));
    meta.video = Some(insights(&video, &fitted.text, tags, None));

    let mut out = common::labelled(spec, item).retyped(ContentType::Video);
    out.video_content = Some(video);
    AdaptationResult::adapted(out, meta)
}

/// Use an image as the thumbnail of a video still to be produced.
///
/// A URL with a supported extension is kept as `thumbnail_url`; otherwise
/// the prompt is carried over as a deferred `thumbnail_prompt`.
fn adapt_image(spec: &PlatformSpec, item: &ContentItem, image: &ImageContent) -> AdaptationResult {
    let mut meta = AdaptationMetadata::new(spec.platform.clone(), Format::Thumbnail);
    meta.original_type = Some(ContentType::Image);
    meta.note = Some(
        "Image was set as the video thumbnail; the video, title and description still need to be provided"
            .to_string(),
    );

    let caption = image.caption.as_deref().unwrap_or_default();
    let title = if caption.trim().is_empty() {
        PLACEHOLDER_TITLE.to_string()
    } else {
        synthesize_title(caption)
    };
    let prompt = if image.prompt.trim().is_empty() {
        DEFAULT_THUMBNAIL_PROMPT
    } else {
        image.prompt.as_str()
    };

    let mut video = VideoContent {
        title,
        script: SCRIPT_PLACEHOLDER.to_string(),
        ..VideoContent::default()
    };
    meta.limits.image_format_valid = common::check_image_format(
        spec,
        image.image_url.as_deref(),
        THUMBNAIL_EXTENSIONS,
        &mut meta.recommendations,
    );
    match (image.image_url.as_deref(), meta.limits.image_format_valid) {
        (Some(url), Some(true)) => video.thumbnail_url = Some(url.to_string()),
        (_, Some(false)) => video.thumbnail_prompt = Some(format!("YouTube thumbnail: {prompt}")),
        _ => video.thumbnail_prompt = Some(prompt.to_string()),
    }

    meta.recommendations.extend(
        [
            "Thumbnails should be 1280x720 pixels (16:9)",
            "Use bold colours, clear text and a striking image",
            "Keep thumbnail text to one to three short words",
            "Make the thumbnail complement the title rather than repeat it",
        ]
        .into_iter()
        .map(|tip| Recommendation::low(Kind::Thumbnail, tip)),
    );
    meta.video = Some(insights(&video, "", Vec::new(), None));

    let mut out = common::labelled(spec, item).retyped(ContentType::Video);
    out.video_content = Some(video);
    AdaptationResult::adapted(out, meta)
}

fn classify_duration(spec: &PlatformSpec, seconds: Option<u32>) -> DurationVerdict {
    let min = spec.video.min.unwrap_or(MIN_VIDEO_SECONDS);
    let ideal = spec.video.ideal.unwrap_or(IDEAL_VIDEO_SECONDS);
    let (class, advice) = match seconds {
        Some(s) if s <= MAX_SHORTS_SECONDS => (
            DurationClass::Shorts,
            (s < MIN_SHORTS_SECONDS).then(|| {
                Recommendation::medium(
                    Kind::Duration,
                    format!("Video is short even for Shorts; aim for at least {MIN_SHORTS_SECONDS} seconds"),
                )
            }),
        ),
        Some(s) if s < min => (
            DurationClass::Standard,
            Some(Recommendation::medium(
                Kind::Duration,
                format!("Video is short; videos of at least {min} seconds do better on YouTube"),
            )),
        ),
        Some(s) if s > ideal * 2 => (
            DurationClass::Standard,
            Some(Recommendation::medium(
                Kind::Duration,
                format!(
                    "Video is long; engagement peaks around {} minutes on YouTube",
                    ideal / 60
                ),
            )),
        ),
        _ => (DurationClass::Standard, None),
    };
    DurationVerdict {
        class,
        valid: true,
        advice,
    }
}
