//! Steps shared by several platform handlers.

use marketgen_core::{ContentItem, ImageContent, VideoContent};

use super::PlatformSpec;
use crate::hashtags::{extract_hashtags, merge_mentions, Reconciled};
use crate::signals::{
    char_count, has_allowed_extension, has_call_to_action, has_links, has_question,
    has_timestamps,
};
use crate::types::{
    AdaptationMetadata, ContentStats, DurationClass, Format, Recommendation,
    RecommendationKind as Kind, VideoInsights,
};

/// Text after length fitting and hashtag reconciliation.
pub(crate) struct Fitted {
    pub text: String,
    pub tags: Vec<String>,
    pub truncated: bool,
    pub dropped: usize,
}

/// Reconcile hashtags, then shorten the body so the whole text fits `limit`.
///
/// A collected tag block is kept intact; only the body is cut. Tags that were
/// visible before the cut and are not whole afterwards leave `tags` and count
/// as dropped.
pub(crate) fn fit_and_reconcile(
    spec: &PlatformSpec,
    text: &str,
    explicit: &[String],
    limit: usize,
    all_tags_visible: bool,
) -> Fitted {
    let mut reconciled = spec.reconciler().reconcile(text, explicit);
    if all_tags_visible {
        reconciled = reconciled.with_all_tags_visible();
    }

    let joined = reconciled.text();
    let before = char_count(&joined);
    if before <= limit {
        return Fitted {
            text: joined,
            tags: reconciled.tags,
            truncated: false,
            dropped: reconciled.dropped,
        };
    }

    let truncator = spec.truncator();
    let block_len = reconciled
        .block
        .as_deref()
        .map_or(0, |b| char_count(b) + 2);
    let body = truncator
        .fit(&reconciled.body, limit.saturating_sub(block_len))
        .into_owned();
    let rebuilt = Reconciled {
        body,
        ..reconciled
    };
    let mut out = rebuilt.text();
    if char_count(&out) > limit {
        out = truncator.fit(&out, limit).into_owned();
    }

    tracing::warn!(
        platform = %spec.platform,
        before,
        after = char_count(&out),
        limit,
        "text exceeds platform limit, shortened"
    );

    let visible_before = extract_hashtags(&joined);
    let visible_after = extract_hashtags(&out);
    let (tags, cut): (Vec<String>, Vec<String>) = rebuilt
        .tags
        .into_iter()
        .partition(|t| !visible_before.contains(t) || visible_after.contains(t));
    if !cut.is_empty() {
        tracing::info!(
            platform = %spec.platform,
            cut = cut.len(),
            "hashtags lost to shortening removed from the tag list"
        );
    }

    Fitted {
        text: out,
        tags,
        truncated: true,
        dropped: rebuilt.dropped + cut.len(),
    }
}

/// Shorten a title or other single-line field; returns whether it changed.
pub(crate) fn fit_field(spec: &PlatformSpec, value: &str, limit: usize) -> (String, bool) {
    let fitted = spec.truncator().fit(value, limit);
    let changed = fitted != value;
    if changed {
        tracing::warn!(
            platform = %spec.platform,
            before = char_count(value),
            limit,
            "field exceeds platform limit, shortened"
        );
    }
    (fitted.into_owned(), changed)
}

pub(crate) fn truncated_rec(what: &str, before: usize, after: usize) -> Recommendation {
    Recommendation::high(
        Kind::Truncated,
        format!("{what} was shortened from {before} to {after} characters"),
    )
}

pub(crate) fn hashtag_advice(spec: &PlatformSpec, count: usize) -> Option<Recommendation> {
    let range = spec.optimal_hashtags;
    let name = spec.platform.display_name();
    if count == 0 {
        Some(Recommendation::low(
            Kind::Hashtags,
            format!(
                "Add {}-{} relevant hashtags to improve discoverability",
                range.min, range.max
            ),
        ))
    } else if count < range.min {
        Some(Recommendation::low(
            Kind::Hashtags,
            format!(
                "Use more hashtags; {}-{} perform best on {name}",
                range.min, range.max
            ),
        ))
    } else if count > range.max {
        Some(Recommendation::low(
            Kind::Hashtags,
            format!(
                "Too many hashtags; {}-{} perform best on {name}",
                range.min, range.max
            ),
        ))
    } else {
        None
    }
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn length_advice(
    spec: &PlatformSpec,
    words: usize,
    ideal_words: usize,
    factor: f64,
) -> Option<Recommendation> {
    if words as f64 > ideal_words as f64 * factor {
        Some(Recommendation::low(
            Kind::Length,
            format!(
                "Consider shortening; posts around {ideal_words} words tend to perform better on {}",
                spec.platform.display_name()
            ),
        ))
    } else {
        None
    }
}

pub(crate) fn engagement_advice(text: &str, recs: &mut Vec<Recommendation>) {
    if !has_question(text) {
        recs.push(Recommendation::low(
            Kind::Question,
            "Ask the audience a question to invite comments",
        ));
    }
    if !has_call_to_action(text) {
        recs.push(Recommendation::low(
            Kind::CallToAction,
            "Add a clear call to action such as follow, share or visit",
        ));
    }
}

/// Validate an image URL against the platform's extensions.
///
/// `None` when there is no URL to check.
pub(crate) fn check_image_format(
    spec: &PlatformSpec,
    url: Option<&str>,
    extensions: &[&str],
    recs: &mut Vec<Recommendation>,
) -> Option<bool> {
    let url = url.filter(|u| !u.trim().is_empty())?;
    let valid = has_allowed_extension(url, extensions);
    if !valid {
        recs.push(Recommendation::high(
            Kind::ImageFormat,
            format!(
                "Image format may not be supported; {} accepts {}",
                spec.platform.display_name(),
                extensions.join(", ")
            ),
        ));
    }
    Some(valid)
}

/// Description advisories against `{min, ideal, max}`.
pub(crate) fn description_advice(
    spec: &PlatformSpec,
    original: &str,
    adapted: &str,
    truncated: bool,
    recs: &mut Vec<Recommendation>,
) {
    let bounds = spec.description;
    let len = char_count(adapted);
    if original.trim().is_empty() {
        recs.push(Recommendation::medium(
            Kind::Description,
            "Add a description to improve discoverability and engagement",
        ));
    } else if truncated {
        recs.push(truncated_rec("Description", char_count(original), len));
    } else if len < bounds.min {
        recs.push(Recommendation::medium(
            Kind::Description,
            format!(
                "Description is short; at least {} characters is recommended",
                bounds.min
            ),
        ));
    } else if len > bounds.ideal {
        recs.push(Recommendation::medium(
            Kind::Description,
            format!(
                "Description is long; around {} characters keeps viewers reading",
                bounds.ideal
            ),
        ));
    }
}

pub(crate) fn has_thumbnail(video: &VideoContent) -> bool {
    let filled = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
    filled(&video.thumbnail_prompt) || filled(&video.thumbnail_url)
}

pub(crate) fn thumbnail_advice(video: &VideoContent, recs: &mut Vec<Recommendation>) {
    if !has_thumbnail(video) {
        recs.push(Recommendation::low(
            Kind::Thumbnail,
            "Add a custom thumbnail to lift click-through",
        ));
    }
}

/// Copy of `item` labelled for the spec's platform.
pub(crate) fn labelled(spec: &PlatformSpec, item: &ContentItem) -> ContentItem {
    let mut out = item.clone();
    out.platform = Some(spec.platform.clone());
    out
}

/// Image caption adaptation shared by the feed platforms.
///
/// `caption_limit` is the hard limit for the caption; `format` is recorded
/// in the metadata.
pub(crate) fn adapt_image(
    spec: &PlatformSpec,
    item: &ContentItem,
    image: &ImageContent,
    caption_limit: usize,
    format: Format,
) -> (ContentItem, AdaptationMetadata) {
    let caption = image.caption.as_deref().unwrap_or_default();
    let fitted = fit_and_reconcile(spec, caption, &[], caption_limit, false);
    let mentions = merge_mentions(&fitted.text, &[], spec.dashed_mentions);

    let mut meta = AdaptationMetadata::new(spec.platform.clone(), format);
    meta.stats = ContentStats::of(&fitted.text, fitted.tags.len(), mentions.len());
    meta.limits.text_truncated = fitted.truncated;
    meta.limits.hashtags_dropped = fitted.dropped;

    let recs = &mut meta.recommendations;
    if fitted.truncated {
        recs.push(truncated_rec(
            "Caption",
            char_count(caption),
            char_count(&fitted.text),
        ));
    }
    meta.limits.image_format_valid = check_image_format(
        spec,
        image.image_url.as_deref(),
        spec.image_extensions,
        recs,
    );
    if image.alt_text.as_deref().is_none_or(|a| a.trim().is_empty()) {
        recs.push(Recommendation::low(
            Kind::AltText,
            "Add alt text to improve accessibility",
        ));
    }
    if caption.trim().is_empty() {
        recs.push(Recommendation::low(
            Kind::Caption,
            "Add an engaging caption to lift engagement",
        ));
    }
    if let Some(rec) = hashtag_advice(spec, fitted.tags.len()) {
        recs.push(rec);
    }
    meta.limits.within_limits = char_count(&fitted.text) <= caption_limit
        && meta.limits.image_format_valid != Some(false);

    let mut out = labelled(spec, item);
    if let Some(img) = out.image_content.as_mut() {
        if image.caption.is_some() || !fitted.text.is_empty() {
            img.caption = Some(fitted.text);
        }
    }
    (out, meta)
}

/// Duration verdict for one platform.
pub(crate) struct DurationVerdict {
    pub class: DurationClass,
    pub valid: bool,
    pub advice: Option<Recommendation>,
}

/// Video adaptation shared by the feed platforms: title, description with
/// hashtags, duration and thumbnail.
pub(crate) fn adapt_video(
    spec: &PlatformSpec,
    item: &ContentItem,
    video: &VideoContent,
    classify: fn(&PlatformSpec, Option<u32>) -> DurationVerdict,
) -> (ContentItem, AdaptationMetadata) {
    let mut meta = AdaptationMetadata::new(spec.platform.clone(), Format::Video);

    let (title, title_truncated) = match spec.max_title_length {
        Some(max) => fit_field(spec, &video.title, max),
        None => (video.title.clone(), false),
    };
    if title_truncated {
        meta.recommendations.push(truncated_rec(
            "Title",
            char_count(&video.title),
            char_count(&title),
        ));
    }

    let original_description = video.description.as_deref().unwrap_or_default();
    let fitted = fit_and_reconcile(
        spec,
        original_description,
        &[],
        spec.description.max,
        false,
    );
    description_advice(
        spec,
        original_description,
        &fitted.text,
        fitted.truncated,
        &mut meta.recommendations,
    );

    let verdict = classify(spec, video.duration_seconds);
    if let Some(advice) = verdict.advice {
        meta.recommendations.push(advice);
    }
    thumbnail_advice(video, &mut meta.recommendations);
    if !original_description.trim().is_empty() {
        if let Some(rec) = hashtag_advice(spec, fitted.tags.len()) {
            meta.recommendations.push(rec);
        }
    }

    meta.stats = ContentStats::of(&fitted.text, fitted.tags.len(), 0);
    meta.limits.title_truncated = title_truncated;
    meta.limits.description_truncated = fitted.truncated;
    meta.limits.hashtags_dropped = fitted.dropped;
    meta.limits.duration_valid = video.duration_seconds.map(|_| verdict.valid);
    meta.limits.within_limits = verdict.valid;
    meta.video = Some(VideoInsights {
        duration_seconds: video.duration_seconds,
        duration_class: video.duration_seconds.map(|_| verdict.class),
        title_length: char_count(&title),
        description_length: char_count(&fitted.text),
        tags: fitted.tags,
        title_seo_optimized: None,
        description_seo_optimized: None,
        has_timestamps: has_timestamps(&fitted.text),
        has_links: has_links(&fitted.text),
        has_call_to_action: has_call_to_action(&fitted.text),
        has_thumbnail: has_thumbnail(video),
    });

    let mut out = labelled(spec, item);
    if let Some(v) = out.video_content.as_mut() {
        v.title = title;
        if video.description.is_some() {
            v.description = Some(fitted.text);
        }
    }
    (out, meta)
}

/// Shared text-post flow: fit, reconcile, mentions, stats and advisories.
pub(crate) fn adapt_text_post(
    spec: &PlatformSpec,
    text: &marketgen_core::TextContent,
    limit: usize,
    format: Format,
) -> (marketgen_core::TextContent, AdaptationMetadata) {
    let fitted = fit_and_reconcile(spec, &text.text, &text.hashtags, limit, false);
    let mentions = merge_mentions(&fitted.text, &text.mentions, spec.dashed_mentions);

    let mut meta = AdaptationMetadata::new(spec.platform.clone(), format);
    meta.stats = ContentStats::of(&fitted.text, fitted.tags.len(), mentions.len());
    meta.limits.within_limits = char_count(&fitted.text) <= limit;
    meta.limits.text_truncated = fitted.truncated;
    meta.limits.hashtags_dropped = fitted.dropped;

    let recs = &mut meta.recommendations;
    if fitted.truncated {
        recs.push(truncated_rec(
            "Text",
            char_count(&text.text),
            char_count(&fitted.text),
        ));
    }
    if let Some(rec) = hashtag_advice(spec, fitted.tags.len()) {
        recs.push(rec);
    }
    engagement_advice(&fitted.text, recs);

    let adapted = marketgen_core::TextContent {
        text: fitted.text,
        hashtags: fitted.tags,
        mentions,
    };
    (adapted, meta)
}
