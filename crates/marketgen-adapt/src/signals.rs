//! Text heuristics shared by the platform adapters.

use std::sync::LazyLock;

use regex::Regex;

/// Call-to-action phrases, English and Chinese, matched as lowercase substrings.
pub const CTA_PHRASES: &[&str] = &[
    "subscribe",
    "like",
    "comment",
    "share",
    "click",
    "join",
    "follow",
    "check out",
    "visit",
    "download",
    "訂閱",
    "點贊",
    "評論",
    "分享",
    "點擊",
    "加入",
    "關注",
    "查看",
    "訪問",
    "下載",
];

/// Words that tend to lift video title click-through.
pub const ATTENTION_WORDS: &[&str] = &[
    "how", "why", "what", "best", "top", "guide", "tutorial", "review", "tips", "secrets",
    "ultimate", "complete",
];

static TIMESTAMP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{1,2}:\d{2}(?::\d{2})?\b").expect("valid regex"));

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("valid regex"));

static DIGIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d").expect("valid regex"));

#[must_use]
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[must_use]
pub fn has_question(text: &str) -> bool {
    text.contains('?') || text.contains('？')
}

#[must_use]
pub fn has_call_to_action(text: &str) -> bool {
    let lower = text.to_lowercase();
    CTA_PHRASES.iter().any(|p| lower.contains(p))
}

/// At least two `m:ss`/`mm:ss`/`hh:mm:ss` stamps; one alone is not a chapter list.
#[must_use]
pub fn has_timestamps(text: &str) -> bool {
    TIMESTAMP_RE.find_iter(text).take(2).count() >= 2
}

#[must_use]
pub fn has_links(text: &str) -> bool {
    URL_RE.is_match(text)
}

/// Whether a URL or file name ends in one of `extensions` (lowercase, with dot).
///
/// Query strings and fragments are ignored.
#[must_use]
pub fn has_allowed_extension(url: &str, extensions: &[&str]) -> bool {
    let path = url.split(['?', '#']).next().unwrap_or(url).to_lowercase();
    extensions.iter().any(|ext| path.ends_with(ext))
}

/// Title length within `20..=ideal_len`, a digit, and an attention word.
#[must_use]
pub fn is_title_seo_optimized(title: &str, ideal_len: usize) -> bool {
    let len = char_count(title);
    if !(20..=ideal_len).contains(&len) {
        return false;
    }
    if !DIGIT_RE.is_match(title) {
        return false;
    }
    let lower = title.to_lowercase();
    ATTENTION_WORDS.iter().any(|w| lower.contains(w))
}

/// Description at least `min_len` chars, with substantive first two lines and
/// at least one of timestamps, links or a call to action.
#[must_use]
pub fn is_description_seo_optimized(description: &str, min_len: usize) -> bool {
    if description.is_empty() || char_count(description) < min_len {
        return false;
    }
    let opening = description.split('\n').take(2).collect::<Vec<_>>().join(" ");
    if char_count(&opening) < 50 {
        return false;
    }
    has_timestamps(description) || has_links(description) || has_call_to_action(description)
}

/// Text up to the first `.`, trimmed.
#[must_use]
pub fn first_sentence(text: &str) -> &str {
    text.split('.').next().unwrap_or(text).trim()
}

/// Uppercase the first char when it is a lowercase ASCII letter.
#[must_use]
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() => {
            let mut out = String::with_capacity(text.len());
            out.push(c.to_ascii_uppercase());
            out.push_str(chars.as_str());
            out
        }
        _ => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_detects_full_width_mark() {
        assert!(has_question("你覺得呢？"));
        assert!(has_question("Ready?"));
        assert!(!has_question("Ready."));
    }

    #[test]
    fn cta_is_case_insensitive_and_bilingual() {
        assert!(has_call_to_action("Please SUBSCRIBE today"));
        assert!(has_call_to_action("歡迎訂閱我們的頻道"));
        assert!(!has_call_to_action("Nothing to see here"));
    }

    #[test]
    fn timestamps_need_two() {
        assert!(!has_timestamps("Intro at 0:30"));
        assert!(has_timestamps("0:00 Intro\n1:45 Setup\n12:03:10 Outro"));
    }

    #[test]
    fn links_need_scheme() {
        assert!(has_links("More at https://example.com/x"));
        assert!(!has_links("More at example.com"));
    }

    #[test]
    fn extension_check_ignores_query_and_case() {
        let exts = [".jpg", ".png"];
        assert!(has_allowed_extension("https://cdn/x/IMG.PNG?w=200", &exts));
        assert!(!has_allowed_extension("https://cdn/x/img.webp", &exts));
    }

    #[test]
    fn title_seo_requires_all_three_signals() {
        assert!(is_title_seo_optimized("Top 5 Tips for Better Sleep", 60));
        assert!(!is_title_seo_optimized("Top Tips for Better Sleep Today", 60));
        assert!(!is_title_seo_optimized("5 Tips", 60));
        assert!(!is_title_seo_optimized("5 things about our new product launch", 60));
    }

    #[test]
    fn description_seo_requires_length_opening_and_extra() {
        let opening = "This video walks through every step of our spring planting routine.";
        let body = "x".repeat(200);
        let good = format!("{opening}\n{body}\nSubscribe for more!");
        assert!(is_description_seo_optimized(&good, 250));
        let no_extra = format!("{opening}\n{body}\nThe end.");
        assert!(!is_description_seo_optimized(&no_extra, 250));
        assert!(!is_description_seo_optimized("Short. Subscribe!", 250));
    }

    #[test]
    fn first_sentence_and_capitalize() {
        assert_eq!(first_sentence("  hello there. More text"), "hello there");
        assert_eq!(capitalize_first("hello"), "Hello");
        assert_eq!(capitalize_first("品牌"), "品牌");
        assert_eq!(capitalize_first(""), "");
    }
}
