//! Sentence and word splitting shared by the scorer and the evaluators.

use std::sync::LazyLock;

use regex::Regex;

/// A sentence body followed by its run of terminators, if any.
static SENTENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^.!?。！？]+[.!?。！？]*").expect("valid regex"));

const QUESTION_MARKS: [char; 2] = ['?', '？'];

/// Sentences of `text`, each with its trailing punctuation.
///
/// Fragments without a single word (stray punctuation, emoji runs) are
/// dropped.
#[must_use]
pub fn sentences(text: &str) -> Vec<&str> {
    SENTENCE_RE
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .filter(|s| word_count(s) > 0)
        .collect()
}

/// Whitespace tokens that contain at least one alphanumeric char.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
        .filter(|w| w.chars().any(char::is_alphanumeric))
}

#[must_use]
pub fn word_count(text: &str) -> usize {
    words(text).count()
}

/// Mean words per sentence; `0.0` when there are no sentences.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average_sentence_words(sentences: &[&str]) -> f64 {
    if sentences.is_empty() {
        return 0.0;
    }
    let total: usize = sentences.iter().map(|s| word_count(s)).sum();
    total as f64 / sentences.len() as f64
}

#[must_use]
pub fn is_question(sentence: &str) -> bool {
    sentence
        .trim_end()
        .chars()
        .rev()
        .take_while(|c| matches!(c, '.' | '!' | '?' | '。' | '！' | '？'))
        .any(|c| QUESTION_MARKS.contains(&c))
}

/// Lowercased words with surrounding punctuation removed; inner
/// apostrophes and hyphens are kept.
#[must_use]
pub fn normalized_words(text: &str) -> Vec<String> {
    words(text)
        .map(|w| {
            w.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|w| !w.is_empty())
        .collect()
}

/// Occurrences of each marker in `tokens`, matching whole words.
///
/// Multi-word markers such as `"kind of"` match consecutive tokens.
#[must_use]
pub fn count_markers(tokens: &[String], markers: &[&str]) -> usize {
    markers
        .iter()
        .map(|marker| {
            let parts: Vec<&str> = marker.split_whitespace().collect();
            if parts.is_empty() || parts.len() > tokens.len() {
                return 0;
            }
            tokens
                .windows(parts.len())
                .filter(|window| window.iter().zip(&parts).all(|(t, p)| t == p))
                .count()
        })
        .sum()
}

/// Count of `needle` substrings in `haystack`, non-overlapping.
#[must_use]
pub fn count_substrings(haystack: &str, needles: &[&str]) -> usize {
    needles
        .iter()
        .filter(|n| !n.is_empty())
        .map(|n| haystack.matches(n).count())
        .sum()
}
