//! Voice profile of a brand's existing content.
//!
//! Used to seed or review a [`BrandModel`](marketgen_core::BrandModel):
//! tone densities, sentence length, vocabulary richness and the phrases the
//! brand repeats most.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::lexicon::{
    CASUAL_MARKERS, EMOTION_WORDS, FORMAL_MARKERS, INFORMAL_MARKERS, STOPWORDS, TECHNICAL_MARKERS,
};
use crate::text::{count_markers, normalized_words, sentences};

pub const DEFAULT_KEY_PHRASES: usize = 20;
/// Longest phrase, in words, considered by [`extract_key_phrases`].
pub const MAX_PHRASE_WORDS: usize = 3;

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:https?://|www\.)\S+|\S+@\S+").expect("valid regex"));

/// Share of content words that carry each tone, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ToneProfile {
    pub formal: f64,
    pub casual: f64,
    pub technical: f64,
    pub emotional: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct VoiceProfile {
    pub samples: usize,
    pub key_phrases: Vec<String>,
    pub tone: ToneProfile,
    /// Mean words per sentence across all samples.
    pub average_sentence_length: f64,
    /// Distinct words over total words.
    pub vocabulary_richness: f64,
}

/// Lowercased words of `text` without links, emails, numbers or stopwords.
fn content_words(text: &str) -> Vec<String> {
    normalized_words(&LINK_RE.replace_all(text, " "))
        .into_iter()
        .filter(|w| w.chars().any(char::is_alphabetic))
        .filter(|w| !STOPWORDS.contains(&w.as_str()))
        .collect()
}

/// Tone densities over the content words of all `texts`.
///
/// All zero when there are no content words.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn analyze_tone<S: AsRef<str>>(texts: &[S]) -> ToneProfile {
    let mut counts = [0usize; 4];
    let mut total = 0usize;
    for text in texts {
        let words = content_words(text.as_ref());
        counts[0] += count_markers(&words, FORMAL_MARKERS);
        counts[1] +=
            count_markers(&words, INFORMAL_MARKERS) + count_markers(&words, CASUAL_MARKERS);
        counts[2] += count_markers(&words, TECHNICAL_MARKERS);
        counts[3] += count_markers(&words, EMOTION_WORDS);
        total += words.len();
    }
    if total == 0 {
        return ToneProfile::default();
    }
    let density = |n: usize| (n as f64 / total as f64).min(1.0);
    ToneProfile {
        formal: density(counts[0]),
        casual: density(counts[1]),
        technical: density(counts[2]),
        emotional: density(counts[3]),
    }
}

/// The `top_n` most frequent phrases of one to three content words.
///
/// Phrases never span two samples. A phrase scores its occurrence count
/// weighted by its word count, so a repeated slogan outranks its own words.
/// Ties break alphabetically.
#[must_use]
pub fn extract_key_phrases<S: AsRef<str>>(texts: &[S], top_n: usize) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for text in texts {
        let words = content_words(text.as_ref());
        for n in 1..=MAX_PHRASE_WORDS {
            for window in words.windows(n) {
                *counts.entry(window.join(" ")).or_default() += 1;
            }
        }
    }

    let mut ranked: Vec<(String, usize)> = counts
        .into_iter()
        // a multi-word phrase seen once is noise
        .filter(|(phrase, count)| *count > 1 || !phrase.contains(' '))
        .map(|(phrase, count)| {
            let score = count * (phrase.matches(' ').count() + 1);
            (phrase, score)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.into_iter().take(top_n).map(|(p, _)| p).collect()
}

/// Full voice profile of `texts`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn analyze_brand_voice<S: AsRef<str>>(texts: &[S]) -> VoiceProfile {
    if texts.is_empty() {
        tracing::warn!("no content supplied for brand voice analysis");
        return VoiceProfile::default();
    }

    let mut sentence_count = 0usize;
    let mut all_words: Vec<String> = Vec::new();
    for text in texts {
        for sentence in sentences(text.as_ref()) {
            sentence_count += 1;
            all_words.extend(
                normalized_words(sentence)
                    .into_iter()
                    .filter(|w| w.chars().any(char::is_alphabetic)),
            );
        }
    }

    let average_sentence_length = if sentence_count == 0 {
        0.0
    } else {
        all_words.len() as f64 / sentence_count as f64
    };
    let vocabulary_richness = if all_words.is_empty() {
        0.0
    } else {
        let distinct: HashSet<&String> = all_words.iter().collect();
        distinct.len() as f64 / all_words.len() as f64
    };

    let profile = VoiceProfile {
        samples: texts.len(),
        key_phrases: extract_key_phrases(texts, DEFAULT_KEY_PHRASES),
        tone: analyze_tone(texts),
        average_sentence_length,
        vocabulary_richness,
    };
    tracing::info!(
        samples = profile.samples,
        key_phrases = profile.key_phrases.len(),
        "brand voice profile built"
    );
    profile
}
