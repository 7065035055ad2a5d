//! Style dimensions and the measurement behind each one.
//!
//! Every evaluator maps text to a measured value in `[0, 1]`; the scorer
//! compares it with the brand's target for that dimension.

use serde::Serialize;

use crate::lexicon::{
    CONTRACTIONS, DIRECT_MARKERS, EMOTION_WORDS, FILLER_WORDS, FORMAL_MARKERS, HUMOR_MARKERS,
    INDIRECT_MARKERS, INFORMAL_MARKERS, PROFESSIONAL_MARKERS,
};
use crate::text::{
    average_sentence_words, count_markers, count_substrings, is_question, normalized_words,
    sentences,
};

/// Measured value used for attribute names no evaluator recognises.
pub const NEUTRAL_MEASURE: f64 = 0.5;

/// Sentences of this many words count as fully formal, or not concise at all.
const LONG_SENTENCE_WORDS: f64 = 20.0;

/// A tone dimension a brand can set a target for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleDimension {
    Formal,
    Professional,
    Humorous,
    Emotional,
    Concise,
    Direct,
}

/// Attribute names and their dimension; names are compared trimmed and
/// lowercased.
const ALIASES: &[(&str, StyleDimension)] = &[
    ("formal", StyleDimension::Formal),
    ("formality", StyleDimension::Formal),
    ("正式", StyleDimension::Formal),
    ("professional", StyleDimension::Professional),
    ("professionalism", StyleDimension::Professional),
    ("專業", StyleDimension::Professional),
    ("专业", StyleDimension::Professional),
    ("humorous", StyleDimension::Humorous),
    ("humor", StyleDimension::Humorous),
    ("humour", StyleDimension::Humorous),
    ("幽默", StyleDimension::Humorous),
    ("emotional", StyleDimension::Emotional),
    ("emotion", StyleDimension::Emotional),
    ("情感", StyleDimension::Emotional),
    ("concise", StyleDimension::Concise),
    ("conciseness", StyleDimension::Concise),
    ("簡潔", StyleDimension::Concise),
    ("简洁", StyleDimension::Concise),
    ("direct", StyleDimension::Direct),
    ("directness", StyleDimension::Direct),
    ("直接", StyleDimension::Direct),
];

impl StyleDimension {
    pub const ALL: [StyleDimension; 6] = [
        StyleDimension::Formal,
        StyleDimension::Professional,
        StyleDimension::Humorous,
        StyleDimension::Emotional,
        StyleDimension::Concise,
        StyleDimension::Direct,
    ];

    /// Dimension for a declared attribute name, if one is registered.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let key = name.trim().to_lowercase();
        ALIASES
            .iter()
            .find(|(alias, _)| *alias == key)
            .map(|&(_, dimension)| dimension)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            StyleDimension::Formal => "formal",
            StyleDimension::Professional => "professional",
            StyleDimension::Humorous => "humorous",
            StyleDimension::Emotional => "emotional",
            StyleDimension::Concise => "concise",
            StyleDimension::Direct => "direct",
        }
    }

    /// Measured value of this dimension for `text`, in `[0, 1]`.
    #[must_use]
    pub fn measure(self, text: &str) -> f64 {
        let value = match self {
            StyleDimension::Formal => formality(text),
            StyleDimension::Professional => professionalism(text),
            StyleDimension::Humorous => humor(text),
            StyleDimension::Emotional => emotion(text),
            StyleDimension::Concise => conciseness(text),
            StyleDimension::Direct => directness(text),
        };
        value.clamp(0.0, 1.0)
    }

    /// Advice for moving the measured value toward `target`.
    #[must_use]
    pub fn suggestion(self, measured: f64, target: f64) -> &'static str {
        let raise = measured < target;
        match (self, raise) {
            (StyleDimension::Formal, true) => "use more formal wording and sentence structure",
            (StyleDimension::Formal, false) => "relax the tone slightly",
            (StyleDimension::Professional, true) => "add domain terminology and industry vocabulary",
            (StyleDimension::Professional, false) => "simplify some of the jargon",
            (StyleDimension::Humorous, true) => "add lighter, playful phrasing",
            (StyleDimension::Humorous, false) => "tone down the jokes in favour of substance",
            (StyleDimension::Emotional, true) => "use warmer, more expressive language",
            (StyleDimension::Emotional, false) => "use more neutral, objective language",
            (StyleDimension::Concise, true) => "cut redundant words and shorten sentences",
            (StyleDimension::Concise, false) => "add more detail and description",
            (StyleDimension::Direct, true) => "state the main point plainly",
            (StyleDimension::Direct, false) => "soften statements with more tentative phrasing",
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn ratio(part: usize, whole: usize) -> f64 {
    part as f64 / whole as f64
}

/// Formal vs informal marker share, blended with sentence length.
fn formality(text: &str) -> f64 {
    let tokens = normalized_words(text);
    let lower = text.to_lowercase();
    let formal = count_markers(&tokens, FORMAL_MARKERS);
    let informal =
        count_markers(&tokens, INFORMAL_MARKERS) + count_substrings(&lower, CONTRACTIONS);
    if formal + informal == 0 {
        return NEUTRAL_MEASURE;
    }
    let marker_share = ratio(formal, formal + informal);
    let length_factor = (average_sentence_words(&sentences(text)) / LONG_SENTENCE_WORDS).min(1.0);
    0.7 * marker_share + 0.3 * length_factor
}

fn professionalism(text: &str) -> f64 {
    let tokens = normalized_words(text);
    if tokens.is_empty() {
        return 0.0;
    }
    let density = ratio(count_markers(&tokens, PROFESSIONAL_MARKERS), tokens.len());
    (density * 20.0).min(1.0)
}

#[allow(clippy::cast_precision_loss)]
fn humor(text: &str) -> f64 {
    let tokens = normalized_words(text);
    let markers = count_markers(&tokens, HUMOR_MARKERS) as f64;
    let exclamations = text.matches(['!', '！']).count() as f64;
    let questions = text.matches(['?', '？']).count() as f64;
    (markers * 0.3 + exclamations * 0.1 + questions * 0.05).min(1.0)
}

#[allow(clippy::cast_precision_loss)]
fn emotion(text: &str) -> f64 {
    let tokens = normalized_words(text);
    if tokens.is_empty() {
        return 0.0;
    }
    let density = ratio(count_markers(&tokens, EMOTION_WORDS), tokens.len());
    let exclamations = text.matches(['!', '！']).count() as f64;
    (density * 15.0 + exclamations * 0.1).min(1.0)
}

/// Short sentences and few filler words.
#[allow(clippy::cast_precision_loss)]
fn conciseness(text: &str) -> f64 {
    let found = sentences(text);
    if found.is_empty() {
        return 0.0;
    }
    let length_factor = (1.0 - average_sentence_words(&found) / LONG_SENTENCE_WORDS).max(0.0);
    let fillers = count_markers(&normalized_words(text), FILLER_WORDS) as f64;
    let filler_factor = (1.0 - fillers / 10.0).max(0.0);
    0.7 * length_factor + 0.3 * filler_factor
}

/// Direct vs hedging marker share, discounted by the share of questions.
fn directness(text: &str) -> f64 {
    let tokens = normalized_words(text);
    let direct = count_markers(&tokens, DIRECT_MARKERS);
    let indirect = count_markers(&tokens, INDIRECT_MARKERS);
    let marker_share = if direct + indirect == 0 {
        NEUTRAL_MEASURE
    } else {
        ratio(direct, direct + indirect)
    };
    let found = sentences(text);
    let question_share = if found.is_empty() {
        0.0
    } else {
        ratio(found.iter().filter(|s| is_question(s)).count(), found.len())
    };
    marker_share * (1.0 - question_share * 0.5)
}
