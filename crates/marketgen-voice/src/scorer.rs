//! Weighted brand-voice consistency scoring.
//!
//! Three deterministic signals (keyword coverage, sentence length and style
//! attributes) plus an optional external model score are combined with
//! fixed weights into a single score in `[0, 1]`.

use marketgen_core::{AppConfig, BrandModel, SentenceLengthSettings};

use crate::evaluators::{StyleDimension, NEUTRAL_MEASURE};
use crate::text::{average_sentence_words, sentences, word_count};
use crate::types::{
    AttributeScore, ConsistencyResult, ConsistencyStatus, KeywordCoverage, SentenceStats,
    Subscores,
};

/// Attribute names that shorten the ideal sentence.
const CONCISE_NAMES: &[&str] = &["concise", "brief", "簡潔", "簡短", "简洁", "简短"];
/// Attribute names that lengthen the ideal sentence.
const DETAILED_NAMES: &[&str] = &["detailed", "elaborate", "詳細", "詳盡", "详细", "详尽"];

const MAX_MISSING_KEYWORDS_LISTED: usize = 3;
const WEAK_ATTRIBUTE: f64 = 0.4;
const WEAK_SUBSCORE: f64 = 0.5;
const RECREATE_BELOW: f64 = 0.4;
const REVISE_BELOW: f64 = 0.7;

/// Weights applied to the sub-scores; always sum to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub keyword: f64,
    pub sentence_length: f64,
    pub style: f64,
    pub model: f64,
}

impl Weights {
    pub const WITH_MODEL: Weights = Weights {
        keyword: 0.2,
        sentence_length: 0.1,
        style: 0.3,
        model: 0.4,
    };

    pub const WITHOUT_MODEL: Weights = Weights {
        keyword: 0.4,
        sentence_length: 0.2,
        style: 0.4,
        model: 0.0,
    };

    #[must_use]
    pub fn for_model(present: bool) -> Self {
        if present {
            Self::WITH_MODEL
        } else {
            Self::WITHOUT_MODEL
        }
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.keyword + self.sentence_length + self.style + self.model
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScorerConfig {
    pub sentence_length: SentenceLengthSettings,
}

impl ScorerConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            sentence_length: config.sentence_length,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BrandConsistencyScorer {
    config: ScorerConfig,
}

impl BrandConsistencyScorer {
    #[must_use]
    pub fn new(config: ScorerConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    /// Score `text` against `brand`.
    ///
    /// `model_score` comes from an external voice model; non-finite values
    /// are ignored and finite ones clamped to `[0, 1]`. Without a brand the
    /// result is a zero score with [`ConsistencyStatus::NoBrandModel`].
    #[must_use]
    pub fn score(
        &self,
        text: &str,
        brand: Option<&BrandModel>,
        model_score: Option<f64>,
    ) -> ConsistencyResult {
        let Some(brand) = brand else {
            tracing::warn!("no brand model configured, consistency score is zero");
            return ConsistencyResult::no_brand_model();
        };

        let model = model_score.and_then(|s| {
            if s.is_finite() {
                Some(s.clamp(0.0, 1.0))
            } else {
                tracing::warn!(
                    brand = %brand.id,
                    score = s,
                    "ignoring non-finite voice model score"
                );
                None
            }
        });

        let keywords = keyword_coverage(text, &brand.keywords);
        let keyword = keyword_score(&keywords, brand.keywords.len());

        let empty = word_count(text) == 0;
        let sentences = self.sentence_stats(text, brand);
        let sentence_length = if empty {
            0.0
        } else {
            (1.0 - (sentences.average_words - sentences.ideal_words).abs() / sentences.ideal_words)
                .max(0.0)
        };

        let attributes: Vec<AttributeScore> = brand
            .style_attributes
            .iter()
            .map(|attr| score_attribute(text, &attr.name, attr.target_value))
            .collect();
        let style = mean_or_one(attributes.iter().map(|a| a.score));

        let weights = Weights::for_model(model.is_some());
        let score = (keyword * weights.keyword
            + sentence_length * weights.sentence_length
            + style * weights.style
            + model.unwrap_or(0.0) * weights.model)
            .clamp(0.0, 1.0);

        let mut result = ConsistencyResult {
            score,
            status: if empty {
                ConsistencyStatus::EmptyText
            } else {
                ConsistencyStatus::Scored
            },
            subscores: Subscores {
                keyword,
                sentence_length,
                style,
                model,
            },
            keywords,
            sentences,
            attributes,
            suggestions: Vec::new(),
        };
        result.suggestions = suggestions(&result, !brand.keywords.is_empty());

        tracing::debug!(
            brand = %brand.id,
            score = result.score,
            status = ?result.status,
            "scored brand consistency"
        );
        result
    }

    /// Ideal words per sentence for `brand`.
    ///
    /// The last concise or detailed attribute wins; never below one word.
    #[must_use]
    pub fn ideal_sentence_words(&self, brand: &BrandModel) -> f64 {
        let settings = &self.config.sentence_length;
        let mut ideal = settings.ideal_words;
        for attr in &brand.style_attributes {
            let name = attr.name.trim().to_lowercase();
            let target = attr.target_value.clamp(0.0, 1.0);
            if CONCISE_NAMES.contains(&name.as_str()) {
                ideal = settings.concise_base - settings.concise_slope * target;
            } else if DETAILED_NAMES.contains(&name.as_str()) {
                ideal = settings.detailed_base + settings.detailed_slope * target;
            }
        }
        ideal.max(1.0)
    }

    fn sentence_stats(&self, text: &str, brand: &BrandModel) -> SentenceStats {
        let found = sentences(text);
        let lengths: Vec<usize> = found.iter().map(|s| word_count(s)).collect();
        SentenceStats {
            sentence_count: found.len(),
            average_words: average_sentence_words(&found),
            ideal_words: self.ideal_sentence_words(brand),
            shortest: lengths.iter().copied().min().unwrap_or(0),
            longest: lengths.iter().copied().max().unwrap_or(0),
        }
    }
}

/// Case-insensitive substring presence of each keyword.
fn keyword_coverage(text: &str, keywords: &[String]) -> KeywordCoverage {
    let lower = text.to_lowercase();
    let (found, missing): (Vec<String>, Vec<String>) = keywords
        .iter()
        .cloned()
        .partition(|k| lower.contains(&k.to_lowercase()));
    KeywordCoverage { found, missing }
}

#[allow(clippy::cast_precision_loss)]
fn keyword_score(coverage: &KeywordCoverage, configured: usize) -> f64 {
    if configured == 0 {
        1.0
    } else {
        coverage.found.len() as f64 / configured as f64
    }
}

fn score_attribute(text: &str, name: &str, target: f64) -> AttributeScore {
    let target = target.clamp(0.0, 1.0);
    let dimension = StyleDimension::from_name(name);
    let (measured, suggestion) = match dimension {
        Some(d) => {
            let measured = d.measure(text);
            (measured, d.suggestion(measured, target).to_string())
        }
        None => (
            NEUTRAL_MEASURE,
            format!("adjust '{name}' to match the brand voice"),
        ),
    };
    AttributeScore {
        name: name.to_string(),
        dimension,
        target,
        measured,
        score: (1.0 - (measured - target).abs()).max(0.0),
        suggestion,
    }
}

/// Mean of `scores`, or `1.0` when there are none.
#[allow(clippy::cast_precision_loss)]
fn mean_or_one(scores: impl Iterator<Item = f64>) -> f64 {
    let (sum, n) = scores.fold((0.0, 0usize), |(sum, n), s| (sum + s, n + 1));
    if n == 0 {
        1.0
    } else {
        sum / n as f64
    }
}

fn suggestions(result: &ConsistencyResult, has_keywords: bool) -> Vec<String> {
    let mut out = Vec::new();
    let subs = &result.subscores;

    if has_keywords && subs.keyword <= WEAK_SUBSCORE && !result.keywords.missing.is_empty() {
        let listed: Vec<&str> = result
            .keywords
            .missing
            .iter()
            .take(MAX_MISSING_KEYWORDS_LISTED)
            .map(String::as_str)
            .collect();
        out.push(format!("Consider adding keywords: {}", listed.join(", ")));
    }

    if result.status == ConsistencyStatus::EmptyText {
        out.push("Provide text to compare against the brand voice".to_string());
    } else if subs.sentence_length < WEAK_SUBSCORE {
        if result.sentences.average_words > result.sentences.ideal_words {
            out.push("Shorten sentences for a more concise delivery".to_string());
        } else {
            out.push("Lengthen sentences with more detail or description".to_string());
        }
    }

    for attr in result.attributes.iter().filter(|a| a.score < WEAK_ATTRIBUTE) {
        out.push(format!("Strengthen '{}': {}", attr.name, attr.suggestion));
    }

    if result.score < RECREATE_BELOW {
        out.push(
            "Content differs substantially from the brand voice; consider rewriting it".to_string(),
        );
    } else if result.score < REVISE_BELOW {
        out.push(
            "Content partly matches the brand voice; revise it before publishing".to_string(),
        );
    }
    out
}

#[cfg(test)]
#[path = "scorer_test.rs"]
mod tests;
