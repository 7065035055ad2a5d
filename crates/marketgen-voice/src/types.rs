use serde::Serialize;

use crate::evaluators::StyleDimension;

/// Why a consistency result looks the way it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsistencyStatus {
    Scored,
    /// No brand model was available; the score is zero.
    NoBrandModel,
    /// The text has no words; sentence length scores zero.
    EmptyText,
}

/// Per-signal scores, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Subscores {
    pub keyword: f64,
    pub sentence_length: f64,
    pub style: f64,
    /// Score from an external voice model, when one was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct KeywordCoverage {
    pub found: Vec<String>,
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SentenceStats {
    pub sentence_count: usize,
    pub average_words: f64,
    pub ideal_words: f64,
    pub shortest: usize,
    pub longest: usize,
}

/// How one declared style attribute fared.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeScore {
    pub name: String,
    /// `None` when the name matched no evaluator and the neutral value was used.
    pub dimension: Option<StyleDimension>,
    pub target: f64,
    pub measured: f64,
    pub score: f64,
    pub suggestion: String,
}

/// Outcome of scoring text against a brand's declared voice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsistencyResult {
    /// Weighted overall score in `[0, 1]`.
    pub score: f64,
    pub status: ConsistencyStatus,
    pub subscores: Subscores,
    pub keywords: KeywordCoverage,
    pub sentences: SentenceStats,
    pub attributes: Vec<AttributeScore>,
    pub suggestions: Vec<String>,
}

impl ConsistencyResult {
    /// Zero score with a single suggestion to configure a brand.
    #[must_use]
    pub fn no_brand_model() -> Self {
        Self {
            score: 0.0,
            status: ConsistencyStatus::NoBrandModel,
            subscores: Subscores::default(),
            keywords: KeywordCoverage::default(),
            sentences: SentenceStats::default(),
            attributes: Vec::new(),
            suggestions: vec!["Configure a brand model before checking consistency".to_string()],
        }
    }
}
