//! Brand-voice consistency scoring.
//!
//! [`BrandConsistencyScorer`] compares text with a
//! [`BrandModel`](marketgen_core::BrandModel): keyword coverage, sentence
//! length against the brand's ideal, and each declared style attribute as
//! measured by its [`StyleDimension`] evaluator. An optional
//! [`BrandVoiceModel`] contributes its own score and powers
//! [`enhance_consistency`]. [`analyze_brand_voice`] profiles a brand's existing
//! content.

pub mod enhance;
pub mod error;
pub mod evaluators;
mod lexicon;
pub mod profile;
pub mod scorer;
pub mod text;
pub mod types;

pub use enhance::{
    enhance_consistency, scorable_text, score_with_model, BrandVoiceModel, Enhancement,
    EnhancementOutcome,
};
pub use error::VoiceError;
pub use evaluators::{StyleDimension, NEUTRAL_MEASURE};
pub use profile::{
    analyze_brand_voice, analyze_tone, extract_key_phrases, ToneProfile, VoiceProfile,
    DEFAULT_KEY_PHRASES,
};
pub use scorer::{BrandConsistencyScorer, ScorerConfig, Weights};
pub use types::{
    AttributeScore, ConsistencyResult, ConsistencyStatus, KeywordCoverage, SentenceStats,
    Subscores,
};
