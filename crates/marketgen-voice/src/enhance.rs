//! Optional learned voice model and the enhancement flow built on it.

use marketgen_core::{BrandModel, ContentItem, Payload};
use serde::Serialize;

use crate::error::VoiceError;
use crate::scorer::BrandConsistencyScorer;

/// Scores at or below this are sent to the model for enhancement.
const ALREADY_CONSISTENT: f64 = 0.85;
/// Model output must be longer than this many chars to replace the text.
const MIN_ENHANCED_CHARS: usize = 10;

/// An externally trained brand-voice model.
///
/// Adapters never call this; it only feeds the scorer and
/// [`enhance_consistency`].
pub trait BrandVoiceModel: Send + Sync {
    /// Voice match of `text`, expected in `[0, 1]`.
    fn score(&self, text: &str) -> Result<f64, VoiceError>;

    /// Rewrite `text` closer to `brand`'s voice.
    fn enhance(&self, text: &str, brand: &BrandModel) -> Result<String, VoiceError>;
}

/// The model's score for `text`, or `None` when it fails.
pub fn score_with_model(model: &dyn BrandVoiceModel, text: &str) -> Option<f64> {
    match model.score(text) {
        Ok(score) => Some(score),
        Err(e) => {
            tracing::warn!(error = %e, "voice model scoring failed, continuing without it");
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnhancementOutcome {
    /// No brand or no model was supplied.
    Skipped,
    AlreadyConsistent,
    Enhanced,
    /// The model answered with text too short to use.
    Rejected,
    ModelFailed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Enhancement {
    pub text: String,
    /// Score of the input; `None` without a brand.
    pub before: Option<f64>,
    /// Score of the returned text; `None` without a brand.
    pub after: Option<f64>,
    pub outcome: EnhancementOutcome,
}

/// Ask `model` to rewrite `text` when it drifts from `brand`'s voice.
///
/// Failures never propagate: the original text comes back with an outcome
/// explaining why.
pub fn enhance_consistency(
    scorer: &BrandConsistencyScorer,
    text: &str,
    brand: Option<&BrandModel>,
    model: Option<&dyn BrandVoiceModel>,
) -> Enhancement {
    let score_of = |t: &str| {
        brand.map(|b| {
            let model_score = model.and_then(|m| score_with_model(m, t));
            scorer.score(t, Some(b), model_score).score
        })
    };
    let unchanged = |before: Option<f64>, outcome| Enhancement {
        text: text.to_string(),
        before,
        after: before,
        outcome,
    };

    let before = score_of(text);
    let (Some(brand), Some(model), Some(before_score)) = (brand, model, before) else {
        tracing::debug!("enhancement skipped, brand model or voice model missing");
        return unchanged(before, EnhancementOutcome::Skipped);
    };

    if before_score > ALREADY_CONSISTENT {
        return unchanged(before, EnhancementOutcome::AlreadyConsistent);
    }

    let enhanced = match model.enhance(text, brand) {
        Ok(enhanced) => enhanced,
        Err(e) => {
            tracing::warn!(brand = %brand.id, error = %e, "voice model enhancement failed");
            return unchanged(before, EnhancementOutcome::ModelFailed);
        }
    };

    if enhanced.trim().chars().count() <= MIN_ENHANCED_CHARS {
        tracing::warn!(brand = %brand.id, "voice model returned too little text, keeping original");
        return unchanged(before, EnhancementOutcome::Rejected);
    }

    let after = score_of(&enhanced);
    tracing::info!(
        brand = %brand.id,
        before = before_score,
        after = ?after,
        "enhanced content toward brand voice"
    );
    Enhancement {
        text: enhanced,
        before,
        after,
        outcome: EnhancementOutcome::Enhanced,
    }
}

/// The text of `item` worth scoring against a brand voice.
///
/// Text items give their body, images their caption and videos their title,
/// description and script joined by blank lines. Missing payloads give an
/// empty string.
#[must_use]
pub fn scorable_text(item: &ContentItem) -> String {
    match item.payload() {
        Some(Payload::Text(text)) => text.text.clone(),
        Some(Payload::Image(image)) => image.caption.clone().unwrap_or_default(),
        Some(Payload::Video(video)) => [
            Some(video.title.as_str()),
            video.description.as_deref(),
            Some(video.script.as_str()),
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n"),
        None => String::new(),
    }
}
