//! Fallback for platforms with no registered spec.

use marketgen_core::{ContentItem, Platform};

use crate::error::AdaptError;
use crate::types::{AdaptationMetadata, AdaptationResult, Format};

/// Label `item` for `platform` without applying any platform rules.
///
/// Never fails: the result is successful, carries a disclaimer in `notes`
/// and records the missing adapter in `metadata.note`.
#[must_use]
pub fn adapt(platform: &Platform, item: &ContentItem) -> AdaptationResult {
    tracing::warn!(
        platform = %platform,
        item = %item.id,
        "no adapter registered, using generic fallback"
    );

    let disclaimer = format!(
        "Adapted with generic rules; review before publishing on {}.",
        platform.display_name()
    );
    let mut out = item.clone();
    out.platform = Some(platform.clone());
    out.notes = Some(match item.notes.as_deref() {
        Some(existing) if !existing.trim().is_empty() => format!("{existing}\n\n{disclaimer}"),
        _ => disclaimer,
    });

    let mut meta = AdaptationMetadata::new(platform.clone(), Format::Generic);
    meta.note = Some(
        AdaptError::UnsupportedPlatform {
            platform: platform.clone(),
        }
        .to_string(),
    );
    AdaptationResult::adapted(out, meta)
}
