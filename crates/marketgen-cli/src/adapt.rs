//! `adapt` command handler.

use std::path::Path;

use marketgen_adapt::AdaptationOrchestrator;
use marketgen_core::{AppConfig, ContentItem, Platform};

/// Read a JSON content item from `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a content item.
pub(crate) fn read_item(path: &Path) -> anyhow::Result<ContentItem> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&raw)
        .map_err(|e| anyhow::anyhow!("{} is not a valid content item: {e}", path.display()))
}

/// Adapt the item in `input` for every platform and print the results as a
/// JSON object keyed by platform.
///
/// Per-platform failures are part of the output, not errors.
///
/// # Errors
///
/// Returns an error if the input cannot be loaded or the output cannot be
/// serialized.
pub(crate) async fn run_adapt(
    config: &AppConfig,
    input: &Path,
    platforms: &[Platform],
    concurrent: bool,
) -> anyhow::Result<()> {
    let item = read_item(input)?;
    let orchestrator = AdaptationOrchestrator::from_config(config);

    let results = if concurrent {
        orchestrator.adapt_concurrently(&item, platforms).await
    } else {
        orchestrator.adapt(&item, platforms)
    };

    for (platform, result) in &results {
        if let Some(error) = &result.error {
            tracing::warn!(platform = %platform, error = %error, "adaptation failed");
        }
    }
    tracing::info!(
        item = %item.id,
        platforms = results.len(),
        failed = results.values().filter(|r| !r.success).count(),
        "adaptation complete"
    );

    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}
