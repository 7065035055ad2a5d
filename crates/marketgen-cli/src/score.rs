//! `score` and `profile` command handlers.

use std::path::{Path, PathBuf};

use marketgen_core::{load_brands, AppConfig, BrandModel, BrandStore, FileBrandStore};
use marketgen_voice::{
    analyze_brand_voice, extract_key_phrases, scorable_text, BrandConsistencyScorer, ScorerConfig,
};

use crate::adapt::read_item;

/// Find `id` in the brand file, then in the brand store.
///
/// A missing brand file is not an error as long as the store has the brand.
pub(crate) fn find_brand(config: &AppConfig, id: &str) -> anyhow::Result<Option<BrandModel>> {
    if config.brands_path.exists() {
        let file = load_brands(&config.brands_path)?;
        if let Some(brand) = file.find(id) {
            return Ok(Some(brand.clone()));
        }
    }
    let store = FileBrandStore::new(config.brand_store_dir());
    Ok(store.load(id)?)
}

/// Score text or a content item against `brand_id` and print the result
/// as JSON.
///
/// An unknown brand is scored like a missing brand model rather than
/// rejected.
///
/// # Errors
///
/// Returns an error if the brand file is invalid, the store cannot be read,
/// or the input item cannot be loaded.
pub(crate) fn run_score(
    config: &AppConfig,
    brand_id: &str,
    text: Option<&str>,
    input: Option<&Path>,
    model_score: Option<f64>,
) -> anyhow::Result<()> {
    let brand = find_brand(config, brand_id)?;
    if brand.is_none() {
        tracing::warn!(brand = %brand_id, "brand not found in brand file or store");
    }

    let text = match (text, input) {
        (Some(text), _) => text.to_string(),
        (None, Some(path)) => scorable_text(&read_item(path)?),
        (None, None) => anyhow::bail!("either --text or --input is required"),
    };

    let scorer = BrandConsistencyScorer::new(ScorerConfig::from_app_config(config));
    let result = scorer.score(&text, brand.as_ref(), model_score);

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

/// Profile the voice of the content items at `inputs` and print it as JSON.
///
/// # Errors
///
/// Returns an error if any input item cannot be loaded.
pub(crate) fn run_profile(inputs: &[PathBuf], top: usize) -> anyhow::Result<()> {
    let texts = inputs
        .iter()
        .map(|path| read_item(path).map(|item| scorable_text(&item)))
        .collect::<anyhow::Result<Vec<String>>>()?;

    let mut profile = analyze_brand_voice(texts.as_slice());
    profile.key_phrases = extract_key_phrases(texts.as_slice(), top);

    println!("{}", serde_json::to_string_pretty(&profile)?);
    Ok(())
}
