//! `brands` command handlers.

use clap::Subcommand;
use marketgen_core::{load_brands, AppConfig, BrandStore, FileBrandStore};

#[derive(Debug, Subcommand)]
pub enum BrandsCommands {
    /// List brands in the brand file
    List,
    /// Check the brand file for errors
    Validate,
    /// Save every brand in the brand file to the brand store
    Import,
}

/// # Errors
///
/// Returns an error if the brand file is missing or invalid, or a brand
/// cannot be saved.
pub(crate) fn run_brands(config: &AppConfig, command: &BrandsCommands) -> anyhow::Result<()> {
    let path = &config.brands_path;
    let file = load_brands(path)?;

    match command {
        BrandsCommands::List => {
            for brand in &file.brands {
                println!(
                    "{}\t{}\t{} keywords\t{} style attributes",
                    brand.id,
                    brand.name,
                    brand.keywords.len(),
                    brand.style_attributes.len()
                );
            }
        }
        BrandsCommands::Validate => {
            println!("{}: {} brands OK", path.display(), file.brands.len());
        }
        BrandsCommands::Import => {
            let store = FileBrandStore::new(config.brand_store_dir());
            for brand in &file.brands {
                store.save(brand)?;
                tracing::info!(brand = %brand.id, dir = %store.dir().display(), "saved brand");
            }
            println!("imported {} brands into {}", file.brands.len(), store.dir().display());
        }
    }
    Ok(())
}
