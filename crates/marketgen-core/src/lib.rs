pub mod app_config;
pub mod brands;
pub mod config;
pub mod content;
pub mod error;
pub mod platform;
pub mod store;

pub use app_config::{AppConfig, Environment, ReflowSetting, SentenceLengthSettings};
pub use brands::{load_brands, parse_brands, sanitize_id, BrandModel, BrandsFile, StyleAttribute};
pub use config::{load_app_config, load_app_config_from_env};
pub use content::{ContentItem, ImageContent, Payload, TextContent, VideoContent};
pub use error::{ConfigError, StoreError};
pub use platform::{ContentType, Platform};
pub use store::{BrandStore, CachedBrandStore, FileBrandStore};
