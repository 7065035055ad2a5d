use marketgen_core::{ContentType, Platform};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AdaptError {
    /// The item declares a content type whose payload is absent.
    #[error("content item declares {expected} content but carries no {expected} payload")]
    MissingPayload { expected: ContentType },

    /// No adapter is registered; the generic fallback handled the item.
    #[error("no dedicated adapter for platform '{platform}'")]
    UnsupportedPlatform { platform: Platform },

    /// A concurrent platform task panicked or was cancelled.
    #[error("adaptation task for platform '{platform}' failed: {reason}")]
    TaskFailed { platform: Platform, reason: String },
}
