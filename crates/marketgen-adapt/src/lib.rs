//! Platform adaptation for marketing content.
//!
//! A [`ContentItem`](marketgen_core::ContentItem) is reshaped for each target
//! platform by a table-driven [`PlatformSpec`]: text is shortened at natural
//! boundaries by the [`Truncator`], hashtags are merged and capped by the
//! [`HashtagReconciler`], and every step returns a new item together with
//! advisory metadata. The [`AdaptationOrchestrator`] fans one item out to many
//! platforms, synchronously or on the blocking pool.

pub mod error;
pub mod hashtags;
pub mod orchestrator;
pub mod platforms;
pub mod signals;
pub mod truncate;
pub mod types;

pub use error::AdaptError;
pub use hashtags::{HashtagReconciler, Reconciled, ReflowPolicy};
pub use orchestrator::AdaptationOrchestrator;
pub use platforms::{AdapterRegistry, PlatformSpec};
pub use truncate::{truncate, Truncator, DEFAULT_MARKER};
pub use types::{
    AdaptationMetadata, AdaptationResult, ContentStats, DurationClass, Format, LimitFlags,
    Priority, Recommendation, RecommendationKind, VideoInsights,
};
