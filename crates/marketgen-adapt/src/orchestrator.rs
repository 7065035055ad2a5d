use std::collections::BTreeMap;
use std::sync::Arc;

use futures::stream::{self, Stream, StreamExt};
use marketgen_core::{AppConfig, ContentItem, Platform};

use crate::error::AdaptError;
use crate::platforms::AdapterRegistry;
use crate::types::AdaptationResult;

const DEFAULT_MAX_CONCURRENT: usize = 4;

/// Fans one content item out to many platforms.
///
/// Holds no adaptation rules of its own; every platform goes through the
/// registry, which falls back to the generic adapter for unknown platforms.
#[derive(Debug, Clone)]
pub struct AdaptationOrchestrator {
    registry: Arc<AdapterRegistry>,
    max_concurrent: usize,
}

impl Default for AdaptationOrchestrator {
    fn default() -> Self {
        Self::new(AdapterRegistry::standard())
    }
}

impl AdaptationOrchestrator {
    #[must_use]
    pub fn new(registry: AdapterRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
        }
    }

    /// Standard registry with the configured reflow overrides and concurrency.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        let registry = AdapterRegistry::standard().with_reflow_overrides(&config.reflow_overrides);
        Self::new(registry).with_max_concurrent(config.max_concurrent_platforms)
    }

    /// Cap on platforms adapted at once by the async entry points; at least 1.
    #[must_use]
    pub fn with_max_concurrent(mut self, max_concurrent: usize) -> Self {
        self.max_concurrent = max_concurrent.max(1);
        self
    }

    #[must_use]
    pub fn registry(&self) -> &AdapterRegistry {
        &self.registry
    }

    #[must_use]
    pub fn max_concurrent(&self) -> usize {
        self.max_concurrent
    }

    #[must_use]
    pub fn adapt_one(&self, item: &ContentItem, platform: &Platform) -> AdaptationResult {
        self.registry.adapt(item, platform)
    }

    /// One result per distinct requested platform, adapted in turn.
    #[must_use]
    pub fn adapt(
        &self,
        item: &ContentItem,
        platforms: &[Platform],
    ) -> BTreeMap<Platform, AdaptationResult> {
        unique(platforms)
            .into_iter()
            .map(|platform| {
                let result = self.adapt_one(item, &platform);
                (platform, result)
            })
            .collect()
    }

    /// Same results as [`adapt`](Self::adapt), with platforms adapted on the
    /// blocking pool, at most `max_concurrent` at a time.
    ///
    /// A platform task that panics yields a failed result for that platform
    /// only.
    pub async fn adapt_concurrently(
        &self,
        item: &ContentItem,
        platforms: &[Platform],
    ) -> BTreeMap<Platform, AdaptationResult> {
        self.adapt_stream(item, platforms).collect().await
    }

    /// Yields each `(platform, result)` as soon as it is ready.
    ///
    /// Dropping the stream stops platforms that have not started yet.
    pub fn adapt_stream(
        &self,
        item: &ContentItem,
        platforms: &[Platform],
    ) -> impl Stream<Item = (Platform, AdaptationResult)> + Send + 'static {
        let item = Arc::new(item.clone());
        let registry = Arc::clone(&self.registry);

        stream::iter(unique(platforms))
            .map(move |platform| {
                let registry = Arc::clone(&registry);
                let item = Arc::clone(&item);
                async move {
                    let task_item = Arc::clone(&item);
                    let task_platform = platform.clone();
                    let joined = tokio::task::spawn_blocking(move || {
                        registry.adapt(&task_item, &task_platform)
                    })
                    .await;

                    let result = match joined {
                        Ok(result) => result,
                        Err(e) => {
                            tracing::error!(
                                platform = %platform,
                                error = %e,
                                "platform adaptation task failed"
                            );
                            AdaptationResult::failed(
                                platform.clone(),
                                (*item).clone(),
                                AdaptError::TaskFailed {
                                    platform: platform.clone(),
                                    reason: e.to_string(),
                                },
                            )
                        }
                    };
                    (platform, result)
                }
            })
            .buffer_unordered(self.max_concurrent)
    }
}

/// Requested platforms without repeats, first occurrence kept.
fn unique(platforms: &[Platform]) -> Vec<Platform> {
    let mut out: Vec<Platform> = Vec::with_capacity(platforms.len());
    for platform in platforms {
        if !out.contains(platform) {
            out.push(platform.clone());
        }
    }
    out
}
