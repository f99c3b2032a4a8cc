//! Concurrent image fetching with caching and provider fallback.

use std::sync::Arc;
use std::time::Duration;

use futures::future;
use tracing::{debug, error, warn};

use crate::cache::ResponseCache;
use crate::clients::ImageProvider;
use crate::services::placeholder::placeholder_urls;

/// Fetches image URL lists for search queries, trying the cache first,
/// then each provider in configured order, then placeholders.
///
/// A batch fans out one task per query and joins them all; per-query
/// failures are absorbed so one bad query never disturbs its siblings.
///
/// Cloning is cheap (the provider list and cache are shared handles),
/// which is what lets each batch task carry its own copy.
#[derive(Clone)]
pub struct ImageFetchService {
    providers: Vec<Arc<dyn ImageProvider>>,
    cache: Arc<ResponseCache<Vec<String>>>,
    image_ttl: Duration,
}

impl ImageFetchService {
    #[must_use]
    pub const fn new(
        providers: Vec<Arc<dyn ImageProvider>>,
        cache: Arc<ResponseCache<Vec<String>>>,
        image_ttl: Duration,
    ) -> Self {
        Self {
            providers,
            cache,
            image_ttl,
        }
    }

    /// Fetches images for every query concurrently. The result list has
    /// the same length and order as `queries`; a query whose task died
    /// unexpectedly gets an empty slot.
    pub async fn fetch_all(&self, queries: Vec<String>, count_per_query: usize) -> Vec<Vec<String>> {
        debug!("Batch fetching images for {} queries", queries.len());

        let handles: Vec<_> = queries
            .into_iter()
            .map(|query| {
                let service = self.clone();
                tokio::spawn(async move { service.fetch_for_query(&query, count_per_query).await })
            })
            .collect();

        future::join_all(handles)
            .await
            .into_iter()
            .map(|joined| {
                joined.unwrap_or_else(|e| {
                    error!("Image fetch task failed: {e}");
                    Vec::new()
                })
            })
            .collect()
    }

    /// Fetch flow for one query: cache -> provider chain -> placeholders.
    ///
    /// The first provider returning a non-empty result wins and is
    /// cached. A provider returning fewer images than requested is not
    /// topped up from the next one; the caller gets what was found.
    pub async fn fetch_for_query(&self, query: &str, count: usize) -> Vec<String> {
        let cache_key = format!("images:{query}:{count}");

        if let Some(cached) = self.cache.get(&cache_key) {
            debug!("Cache hit for '{query}'");
            return cached;
        }

        for provider in &self.providers {
            if !provider.is_enabled() {
                continue;
            }

            let urls = provider.fetch(query, count).await;
            if !urls.is_empty() {
                self.cache.insert(cache_key, urls.clone(), self.image_ttl);
                return urls;
            }
        }

        warn!("No images found for '{query}', using placeholders");
        placeholder_urls(query, count)
    }

    /// Shared cache handle, exposed for monitoring and cache management.
    #[must_use]
    pub fn cache(&self) -> &ResponseCache<Vec<String>> {
        &self.cache
    }

    /// Provider names paired with their enabled state, in fallback order.
    #[must_use]
    pub fn provider_status(&self) -> Vec<(&'static str, bool)> {
        self.providers
            .iter()
            .map(|p| (p.name(), p.is_enabled()))
            .collect()
    }
}
