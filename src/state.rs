use std::sync::Arc;
use std::time::Duration;

use crate::cache::ResponseCache;
use crate::clients::{ImageProvider, PexelsClient, UnsplashClient};
use crate::config::Config;
use crate::services::{EnrichmentService, ImageFetchService};

/// Build a shared HTTP client with reasonable defaults for API calls.
/// This client is reused across all provider adapters to enable
/// connection pooling, and enforces the per-call timeout.
fn build_shared_http_client(timeout_seconds: u64) -> anyhow::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .user_agent("Wayfarr/1.0")
        .pool_max_idle_per_host(10)
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build shared HTTP client: {e}"))
}

#[derive(Clone)]
pub struct SharedState {
    pub config: Config,

    pub image_cache: Arc<ResponseCache<Vec<String>>>,

    pub fetcher: Arc<ImageFetchService>,

    pub enrichment: Arc<EnrichmentService>,
}

impl SharedState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let http_client =
            build_shared_http_client(config.providers.request_timeout_seconds.into())?;

        let unsplash = UnsplashClient::new(
            http_client.clone(),
            config.providers.unsplash.access_key.clone(),
        );
        let pexels = PexelsClient::new(http_client, config.providers.pexels.api_key.clone());

        // Fallback order: primary first. Adding a provider here is the
        // only change needed to extend the chain.
        let providers: Vec<Arc<dyn ImageProvider>> = vec![Arc::new(unsplash), Arc::new(pexels)];

        let image_cache = Arc::new(ResponseCache::new(
            config.cache.max_entries,
            config.cache.evict_batch,
        ));

        let fetcher = Arc::new(ImageFetchService::new(
            providers,
            image_cache.clone(),
            Duration::from_secs(config.cache.image_ttl_hours * 3600),
        ));

        let enrichment = Arc::new(EnrichmentService::new(
            fetcher.clone(),
            config.enrichment.images_per_destination,
            config.enrichment.images_per_activity,
        ));

        Ok(Self {
            config,
            image_cache,
            fetcher,
            enrichment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_wires_up_from_default_config() {
        let state = SharedState::new(Config::default()).unwrap();

        // No credentials configured: both providers present but disabled.
        let status = state.fetcher.provider_status();
        assert_eq!(status.len(), 2);
        assert_eq!(status[0], ("Unsplash", false));
        assert_eq!(status[1], ("Pexels", false));
        assert!(state.image_cache.is_empty());
    }

    #[test]
    fn configured_keys_enable_the_providers() {
        let mut config = Config::default();
        config.providers.unsplash.access_key = Some("uk-test".to_string());
        config.providers.pexels.api_key = Some("pk-test".to_string());

        let state = SharedState::new(config).unwrap();
        let status = state.fetcher.provider_status();
        assert_eq!(status[0], ("Unsplash", true));
        assert_eq!(status[1], ("Pexels", true));
    }
}
