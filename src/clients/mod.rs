pub mod pexels;
pub mod unsplash;

pub use pexels::PexelsClient;
pub use unsplash::UnsplashClient;

use thiserror::Error;
use tracing::{debug, error, warn};

/// Failures a provider call can hit. Every variant is absorbed into an
/// empty result at the [`ImageProvider::fetch`] boundary so the fallback
/// chain can move on to the next provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("missing credentials")]
    Disabled,

    #[error("rate limit exceeded")]
    RateLimited,

    #[error("invalid API key")]
    InvalidKey,

    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),

    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

/// A single external image-search API behind a uniform interface.
///
/// Providers are tried in configured order by the fetch service; a
/// disabled or failing provider yields an empty result rather than an
/// error, so adding another provider never touches orchestration logic.
#[async_trait::async_trait]
pub trait ImageProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// False when the provider has no credentials configured.
    fn is_enabled(&self) -> bool;

    /// Raw search call. Returns up to `count` image URLs in relevance
    /// order, or the error that stopped the call.
    async fn search(&self, query: &str, count: usize) -> Result<Vec<String>, ProviderError>;

    /// Search with every failure absorbed into an empty result. Errors
    /// are logged at a severity matching their kind and never propagated.
    async fn fetch(&self, query: &str, count: usize) -> Vec<String> {
        match self.search(query, count).await {
            Ok(urls) => urls,
            Err(ProviderError::Disabled) => {
                debug!("{} disabled, skipping", self.name());
                Vec::new()
            }
            Err(ProviderError::RateLimited) => {
                warn!("{} rate limit exceeded", self.name());
                Vec::new()
            }
            Err(ProviderError::InvalidKey) => {
                error!("{} API key invalid", self.name());
                Vec::new()
            }
            Err(ProviderError::Request(e)) if e.is_timeout() => {
                warn!(query, "{} request timed out", self.name());
                Vec::new()
            }
            Err(e) => {
                warn!("{} error: {}", self.name(), e);
                Vec::new()
            }
        }
    }
}
