use reqwest::{Client, StatusCode, header::AUTHORIZATION};
use serde::Deserialize;
use tracing::info;

use super::{ImageProvider, ProviderError};

const UNSPLASH_API: &str = "https://api.unsplash.com";

/// Unsplash caps `per_page` at 30.
const MAX_PER_PAGE: usize = 30;

#[derive(Deserialize)]
struct SearchResponse {
    results: Vec<Photo>,
}

#[derive(Deserialize)]
struct Photo {
    urls: PhotoUrls,
}

#[derive(Deserialize)]
struct PhotoUrls {
    /// Good quality without the full-resolution payload.
    regular: String,
}

/// Primary image provider. High-quality travel photography, but a tight
/// free-tier rate limit (50 requests/hour).
#[derive(Clone)]
pub struct UnsplashClient {
    client: Client,
    access_key: Option<String>,
}

impl UnsplashClient {
    #[must_use]
    pub fn new(client: Client, access_key: Option<String>) -> Self {
        Self {
            client,
            access_key: access_key.filter(|k| !k.is_empty()),
        }
    }

    async fn search_photos(
        &self,
        query: &str,
        count: usize,
    ) -> Result<Vec<String>, ProviderError> {
        let Some(key) = &self.access_key else {
            return Err(ProviderError::Disabled);
        };

        let per_page = count.min(MAX_PER_PAGE).to_string();
        let response = self
            .client
            .get(format!("{UNSPLASH_API}/search/photos"))
            .header(AUTHORIZATION, format!("Client-ID {key}"))
            .query(&[
                ("query", query),
                ("per_page", per_page.as_str()),
                ("orientation", "landscape"),
                ("content_filter", "high"),
                ("order_by", "relevant"),
            ])
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                let data: SearchResponse = response.json().await?;
                let urls: Vec<String> = data
                    .results
                    .into_iter()
                    .map(|photo| photo.urls.regular)
                    .take(count)
                    .collect();

                info!("Unsplash: found {} images for '{}'", urls.len(), query);
                Ok(urls)
            }
            StatusCode::FORBIDDEN => Err(ProviderError::RateLimited),
            StatusCode::UNAUTHORIZED => Err(ProviderError::InvalidKey),
            status => Err(ProviderError::Status(status)),
        }
    }
}

#[async_trait::async_trait]
impl ImageProvider for UnsplashClient {
    fn name(&self) -> &'static str {
        "Unsplash"
    }

    fn is_enabled(&self) -> bool {
        self.access_key.is_some()
    }

    async fn search(&self, query: &str, count: usize) -> Result<Vec<String>, ProviderError> {
        self.search_photos(query, count).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_key_disables_the_provider_without_a_network_call() {
        let client = UnsplashClient::new(Client::new(), None);

        assert!(!client.is_enabled());
        assert!(matches!(
            client.search("paris", 4).await,
            Err(ProviderError::Disabled)
        ));
        // The absorbing fetch path collapses that to an empty result.
        assert!(client.fetch("paris", 4).await.is_empty());
    }

    #[tokio::test]
    async fn empty_key_counts_as_missing() {
        let client = UnsplashClient::new(Client::new(), Some(String::new()));
        assert!(!client.is_enabled());
    }
}
