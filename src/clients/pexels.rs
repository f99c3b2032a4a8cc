use reqwest::{Client, StatusCode, header::AUTHORIZATION};
use serde::Deserialize;
use tracing::info;

use super::{ImageProvider, ProviderError};

const PEXELS_API: &str = "https://api.pexels.com/v1";

/// Pexels caps `per_page` at 80.
const MAX_PER_PAGE: usize = 80;

#[derive(Deserialize)]
struct SearchResponse {
    photos: Vec<Photo>,
}

#[derive(Deserialize)]
struct Photo {
    src: PhotoSrc,
}

#[derive(Deserialize)]
struct PhotoSrc {
    large: String,
}

/// Secondary image provider with a more generous rate limit than
/// Unsplash (200 requests/hour on the free tier).
#[derive(Clone)]
pub struct PexelsClient {
    client: Client,
    api_key: Option<String>,
}

impl PexelsClient {
    #[must_use]
    pub fn new(client: Client, api_key: Option<String>) -> Self {
        Self {
            client,
            api_key: api_key.filter(|k| !k.is_empty()),
        }
    }

    async fn search_photos(
        &self,
        query: &str,
        count: usize,
    ) -> Result<Vec<String>, ProviderError> {
        let Some(key) = &self.api_key else {
            return Err(ProviderError::Disabled);
        };

        let per_page = count.min(MAX_PER_PAGE).to_string();
        let response = self
            .client
            .get(format!("{PEXELS_API}/search"))
            .header(AUTHORIZATION, key.as_str())
            .query(&[
                ("query", query),
                ("per_page", per_page.as_str()),
                ("orientation", "landscape"),
                ("size", "large"),
            ])
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                let data: SearchResponse = response.json().await?;
                let urls: Vec<String> = data
                    .photos
                    .into_iter()
                    .map(|photo| photo.src.large)
                    .take(count)
                    .collect();

                info!("Pexels: found {} images for '{}'", urls.len(), query);
                Ok(urls)
            }
            StatusCode::TOO_MANY_REQUESTS => Err(ProviderError::RateLimited),
            StatusCode::UNAUTHORIZED => Err(ProviderError::InvalidKey),
            status => Err(ProviderError::Status(status)),
        }
    }
}

#[async_trait::async_trait]
impl ImageProvider for PexelsClient {
    fn name(&self) -> &'static str {
        "Pexels"
    }

    fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    async fn search(&self, query: &str, count: usize) -> Result<Vec<String>, ProviderError> {
        self.search_photos(query, count).await
    }
}
