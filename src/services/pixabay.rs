use anyhow::Result;
use serde::Deserialize;

use crate::config::AppConfig;

#[derive(Debug, Deserialize)]
pub struct PixabayResponse {
    #[serde(rename = "totalHits")]
    pub total_hits: u64,
    #[serde(default)]
    pub hits: Vec<PixabayHit>,
}

#[derive(Debug, Deserialize)]
pub struct PixabayHit {
    /// Medium sized image, at most 640px wide
    #[serde(rename = "webformatURL")]
    pub webformat_url: String,
}

/// What came back from a search that reached the API
#[derive(Debug)]
pub enum SearchOutcome {
    Hits(PixabayResponse),
    Status(u16),
}

/// Pixabay image search API client
pub struct PixabayClient {
    api_key: Option<String>,
    base_url: String,
    client: reqwest::Client,
}

impl PixabayClient {
    pub fn new(api_key: Option<String>, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.image_api_key.clone(), config.image_api_url.clone())
    }

    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}?key={}&q={}&image_type=photo&category=food&per_page=5&safesearch=true",
            self.base_url,
            urlencoding::encode(self.api_key.as_deref().unwrap_or_default()),
            urlencoding::encode(query)
        )
    }

    /// Food photos matching `query`. Only a 200 is treated as a search result.
    pub async fn search(&self, query: &str) -> Result<SearchOutcome> {
        if self.api_key.is_none() {
            log::warn!("⚠️ PIXABAY_API_KEY not found, requesting images without a key");
        }

        let url = self.search_url(query);
        log::debug!("🔎 Pixabay search: q={}", query);

        // reqwest errors embed the URL, and the URL carries the API key.
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| e.without_url())?;
        let status = response.status();
        log::debug!("📥 Pixabay response status: {}", status);

        if status != reqwest::StatusCode::OK {
            return Ok(SearchOutcome::Status(status.as_u16()));
        }

        let data: PixabayResponse = response.json().await.map_err(|e| e.without_url())?;
        log::debug!("🖼️ Pixabay returned {} total hits", data.total_hits);
        Ok(SearchOutcome::Hits(data))
    }
}
