use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

const SEARCH_TIMEOUT: Duration = Duration::from_secs(10);
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// One image lookup as seen by the provider chain.
#[derive(Debug, Clone)]
pub struct ImageRequest {
    pub category: String,
    /// Search keywords in relevance order; never empty.
    pub keywords: Vec<String>,
    pub width: u32,
    pub height: u32,
}

/// An external image source consulted in priority order.
///
/// Every failure mode (timeout, connection error, non-success status,
/// malformed payload) maps to `None`; the chain walker falls through to the
/// next source instead of propagating errors.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn fetch(&self, request: &ImageRequest) -> Option<String>;
}

/// Keyword search against a photo search API, taking the single most relevant
/// landscape result and composing a direct asset URL with a center-crop
/// directive. Skipped without a network call when no access key is
/// configured.
pub struct SearchProvider {
    client: reqwest::Client,
    base_url: String,
    access_key: Option<String>,
}

impl SearchProvider {
    pub fn new(client: reqwest::Client, base_url: String, access_key: Option<String>) -> Self {
        Self {
            client,
            base_url,
            access_key,
        }
    }

    fn configured_key(&self) -> Option<&str> {
        self.access_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    urls: SearchResultUrls,
}

#[derive(Debug, Deserialize)]
struct SearchResultUrls {
    raw: String,
}

#[async_trait]
impl ImageProvider for SearchProvider {
    fn name(&self) -> &'static str {
        "search"
    }

    async fn fetch(&self, request: &ImageRequest) -> Option<String> {
        let category = request.category.as_str();

        let Some(key) = self.configured_key() else {
            debug!(category, "no search API key configured, skipping search provider");
            return None;
        };

        let query = request.keywords.join(" ");
        let response = match self
            .client
            .get(format!("{}/search/photos", self.base_url))
            .header("Authorization", format!("Client-ID {key}"))
            .query(&[
                ("query", query.as_str()),
                ("orientation", "landscape"),
                ("per_page", "1"),
                ("order_by", "relevant"),
            ])
            .timeout(SEARCH_TIMEOUT)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                warn!(category, error = %err, "photo search request failed");
                return None;
            }
        };

        if !response.status().is_success() {
            warn!(category, status = %response.status(), "photo search returned non-success");
            return None;
        }

        let payload: SearchResponse = match response.json().await {
            Ok(payload) => payload,
            Err(err) => {
                warn!(category, error = %err, "failed to parse photo search response");
                return None;
            }
        };

        let photo = payload.results.into_iter().next()?;
        Some(format!(
            "{}&w={}&h={}&fit=crop&crop=center",
            photo.urls.raw, request.width, request.height
        ))
    }
}

/// Templated URL against a redirect-based image service, embedding the
/// primary keyword. The URL is only returned after a lightweight HEAD
/// existence check succeeds.
pub struct KeywordRedirectProvider {
    client: reqwest::Client,
    base_url: String,
}

impl KeywordRedirectProvider {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl ImageProvider for KeywordRedirectProvider {
    fn name(&self) -> &'static str {
        "keyword-redirect"
    }

    async fn fetch(&self, request: &ImageRequest) -> Option<String> {
        let category = request.category.as_str();

        let keyword = request.keywords.first()?.replace(' ', "-");
        let url = format!(
            "{}/{}x{}/?{}",
            self.base_url, request.width, request.height, keyword
        );

        match self.client.head(&url).timeout(PROBE_TIMEOUT).send().await {
            Ok(response) if response.status().is_success() => Some(url),
            Ok(response) => {
                debug!(category, status = %response.status(), "redirect image probe returned non-success");
                None
            }
            Err(err) => {
                warn!(category, error = %err, "redirect image probe failed");
                None
            }
        }
    }
}

/// Random-image service parameterized by a deterministic per-category seed,
/// so repeated lookups for one category land on the same slot. The URL is
/// constructed without a request; this is the terminal network fallback.
pub struct RandomImageProvider {
    base_url: String,
}

impl RandomImageProvider {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }
}

#[async_trait]
impl ImageProvider for RandomImageProvider {
    fn name(&self) -> &'static str {
        "random"
    }

    async fn fetch(&self, request: &ImageRequest) -> Option<String> {
        Some(format!(
            "{}/{}/{}?random={}",
            self.base_url,
            request.width,
            request.height,
            category_seed(&request.category)
        ))
    }
}

/// Stable per-category seed in `0..1000`, derived from the leading bytes of a
/// SHA-256 digest so the value does not vary across runs or platforms.
pub fn category_seed(category: &str) -> u64 {
    let digest = Sha256::digest(category.as_bytes());
    digest
        .iter()
        .take(8)
        .fold(0u64, |acc, byte| (acc << 8) | u64::from(*byte))
        % 1000
}
