pub mod cache;
pub mod placeholder;
pub mod providers;

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{debug, warn};

use crate::domain::categories::keywords_for;
use self::cache::{UrlCache, fingerprint};
use self::placeholder::placeholder_ref;
use self::providers::{
    ImageProvider, ImageRequest, KeywordRedirectProvider, RandomImageProvider, SearchProvider,
};

pub const SEARCH_BASE_URL: &str = "https://api.unsplash.com";
pub const REDIRECT_BASE_URL: &str = "https://source.unsplash.com";
pub const RANDOM_BASE_URL: &str = "https://picsum.photos";

/// Everything that varies between production and test environments: cache
/// location and TTL, provider endpoints, and the search API credential.
#[derive(Debug, Clone)]
pub struct AssetConfig {
    pub cache_dir: PathBuf,
    pub cache_ttl: Duration,
    pub search_base_url: String,
    pub search_access_key: Option<String>,
    pub redirect_base_url: String,
    pub random_base_url: String,
}

impl AssetConfig {
    /// Production defaults for the given cache directory and credential.
    pub fn new(cache_dir: PathBuf, search_access_key: Option<String>) -> Self {
        Self {
            cache_dir,
            cache_ttl: Duration::hours(24),
            search_base_url: SEARCH_BASE_URL.to_string(),
            search_access_key,
            redirect_base_url: REDIRECT_BASE_URL.to_string(),
            random_base_url: RANDOM_BASE_URL.to_string(),
        }
    }
}

/// Resolves semantic image categories to usable URLs via a durable cache and
/// an ordered provider chain.
///
/// `resolve` never fails: a provider or cache malfunction degrades to the
/// next source, terminating at the local placeholder reference.
#[derive(Clone)]
pub struct AssetManager {
    inner: Arc<Inner>,
}

struct Inner {
    cache: UrlCache,
    providers: Vec<Arc<dyn ImageProvider>>,
}

impl AssetManager {
    /// Build the production provider chain from config and a shared client.
    pub fn new(config: AssetConfig, client: reqwest::Client) -> Self {
        let providers: Vec<Arc<dyn ImageProvider>> = vec![
            Arc::new(SearchProvider::new(
                client.clone(),
                config.search_base_url,
                config.search_access_key,
            )),
            Arc::new(KeywordRedirectProvider::new(client, config.redirect_base_url)),
            Arc::new(RandomImageProvider::new(config.random_base_url)),
        ];

        Self::with_providers(UrlCache::new(config.cache_dir, config.cache_ttl), providers)
    }

    /// Build from an explicit provider chain. Test seam: lets callers inject
    /// stub providers without any network configuration.
    pub fn with_providers(cache: UrlCache, providers: Vec<Arc<dyn ImageProvider>>) -> Self {
        Self {
            inner: Arc::new(Inner { cache, providers }),
        }
    }

    /// Resolve one category to an image URL.
    ///
    /// A cached URL within its TTL is returned without network activity.
    /// Otherwise the providers are walked in order and the first hit is
    /// cached and returned. Placeholder results are never cached, so a later
    /// call retries the providers instead of being pinned to the placeholder.
    pub async fn resolve(&self, category: &str, width: u32, height: u32) -> String {
        let key = fingerprint(category, width, height);

        if let Some(record) = self.inner.cache.get(&key).await
            && record.is_fresh(self.inner.cache.ttl(), Utc::now())
        {
            debug!(category, key = key.as_str(), "image cache hit");
            return record.url;
        }

        let request = ImageRequest {
            category: category.to_string(),
            keywords: keywords_for(category),
            width,
            height,
        };

        for provider in &self.inner.providers {
            if let Some(url) = provider.fetch(&request).await {
                debug!(category, provider = provider.name(), "image resolved");
                self.inner.cache.put(&key, &url).await;
                return url;
            }
        }

        warn!(category, "all image providers failed, serving placeholder");
        placeholder_ref(width, height)
    }

    /// Resolve a batch of categories concurrently, one task per category.
    ///
    /// Results preserve input order. A task that fails outright is logged and
    /// dropped from the output rather than aborting the batch; placeholder
    /// results are ordinary values and always included.
    pub async fn resolve_all(&self, categories: &[&str], width: u32, height: u32) -> Vec<String> {
        let handles: Vec<_> = categories
            .iter()
            .map(|category| {
                let manager = self.clone();
                let category = (*category).to_string();
                tokio::spawn(async move { manager.resolve(&category, width, height).await })
            })
            .collect();

        let results = futures::future::join_all(handles).await;

        let mut urls = Vec::with_capacity(categories.len());
        for (result, category) in results.into_iter().zip(categories.iter().copied()) {
            match result {
                Ok(url) => urls.push(url),
                Err(err) => warn!(category, error = %err, "image resolution task failed"),
            }
        }
        urls
    }
}
