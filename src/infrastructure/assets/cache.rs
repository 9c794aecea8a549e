use std::path::PathBuf;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::warn;

/// A resolved image URL together with the time it was fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheRecord {
    pub url: String,
    pub fetched_at: DateTime<Utc>,
}

impl CacheRecord {
    /// Whether the record is still within its time-to-live.
    pub fn is_fresh(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        now - self.fetched_at < ttl
    }
}

/// Durable URL cache: one JSON record file per fingerprint under the cache
/// root. Expiry is logical (stale records stay on disk until overwritten)
/// and storage faults never surface to callers: reads degrade to a miss,
/// writes are dropped.
#[derive(Debug, Clone)]
pub struct UrlCache {
    root: PathBuf,
    ttl: Duration,
}

impl UrlCache {
    pub fn new(root: PathBuf, ttl: Duration) -> Self {
        Self { root, ttl }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Read the record stored under `key`, regardless of age. Callers must
    /// treat records older than the TTL as absent.
    pub async fn get(&self, key: &str) -> Option<CacheRecord> {
        let path = self.record_path(key);
        let contents = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
            Err(err) => {
                warn!(key, error = %err, "failed to read cache record");
                return None;
            }
        };

        match serde_json::from_str(&contents) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!(key, error = %err, "failed to parse cache record");
                None
            }
        }
    }

    /// Persist `url` under `key`, overwriting any previous record.
    pub async fn put(&self, key: &str, url: &str) {
        let record = CacheRecord {
            url: url.to_string(),
            fetched_at: Utc::now(),
        };
        if let Err(err) = self.write_record(key, &record).await {
            warn!(key, error = %err, "failed to write cache record");
        }
    }

    async fn write_record(&self, key: &str, record: &CacheRecord) -> anyhow::Result<()> {
        tokio::fs::create_dir_all(&self.root).await?;
        let contents = serde_json::to_string(record)?;
        tokio::fs::write(self.record_path(key), contents).await?;
        Ok(())
    }

    /// Path of the record file backing `key`.
    pub fn record_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

/// Deterministic cache key for a (category, width, height) triple: SHA-256
/// over the delimited triple, rendered as 64 lowercase hex characters.
pub fn fingerprint(category: &str, width: u32, height: u32) -> String {
    let digest = Sha256::digest(format!("{category}_{width}_{height}"));
    hex::encode(digest)
}
