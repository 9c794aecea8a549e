use std::sync::Arc;

use anyhow::Context;

use crate::infrastructure::assets::{AssetConfig, AssetManager};
use crate::infrastructure::mailer::{Mailer, MailerConfig};

/// Site identity and contact details rendered into every page.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub site_name: String,
    pub site_description: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub company_address: String,
}

/// Configuration for external services — everything that varies between
/// production and test environments. The asset manager and mailer are
/// created from it, so tests get fully isolated instances.
pub struct AppStateConfig {
    pub assets: AssetConfig,
    pub mailer: MailerConfig,
    pub site: SiteConfig,
}

#[derive(Clone)]
pub struct AppState {
    pub assets: AssetManager,
    pub mailer: Arc<Mailer>,
    pub site: Arc<SiteConfig>,
}

impl AppState {
    /// Build the full application state from config, creating the shared
    /// HTTP client, asset manager and mailer internally.
    pub fn from_config(config: AppStateConfig) -> anyhow::Result<Self> {
        let http_client = reqwest::ClientBuilder::new()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .context("failed to build HTTP client")?;

        let mailer =
            Mailer::from_config(&config.mailer).context("failed to configure SMTP transport")?;

        Ok(Self {
            assets: AssetManager::new(config.assets, http_client),
            mailer: Arc::new(mailer),
            site: Arc::new(config.site),
        })
    }
}
