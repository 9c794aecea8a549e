use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use crate::application::routes::app_router;
use crate::application::state::{AppState, AppStateConfig, SiteConfig};
use crate::infrastructure::assets::AssetConfig;
use crate::infrastructure::mailer::MailerConfig;

pub struct ServerConfig {
    pub bind_address: SocketAddr,
    pub cache_dir: PathBuf,
    pub unsplash_access_key: Option<String>,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: Option<String>,
    pub smtp_password: Option<String>,
    pub contact_email: String,
    pub contact_phone: String,
    pub company_address: String,
}

pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let state = AppState::from_config(AppStateConfig {
        assets: AssetConfig::new(config.cache_dir.clone(), config.unsplash_access_key),
        mailer: MailerConfig {
            smtp_host: config.smtp_host,
            smtp_port: config.smtp_port,
            smtp_username: config.smtp_username,
            smtp_password: config.smtp_password,
            contact_email: config.contact_email.clone(),
        },
        site: SiteConfig {
            site_name: "HST Professional Services".to_string(),
            site_description: "Leading technology consulting and professional services"
                .to_string(),
            contact_email: config.contact_email,
            contact_phone: config.contact_phone,
            company_address: config.company_address,
        },
    })
    .context("failed to build application state")?;

    let listener = TcpListener::bind(config.bind_address)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_address))?;

    let app = app_router(state);

    info!(
        address = %config.bind_address,
        cache_dir = %config.cache_dir.display(),
        "starting HTTP server"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;

    info!("server shutdown complete");

    Ok(())
}

#[allow(clippy::expect_used)] // Startup: panicking is appropriate if signal handlers fail
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
