use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use hstweb::application::{ServerConfig, serve};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Professional services website with contextual imagery",
    long_about = None
)]
struct Cli {
    #[arg(long, env = "HSTWEB_BIND_ADDRESS", default_value = "127.0.0.1:8000")]
    bind_address: SocketAddr,

    /// Directory holding cached image URL records.
    #[arg(long, env = "HSTWEB_CACHE_DIR", default_value = "cache/images")]
    cache_dir: PathBuf,

    /// Unsplash API access key. When unset the search provider is skipped
    /// and imagery falls back to the secondary services.
    #[arg(long, env = "HSTWEB_UNSPLASH_ACCESS_KEY")]
    unsplash_access_key: Option<String>,

    #[arg(long, env = "HSTWEB_SMTP_HOST", default_value = "smtp.gmail.com")]
    smtp_host: String,

    #[arg(long, env = "HSTWEB_SMTP_PORT", default_value_t = 587)]
    smtp_port: u16,

    #[arg(long, env = "HSTWEB_SMTP_USERNAME")]
    smtp_username: Option<String>,

    #[arg(long, env = "HSTWEB_SMTP_PASSWORD")]
    smtp_password: Option<String>,

    /// Staff address that receives contact form submissions.
    #[arg(long, env = "HSTWEB_CONTACT_EMAIL", default_value = "info@hst.ie")]
    contact_email: String,

    #[arg(long, env = "HSTWEB_CONTACT_PHONE", default_value = "+353 1 234 5678")]
    contact_phone: String,

    #[arg(long, env = "HSTWEB_COMPANY_ADDRESS", default_value = "Dublin, Ireland")]
    company_address: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (before clap parses env vars)
    let _ = dotenvy::dotenv();

    init_tracing();

    let cli = Cli::parse();

    let config = ServerConfig {
        bind_address: cli.bind_address,
        cache_dir: cli.cache_dir,
        unsplash_access_key: cli.unsplash_access_key,
        smtp_host: cli.smtp_host,
        smtp_port: cli.smtp_port,
        smtp_username: cli.smtp_username,
        smtp_password: cli.smtp_password,
        contact_email: cli.contact_email,
        contact_phone: cli.contact_phone,
        company_address: cli.company_address,
    };

    serve(config).await
}

#[allow(clippy::expect_used)] // Startup: panicking is appropriate if logging cannot be initialized
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var("RUST_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().compact())
            .init();
    }
}
