//! MovieVerse Server - Main entry point

use anyhow::Result;
use movieverse_common::logging::{init_logging, LogConfig};
use tracing::info;

use movieverse_server::{api, config::Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Make `.env` values visible to the logging setup as well
    dotenvy::dotenv().ok();

    let mut log_config = LogConfig::builder()
        .log_file_prefix("movieverse-server".to_string())
        .filter_directives("movieverse_server=debug,tower_http=debug,reqwest=info".to_string())
        .build();

    // Environment variables take precedence
    log_config.apply_lookup(|key| std::env::var(key).ok())?;

    let _guard = init_logging(&log_config)?;

    info!("Starting MovieVerse server");

    let config = Config::load()?;
    info!(
        catalog = %config.catalog.base_url,
        backend = %config.backend.url,
        static_dir = %config.server.static_dir.display(),
        "Configuration loaded - server will bind to {}:{}",
        config.server.host,
        config.server.port
    );

    api::serve(config).await
}
