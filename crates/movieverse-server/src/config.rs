//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Server Configuration Constants
// ============================================================================

/// Default server host binding.
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

/// Default server port.
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Default shutdown timeout in seconds.
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;

/// Default directory holding the static client.
pub const DEFAULT_STATIC_DIR: &str = "web";

// ============================================================================
// Upstream Service Constants
// ============================================================================

/// TMDB v3 API root.
pub const DEFAULT_CATALOG_BASE_URL: &str = "https://api.themoviedb.org/3";

/// TMDB image CDN root; a size segment such as `w500` is appended per image.
pub const DEFAULT_CATALOG_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Table that stores user reviews in the backend data API.
pub const DEFAULT_REVIEWS_TABLE: &str = "reviews";

/// Default timeout for outbound requests in seconds.
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 15;

/// Default CORS allowed origin for local development.
pub const DEFAULT_CORS_ALLOWED_ORIGIN: &str = "http://localhost:5173";

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub backend: BackendConfig,
    pub cors: CorsConfig,
}

/// Server-specific configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub shutdown_timeout_secs: u64,
    pub static_dir: PathBuf,
}

/// Movie catalog (TMDB) configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub base_url: String,
    pub image_base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

/// Backend-as-a-service (auth + review store) configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    pub url: String,
    pub anon_key: String,
    pub reviews_table: String,
    pub timeout_secs: u64,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allow_credentials: bool,
}

impl std::fmt::Debug for CatalogConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogConfig")
            .field("base_url", &self.base_url)
            .field("image_base_url", &self.image_base_url)
            .field("api_key", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendConfig")
            .field("url", &self.url)
            .field("anon_key", &"<redacted>")
            .field("reviews_table", &self.reviews_table)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Config {
    /// Load configuration from `.env`, the environment, and defaults
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup and validate it
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let config = Config {
            server: ServerConfig {
                host: lookup("MOVIEVERSE_HOST").unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
                port: parse_var(&lookup, "MOVIEVERSE_PORT")?.unwrap_or(DEFAULT_SERVER_PORT),
                shutdown_timeout_secs: parse_var(&lookup, "MOVIEVERSE_SHUTDOWN_TIMEOUT")?
                    .unwrap_or(DEFAULT_SHUTDOWN_TIMEOUT_SECS),
                static_dir: lookup("MOVIEVERSE_STATIC_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            },
            catalog: CatalogConfig {
                base_url: lookup("TMDB_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_CATALOG_BASE_URL.to_string()),
                image_base_url: lookup("TMDB_IMAGE_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_CATALOG_IMAGE_BASE_URL.to_string()),
                api_key: lookup("TMDB_API_KEY").unwrap_or_default(),
                timeout_secs: parse_var(&lookup, "TMDB_TIMEOUT_SECS")?.unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_SECS),
            },
            backend: BackendConfig {
                url: lookup("SUPABASE_URL").unwrap_or_default(),
                anon_key: lookup("SUPABASE_ANON_KEY").unwrap_or_default(),
                reviews_table: lookup("SUPABASE_REVIEWS_TABLE")
                    .unwrap_or_else(|| DEFAULT_REVIEWS_TABLE.to_string()),
                timeout_secs: parse_var(&lookup, "SUPABASE_TIMEOUT_SECS")?
                    .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_SECS),
            },
            cors: CorsConfig {
                allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                    .unwrap_or_else(|| DEFAULT_CORS_ALLOWED_ORIGIN.to_string())
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
                allow_credentials: parse_var(&lookup, "CORS_ALLOW_CREDENTIALS")?.unwrap_or(false),
            },
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server.port == 0 {
            anyhow::bail!("Server port must be greater than 0");
        }

        if self.catalog.api_key.trim().is_empty() {
            anyhow::bail!("TMDB_API_KEY must be set");
        }
        validate_base_url("TMDB_BASE_URL", &self.catalog.base_url)?;
        validate_base_url("TMDB_IMAGE_BASE_URL", &self.catalog.image_base_url)?;

        validate_base_url("SUPABASE_URL", &self.backend.url)?;
        if self.backend.anon_key.trim().is_empty() {
            anyhow::bail!("SUPABASE_ANON_KEY must be set");
        }
        if self.backend.reviews_table.trim().is_empty() {
            anyhow::bail!("SUPABASE_REVIEWS_TABLE cannot be empty");
        }

        let any_origin =
            self.cors.allowed_origins.is_empty() || self.cors.allowed_origins.iter().any(|o| o == "*");
        if self.cors.allow_credentials && any_origin {
            anyhow::bail!("CORS credentials cannot be combined with a wildcard origin");
        }
        if self.cors.allowed_origins.is_empty() {
            tracing::warn!("No CORS origins configured - all origins will be allowed");
        }

        if !self.server.static_dir.is_dir() {
            tracing::warn!(
                static_dir = %self.server.static_dir.display(),
                "Static client directory not found - only the JSON API will be served"
            );
        }

        Ok(())
    }
}

/// Parses a set variable. Blank counts as unset; anything else must parse.
fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> anyhow::Result<Option<T>> {
    let Some(raw) = lookup(key).filter(|s| !s.trim().is_empty()) else {
        return Ok(None);
    };
    match raw.trim().parse() {
        Ok(value) => Ok(Some(value)),
        Err(_) => anyhow::bail!("{} has an invalid value '{}'", key, raw),
    }
}

fn validate_base_url(name: &str, url: &str) -> anyhow::Result<()> {
    if url.trim().is_empty() {
        anyhow::bail!("{} must be set", name);
    }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        anyhow::bail!("{} must start with http:// or https://, got '{}'", name, url);
    }
    Ok(())
}
