pub mod sources;

use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub tmdb: TmdbConfig,
    pub trailer: TrailerConfig,
    pub catalog: CatalogConfig,
    pub gate: GateConfig,
    pub cors: CorsConfig,
    pub dev_mode: bool,
    pub metadata: ConfigMetadata,
}

impl Config {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Connection settings for the movie metadata provider.
#[derive(Debug, Clone)]
pub struct TmdbConfig {
    pub api_base: String,
    pub api_token: Option<String>,
    /// Language tag forwarded with every details request, e.g. `en-US`.
    pub language: Option<String>,
    pub request_timeout_secs: u64,
}

impl TmdbConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn has_token(&self) -> bool {
        self.api_token
            .as_deref()
            .is_some_and(|token| !token.trim().is_empty())
    }
}

#[derive(Debug, Clone)]
pub struct TrailerConfig {
    pub search_url: String,
}

#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Image locale kept by the locale filter (ISO 639-1).
    pub primary_locale: String,
    /// Region consulted for the certification (ISO 3166-1).
    pub reference_region: String,
}

#[derive(Debug, Clone)]
pub struct GateConfig {
    pub protected_routes: Vec<String>,
    pub public_routes: Vec<String>,
    pub excluded_pattern: String,
    pub login_path: String,
    pub home_path: String,
    pub session_cookie: String,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub allow_credentials: bool,
}

impl CorsConfig {
    pub fn is_wildcard_included(&self) -> bool {
        self.allowed_origins
            .iter()
            .any(|origin| origin.trim() == "*")
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}
