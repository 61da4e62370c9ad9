use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::util::{non_empty, parse_bool, parse_csv};

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    #[serde(default)]
    pub server: FileServerConfig,
    #[serde(default)]
    pub tmdb: FileTmdbConfig,
    #[serde(default)]
    pub trailer: FileTrailerConfig,
    #[serde(default)]
    pub catalog: FileCatalogConfig,
    #[serde(default)]
    pub gate: FileGateConfig,
    #[serde(default)]
    pub cors: FileCorsConfig,
    pub dev_mode: Option<bool>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileServerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileTmdbConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileTrailerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_url: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileCatalogConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_region: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileGateConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protected_routes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_routes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_cookie: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileCorsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_origins: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_methods: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_headers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_credentials: Option<bool>,
}

/// Environment-derived configuration values.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub server_host: Option<String>,
    pub server_port: Option<u16>,
    pub tmdb_api_base: Option<String>,
    pub tmdb_api_token: Option<String>,
    pub tmdb_language: Option<String>,
    pub tmdb_timeout_secs: Option<u64>,
    pub trailer_search_url: Option<String>,
    pub primary_locale: Option<String>,
    pub reference_region: Option<String>,
    pub gate_protected_routes: Option<Vec<String>>,
    pub gate_public_routes: Option<Vec<String>>,
    pub gate_excluded_pattern: Option<String>,
    pub gate_login_path: Option<String>,
    pub gate_home_path: Option<String>,
    pub gate_session_cookie: Option<String>,
    pub cors_allowed_origins: Option<Vec<String>>,
    pub cors_allowed_methods: Option<Vec<String>>,
    pub cors_allowed_headers: Option<Vec<String>>,
    pub cors_allow_credentials: Option<bool>,
    pub dev_mode: Option<bool>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the environment view from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |name: &str| lookup(name).and_then(non_empty);
        let csv = |name: &str| lookup(name).map(|raw| parse_csv(&raw));
        let flag = |name: &str| lookup(name).and_then(|raw| parse_bool(&raw));

        Self {
            config_path: text("MARQUEE_CONFIG").map(PathBuf::from),
            server_host: text("SERVER_HOST"),
            server_port: text("SERVER_PORT").and_then(|s| s.parse().ok()),
            tmdb_api_base: text("TMDB_API_BASE"),
            tmdb_api_token: text("TMDB_API_TOKEN"),
            tmdb_language: text("TMDB_LANG"),
            tmdb_timeout_secs: text("TMDB_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok()),
            trailer_search_url: text("TRAILER_SEARCH_URL"),
            primary_locale: text("CATALOG_PRIMARY_LOCALE"),
            reference_region: text("CATALOG_REFERENCE_REGION"),

            gate_protected_routes: csv("GATE_PROTECTED_ROUTES"),
            gate_public_routes: csv("GATE_PUBLIC_ROUTES"),
            gate_excluded_pattern: text("GATE_EXCLUDED_PATTERN"),
            gate_login_path: text("GATE_LOGIN_PATH"),
            gate_home_path: text("GATE_HOME_PATH"),
            gate_session_cookie: text("GATE_SESSION_COOKIE"),

            cors_allowed_origins: csv("CORS_ALLOWED_ORIGINS"),
            cors_allowed_methods: csv("CORS_ALLOWED_METHODS"),
            cors_allowed_headers: csv("CORS_ALLOWED_HEADERS"),
            cors_allow_credentials: flag("CORS_ALLOW_CREDENTIALS"),

            dev_mode: flag("DEV_MODE"),
        }
    }
}
