use once_cell::sync::Lazy;
use std::{fs, path::PathBuf};
use thiserror::Error;

use crate::{
    constants::{
        DEFAULT_EXCLUDED_PATTERN, DEFAULT_HOME_PATH, DEFAULT_HOST,
        DEFAULT_LOGIN_PATH, DEFAULT_PORT, DEFAULT_PRIMARY_LOCALE,
        DEFAULT_PROTECTED_ROUTES, DEFAULT_PUBLIC_ROUTES,
        DEFAULT_REFERENCE_REGION, DEFAULT_SESSION_COOKIE,
        DEFAULT_TMDB_API_BASE, DEFAULT_TMDB_TIMEOUT_SECS,
        DEFAULT_TRAILER_SEARCH_URL,
    },
    models::{
        CatalogConfig, Config, ConfigMetadata, CorsConfig, GateConfig,
        ServerConfig, TmdbConfig, TrailerConfig,
        sources::{EnvConfig, FileConfig},
    },
    util::owned_list,
    validation::{self, ConfigGuardRailError, ConfigWarnings},
};

static DEFAULT_CONFIG_LOCATIONS: Lazy<Vec<PathBuf>> = Lazy::new(|| {
    vec![
        PathBuf::from("marquee.toml"),
        PathBuf::from("config/marquee.toml"),
    ]
});

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    /// Load `.env`, gather the process environment and compose the final
    /// configuration.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true).or_else(
                |err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                },
            )?,
            None => {
                dotenvy::dotenv().map(|_| true).or_else(|err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                })?
            }
        };

        self.load_with_env(EnvConfig::gather(), env_file_loaded)
    }

    /// Compose the configuration from an already gathered environment.
    pub fn load_with_env(
        &self,
        env: EnvConfig,
        env_file_loaded: bool,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let (file_config, config_path) = self.load_file_config(&env)?;
        let (config, warnings) =
            compose_config(file_config, env, config_path, env_file_loaded)?;
        Ok(ConfigLoad { config, warnings })
    }

    fn load_file_config(
        &self,
        env: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        let (path, explicit) =
            match (&self.options.config_path, &env.config_path) {
                (Some(path), _) => (path.clone(), true),
                (None, Some(path)) => (path.clone(), true),
                (None, None) => match DEFAULT_CONFIG_LOCATIONS
                    .iter()
                    .find(|candidate| candidate.exists())
                {
                    Some(found) => (found.clone(), false),
                    None => return Ok((None, None)),
                },
            };

        if !path.exists() {
            if explicit {
                return Err(ConfigLoadError::MissingConfig { path });
            }
            return Ok((None, None));
        }

        let contents =
            fs::read_to_string(&path).map_err(|err| ConfigLoadError::Io {
                path: path.clone(),
                source: err,
            })?;
        let file_config: FileConfig =
            toml::from_str(&contents).map_err(|err| ConfigLoadError::Parse {
                path: path.clone(),
                source: err,
            })?;

        tracing::debug!(path = %path.display(), "loaded configuration file");
        Ok((Some(file_config), Some(path)))
    }
}

fn compose_config(
    file_config: Option<FileConfig>,
    env: EnvConfig,
    config_path: Option<PathBuf>,
    env_file_loaded: bool,
) -> Result<(Config, ConfigWarnings), ConfigLoadError> {
    let mut warnings = ConfigWarnings::default();

    if config_path.is_none() {
        warnings.push_with_hint(
            "No marquee.toml detected; falling back to environment variables",
            "Create marquee.toml or pass --config to pin settings in a file",
        );
    }

    let FileConfig {
        server: file_server,
        tmdb: file_tmdb,
        trailer: file_trailer,
        catalog: file_catalog,
        gate: file_gate,
        cors: file_cors,
        dev_mode: file_dev_mode,
    } = file_config.unwrap_or_default();

    let server = ServerConfig {
        host: env
            .server_host
            .or(file_server.host)
            .unwrap_or_else(|| DEFAULT_HOST.to_string()),
        port: env.server_port.or(file_server.port).unwrap_or(DEFAULT_PORT),
    };

    let tmdb = TmdbConfig {
        api_base: env
            .tmdb_api_base
            .or(file_tmdb.api_base)
            .unwrap_or_else(|| DEFAULT_TMDB_API_BASE.to_string()),
        api_token: env.tmdb_api_token.or(file_tmdb.api_token),
        language: env.tmdb_language.or(file_tmdb.language),
        request_timeout_secs: env
            .tmdb_timeout_secs
            .or(file_tmdb.request_timeout_secs)
            .unwrap_or(DEFAULT_TMDB_TIMEOUT_SECS),
    };

    let trailer = TrailerConfig {
        search_url: env
            .trailer_search_url
            .or(file_trailer.search_url)
            .unwrap_or_else(|| DEFAULT_TRAILER_SEARCH_URL.to_string()),
    };

    let catalog = CatalogConfig {
        primary_locale: env
            .primary_locale
            .or(file_catalog.primary_locale)
            .unwrap_or_else(|| DEFAULT_PRIMARY_LOCALE.to_string()),
        reference_region: env
            .reference_region
            .or(file_catalog.reference_region)
            .unwrap_or_else(|| DEFAULT_REFERENCE_REGION.to_string()),
    };

    let gate = GateConfig {
        protected_routes: env
            .gate_protected_routes
            .or(file_gate.protected_routes)
            .unwrap_or_else(|| owned_list(DEFAULT_PROTECTED_ROUTES)),
        public_routes: env
            .gate_public_routes
            .or(file_gate.public_routes)
            .unwrap_or_else(|| owned_list(DEFAULT_PUBLIC_ROUTES)),
        excluded_pattern: env
            .gate_excluded_pattern
            .or(file_gate.excluded_pattern)
            .unwrap_or_else(|| DEFAULT_EXCLUDED_PATTERN.to_string()),
        login_path: env
            .gate_login_path
            .or(file_gate.login_path)
            .unwrap_or_else(|| DEFAULT_LOGIN_PATH.to_string()),
        home_path: env
            .gate_home_path
            .or(file_gate.home_path)
            .unwrap_or_else(|| DEFAULT_HOME_PATH.to_string()),
        session_cookie: env
            .gate_session_cookie
            .or(file_gate.session_cookie)
            .unwrap_or_else(|| DEFAULT_SESSION_COOKIE.to_string()),
    };

    let cors = CorsConfig {
        allowed_origins: env
            .cors_allowed_origins
            .or(file_cors.allowed_origins)
            .unwrap_or_else(default_cors_origins),
        allowed_methods: env
            .cors_allowed_methods
            .or(file_cors.allowed_methods)
            .unwrap_or_else(default_cors_methods),
        allowed_headers: env
            .cors_allowed_headers
            .or(file_cors.allowed_headers)
            .unwrap_or_else(default_cors_headers),
        allow_credentials: env
            .cors_allow_credentials
            .or(file_cors.allow_credentials)
            .unwrap_or(true),
    };

    let dev_mode = env.dev_mode.or(file_dev_mode).unwrap_or(false);

    let config = Config {
        server,
        tmdb,
        trailer,
        catalog,
        gate,
        cors,
        dev_mode,
        metadata: ConfigMetadata {
            config_path,
            env_file_loaded,
        },
    };

    let guard_warnings = validation::apply_guard_rails(&config)?;
    warnings.extend(guard_warnings);

    Ok((config, warnings))
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("configuration file missing: {path}")]
    MissingConfig { path: PathBuf },
    #[error("failed to read configuration {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error(transparent)]
    GuardRail(#[from] ConfigGuardRailError),
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "http://localhost:5173".to_string(),
    ]
}

fn default_cors_methods() -> Vec<String> {
    vec!["GET".to_string(), "OPTIONS".to_string()]
}

fn default_cors_headers() -> Vec<String> {
    vec!["Content-Type".to_string(), "Cookie".to_string()]
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    pub warnings: ConfigWarnings,
}
