use std::collections::HashSet;

use axum::http::{Method, header::HeaderName};
use thiserror::Error;
use url::Url;

use crate::models::{Config, CorsConfig, GateConfig};

#[derive(Debug, Error)]
pub enum ConfigGuardRailError {
    #[error("TMDB_API_TOKEN must be set when DEV_MODE is false")]
    MissingTmdbToken,
    #[error("{field} is not a valid absolute URL: {value}")]
    InvalidUrl { field: &'static str, value: String },
    #[error("route `{path}` is listed as both protected and public")]
    OverlappingRoutes { path: String },
    #[error("gate path `{path}` in {field} must start with '/'")]
    InvalidGatePath { field: &'static str, path: String },
    #[error("GATE_SESSION_COOKIE must name a cookie")]
    EmptySessionCookie,
    #[error("gate exclusion pattern does not compile: {reason}")]
    InvalidExclusionPattern { reason: String },
    #[error("CORS wildcard origins are not allowed when DEV_MODE is false")]
    DangerousCorsWildcard,
    #[error("invalid CORS configuration: {reason}")]
    InvalidCorsConfig { reason: String },
}

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }
}

pub fn apply_guard_rails(
    config: &Config,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    if !config.tmdb.has_token() {
        if !config.dev_mode {
            return Err(ConfigGuardRailError::MissingTmdbToken);
        }
        warnings.push_with_hint(
            "TMDB_API_TOKEN not set; movie detail requests will be rejected upstream",
            "Create a read access token in your TMDB account settings",
        );
    }

    if !config.dev_mode && config.cors.is_wildcard_included() {
        return Err(ConfigGuardRailError::DangerousCorsWildcard);
    }

    validate_url("TMDB_API_BASE", &config.tmdb.api_base)?;
    validate_url("TRAILER_SEARCH_URL", &config.trailer.search_url)?;
    validate_gate(&config.gate, &mut warnings)?;
    validate_cors(&config.cors)?;

    if config.cors.allow_credentials && config.cors.is_wildcard_included() {
        warnings.push(
            "CORS credentials allowed alongside wildcard origin; browsers will reject such configuration",
        );
    }

    Ok(warnings)
}

fn validate_url(
    field: &'static str,
    value: &str,
) -> Result<(), ConfigGuardRailError> {
    Url::parse(value)
        .map(|_| ())
        .map_err(|_| ConfigGuardRailError::InvalidUrl {
            field,
            value: value.to_string(),
        })
}

fn validate_gate(
    gate: &GateConfig,
    warnings: &mut ConfigWarnings,
) -> Result<(), ConfigGuardRailError> {
    let lists = [
        ("GATE_PROTECTED_ROUTES", gate.protected_routes.as_slice()),
        ("GATE_PUBLIC_ROUTES", gate.public_routes.as_slice()),
    ];
    for (field, paths) in lists {
        for path in paths {
            ensure_rooted(field, path)?;
        }
    }
    ensure_rooted("GATE_LOGIN_PATH", &gate.login_path)?;
    ensure_rooted("GATE_HOME_PATH", &gate.home_path)?;

    let protected: HashSet<&str> =
        gate.protected_routes.iter().map(String::as_str).collect();
    if let Some(path) = gate
        .public_routes
        .iter()
        .find(|path| protected.contains(path.as_str()))
    {
        return Err(ConfigGuardRailError::OverlappingRoutes {
            path: path.clone(),
        });
    }

    regex::Regex::new(&gate.excluded_pattern).map_err(|err| {
        ConfigGuardRailError::InvalidExclusionPattern {
            reason: err.to_string(),
        }
    })?;

    if protected.contains(gate.login_path.as_str()) {
        return Err(ConfigGuardRailError::OverlappingRoutes {
            path: gate.login_path.clone(),
        });
    }

    if !gate.public_routes.contains(&gate.login_path) {
        warnings.push_with_hint(
            format!("login path `{}` is not a public route", gate.login_path),
            "Add it to GATE_PUBLIC_ROUTES so signed-in visitors are sent home",
        );
    }

    if !protected.contains(gate.home_path.as_str()) {
        warnings.push(format!(
            "home path `{}` is not protected; anonymous visitors can reach it",
            gate.home_path
        ));
    }

    if gate.session_cookie.trim().is_empty() {
        return Err(ConfigGuardRailError::EmptySessionCookie);
    }

    Ok(())
}

fn ensure_rooted(
    field: &'static str,
    path: &str,
) -> Result<(), ConfigGuardRailError> {
    if path.starts_with('/') {
        Ok(())
    } else {
        Err(ConfigGuardRailError::InvalidGatePath {
            field,
            path: path.to_string(),
        })
    }
}

fn validate_cors(cors: &CorsConfig) -> Result<(), ConfigGuardRailError> {
    if cors.allowed_methods.is_empty() {
        return Err(ConfigGuardRailError::InvalidCorsConfig {
            reason:
                "CORS_ALLOWED_METHODS must include at least one HTTP method"
                    .into(),
        });
    }

    for method in &cors.allowed_methods {
        Method::from_bytes(method.as_bytes()).map_err(|_| {
            ConfigGuardRailError::InvalidCorsConfig {
                reason: format!(
                    "invalid HTTP method `{}` in CORS_ALLOWED_METHODS",
                    method
                ),
            }
        })?;
    }

    if cors.allowed_headers.is_empty() {
        return Err(ConfigGuardRailError::InvalidCorsConfig {
            reason:
                "CORS_ALLOWED_HEADERS must include at least one header name"
                    .into(),
        });
    }

    for header in &cors.allowed_headers {
        HeaderName::from_bytes(header.as_bytes()).map_err(|_| {
            ConfigGuardRailError::InvalidCorsConfig {
                reason: format!(
                    "invalid header name `{}` in CORS_ALLOWED_HEADERS",
                    header
                ),
            }
        })?;
    }

    Ok(())
}
