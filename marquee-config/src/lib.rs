//! Shared configuration library for Marquee.
//!
//! Configuration is composed from a TOML file, an optional `.env` file and the
//! process environment. The server re-exports these types so there is a single
//! source of truth for defaults and validation rules.

pub mod constants;
pub mod loader;
pub mod models;
pub mod util;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoadError, ConfigLoader, ConfigLoaderOptions};
pub use models::{
    CatalogConfig, Config, ConfigMetadata, CorsConfig, GateConfig,
    ServerConfig, TmdbConfig, TrailerConfig,
};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
