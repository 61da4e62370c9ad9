//! Built-in defaults for every configuration section.

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

pub const DEFAULT_TMDB_API_BASE: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_TMDB_TIMEOUT_SECS: u64 = 10;

pub const DEFAULT_TRAILER_SEARCH_URL: &str = "http://127.0.0.1:3000/api/youtube";

pub const DEFAULT_PRIMARY_LOCALE: &str = "en";
pub const DEFAULT_REFERENCE_REGION: &str = "US";

pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_HOME_PATH: &str = "/discover";
pub const DEFAULT_SESSION_COOKIE: &str = "isLogged";

pub const DEFAULT_PROTECTED_ROUTES: &[&str] = &[
    "/discover",
    "/shows/popular",
    "/movies/popular",
    "/shows/top-rated",
    "/movies/top-rated",
    "/shows/on-the-air",
    "/movies/now-playing",
    "/api/genres",
];

pub const DEFAULT_PUBLIC_ROUTES: &[&str] = &["/login", "/register", "/"];

/// API namespace, static assets, the image pipeline and raster files never go
/// through the gate (unless a path is explicitly protected).
pub const DEFAULT_EXCLUDED_PATTERN: &str =
    r"^/(?:api|assets|_image)(?:/|$)|\.(?:png|jpe?g|webp|svg|ico)$";
