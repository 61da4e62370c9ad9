//! # Marquee Server
//!
//! HTTP front for the movie catalog. Every request passes the cookie-driven
//! route gate first; movie detail pages are served as a JSON view model or as
//! a per-view event stream that reveals the trailer after a settle delay.

pub mod handlers;
pub mod infra;
pub mod routes;

pub use infra::app_state::AppState;
pub use routes::create_app;
