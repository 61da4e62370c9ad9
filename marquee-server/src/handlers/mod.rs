pub mod health;
pub mod movie_details;

pub use health::{fallback_handler, health_handler};
pub use movie_details::{movie_details_handler, movie_events_handler};
