use axum::{
    Router,
    http::{HeaderName, HeaderValue, Method},
    middleware,
    routing::get,
};
use marquee_config::CorsConfig;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers::{
    fallback_handler, health_handler, movie_details_handler,
    movie_events_handler,
};
use crate::infra::{app_state::AppState, middleware::route_gate_middleware};

pub fn create_app(state: AppState) -> Router {
    let cors = if state.config().dev_mode {
        CorsLayer::permissive()
    } else {
        cors_layer(&state.config().cors)
    };

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/movies/{id}", get(movie_details_handler))
        .route("/api/movies/{id}/events", get(movie_events_handler))
        .fallback(fallback_handler)
        // Outer to inner: CORS, tracing, route gate.
        .layer(middleware::from_fn_with_state(
            state.clone(),
            route_gate_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Allow-list CORS. Entries were validated when the configuration loaded.
fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter(|origin| origin.trim() != "*")
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();
    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|method| Method::from_bytes(method.as_bytes()).ok())
        .collect();
    let headers: Vec<HeaderName> = config
        .allowed_headers
        .iter()
        .filter_map(|name| HeaderName::from_bytes(name.as_bytes()).ok())
        .collect();

    let layer = CorsLayer::new()
        .allow_methods(AllowMethods::list(methods))
        .allow_headers(AllowHeaders::list(headers));

    if origins.is_empty() {
        // Credentials cannot be combined with a wildcard origin.
        layer.allow_origin(AllowOrigin::any())
    } else {
        layer
            .allow_origin(AllowOrigin::list(origins))
            .allow_credentials(config.allow_credentials)
    }
}
