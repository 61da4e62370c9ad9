use axum::{Json, extract::State, http::Uri};
use serde_json::{Value, json};

use crate::infra::{app_state::AppState, errors::AppError};

pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "in_flight_views": state.aggregator().in_flight().len(),
    }))
}

pub async fn fallback_handler(uri: Uri) -> AppError {
    AppError::not_found(format!("no route for {}", uri.path()))
}
