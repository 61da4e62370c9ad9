use axum::{
    Json,
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use marquee_core::AggregationError;
use serde_json::{Value, json};
use std::fmt;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, message)
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, message)
    }

    /// The JSON error envelope shared by responses and stream events.
    pub fn body(&self) -> Value {
        json!({
            "error": {
                "message": self.message,
                "status": self.status.as_u16(),
            }
        })
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(self.body());
        (self.status, body).into_response()
    }
}

impl From<AggregationError> for AppError {
    fn from(err: AggregationError) -> Self {
        match &err {
            AggregationError::CoreUnavailable { id, source }
                if source.is_not_found() =>
            {
                Self::not_found(format!("movie {id} not found"))
            }
            AggregationError::CoreUnavailable { .. } => {
                Self::bad_gateway(err.to_string())
            }
            AggregationError::Cancelled(_) => Self::unavailable(err.to_string()),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}
