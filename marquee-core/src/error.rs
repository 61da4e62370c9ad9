use marquee_model::MovieId;

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Not found")]
    NotFound,

    #[error("Rate limited")]
    RateLimited,

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    ParseError(String),
}

impl ProviderError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProviderError::NotFound)
    }
}

/// Reasons a detail aggregation produced no view model.
#[derive(Debug, thiserror::Error)]
pub enum AggregationError {
    /// The required core lookup failed, so nothing can be rendered.
    #[error("core metadata for movie {id} is unavailable: {source}")]
    CoreUnavailable {
        id: MovieId,
        #[source]
        source: ProviderError,
    },

    #[error("aggregation for movie {0} was cancelled")]
    Cancelled(MovieId),
}

impl AggregationError {
    pub fn movie_id(&self) -> MovieId {
        match self {
            AggregationError::CoreUnavailable { id, .. } => *id,
            AggregationError::Cancelled(id) => *id,
        }
    }
}
