use async_trait::async_trait;
use marquee_config::TrailerConfig;
use tracing::debug;

use super::TrailerSearch;
use super::payloads::{TrailerSearchHit, TrailerSearchPayload};
use crate::error::ProviderError;

/// Client for the first-party video search endpoint
/// (`GET {search_url}?search={query}`).
#[derive(Debug, Clone)]
pub struct HttpTrailerSearch {
    http: reqwest::Client,
    search_url: String,
}

impl HttpTrailerSearch {
    pub fn new(search_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), search_url)
    }

    pub fn with_client(
        http: reqwest::Client,
        search_url: impl Into<String>,
    ) -> Self {
        Self {
            http,
            search_url: search_url.into(),
        }
    }

    pub fn from_config(config: &TrailerConfig) -> Self {
        Self::new(config.search_url.clone())
    }

    /// Full request URL with the query percent-encoded.
    pub fn request_url(&self, query: &str) -> String {
        format!("{}?search={}", self.search_url, urlencoding::encode(query))
    }
}

#[async_trait]
impl TrailerSearch for HttpTrailerSearch {
    async fn search(
        &self,
        query: &str,
    ) -> Result<Vec<TrailerSearchHit>, ProviderError> {
        let url = self.request_url(query);
        debug!(%url, "trailer search");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return match status.as_u16() {
                404 => Err(ProviderError::NotFound),
                429 => Err(ProviderError::RateLimited),
                _ => Err(ProviderError::ApiError(format!(
                    "trailer search failed with status {status}"
                ))),
            };
        }

        let body = response.bytes().await?;
        let payload: TrailerSearchPayload = serde_json::from_slice(&body)
            .map_err(|err| ProviderError::ParseError(err.to_string()))?;
        Ok(payload.result)
    }
}
