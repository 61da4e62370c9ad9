use std::fmt;

use async_trait::async_trait;
use marquee_config::TmdbConfig;
use marquee_model::{CastMember, CoreMetadata, MovieId, RelatedTitle};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::MetadataSource;
use super::payloads::{
    CreditsPayload, MovieDetailsPayload, RawImageSet, RecommendationsPayload,
    RegionReleaseDates, ReleaseDatesPayload,
};
use crate::error::ProviderError;

#[derive(Debug, Clone, Serialize)]
struct LanguageQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<&'a str>,
}

/// HTTP client for the TMDB v3 API using a bearer read-access token.
#[derive(Clone)]
pub struct TmdbApiProvider {
    http: reqwest::Client,
    api_base: String,
    api_token: String,
    language: Option<String>,
}

impl fmt::Debug for TmdbApiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TmdbApiProvider")
            .field("api_base", &self.api_base)
            .field("api_token", &"<redacted>")
            .field("language", &self.language)
            .finish()
    }
}

impl TmdbApiProvider {
    pub fn new(
        api_base: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Self {
        Self::with_client(reqwest::Client::new(), api_base, api_token)
    }

    pub fn with_client(
        http: reqwest::Client,
        api_base: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Self {
        let api_base = api_base.into();
        Self {
            http,
            api_base: api_base.trim_end_matches('/').to_string(),
            api_token: api_token.into(),
            language: None,
        }
    }

    pub fn from_config(config: &TmdbConfig) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        let provider = Self::with_client(
            http,
            config.api_base.clone(),
            config.api_token.clone().unwrap_or_default(),
        );
        Ok(provider.with_language(config.language.clone()))
    }

    pub fn with_language(mut self, language: Option<String>) -> Self {
        self.language = language;
        self
    }

    fn movie_url(&self, id: MovieId, section: Option<&str>) -> String {
        match section {
            Some(section) => format!("{}/movie/{id}/{section}", self.api_base),
            None => format!("{}/movie/{id}", self.api_base),
        }
    }

    fn language_query(&self) -> LanguageQuery<'_> {
        LanguageQuery {
            language: self.language.as_deref(),
        }
    }

    async fn get_tmdb_json<Q, T>(
        &self,
        url: &str,
        query: &Q,
    ) -> Result<T, ProviderError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(%url, "tmdb request");
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.api_token)
            .header(reqwest::header::ACCEPT, "application/json")
            .query(query)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let body = response.bytes().await?;
            return serde_json::from_slice::<T>(&body)
                .map_err(|err| ProviderError::ParseError(err.to_string()));
        }

        #[derive(Debug, Deserialize)]
        struct TmdbErrorBody {
            #[serde(default)]
            status_message: Option<String>,
        }

        let message = response
            .json::<TmdbErrorBody>()
            .await
            .ok()
            .and_then(|body| body.status_message)
            .unwrap_or_else(|| {
                format!("TMDB request failed with status {}", status)
            });

        match status.as_u16() {
            401 => Err(ProviderError::InvalidApiKey),
            404 => Err(ProviderError::NotFound),
            429 => Err(ProviderError::RateLimited),
            _ => Err(ProviderError::ApiError(message)),
        }
    }
}

#[async_trait]
impl MetadataSource for TmdbApiProvider {
    async fn movie_details(
        &self,
        id: MovieId,
    ) -> Result<CoreMetadata, ProviderError> {
        let payload: MovieDetailsPayload = self
            .get_tmdb_json(&self.movie_url(id, None), &self.language_query())
            .await?;
        Ok(payload.into())
    }

    async fn movie_images(
        &self,
        id: MovieId,
    ) -> Result<RawImageSet, ProviderError> {
        // No language parameter: the provider would otherwise pre-filter
        // and drop untagged artwork.
        self.get_tmdb_json(
            &self.movie_url(id, Some("images")),
            &LanguageQuery { language: None },
        )
        .await
    }

    async fn movie_credits(
        &self,
        id: MovieId,
    ) -> Result<Vec<CastMember>, ProviderError> {
        let payload: CreditsPayload = self
            .get_tmdb_json(
                &self.movie_url(id, Some("credits")),
                &self.language_query(),
            )
            .await?;
        Ok(payload.cast.into_iter().map(CastMember::from).collect())
    }

    async fn movie_recommendations(
        &self,
        id: MovieId,
    ) -> Result<Vec<RelatedTitle>, ProviderError> {
        let payload: RecommendationsPayload = self
            .get_tmdb_json(
                &self.movie_url(id, Some("recommendations")),
                &self.language_query(),
            )
            .await?;
        Ok(payload.results.into_iter().map(RelatedTitle::from).collect())
    }

    async fn movie_release_dates(
        &self,
        id: MovieId,
    ) -> Result<Vec<RegionReleaseDates>, ProviderError> {
        let payload: ReleaseDatesPayload = self
            .get_tmdb_json(
                &self.movie_url(id, Some("release_dates")),
                &LanguageQuery { language: None },
            )
            .await?;
        Ok(payload.results)
    }
}
