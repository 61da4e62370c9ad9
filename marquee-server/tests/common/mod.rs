#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use chrono::NaiveDate;
use marquee_config::{Config, ConfigLoader, models::sources::EnvConfig};
use marquee_core::{
    MetadataSource, ProviderError, TrailerSearch,
    providers::{
        RawImage, RawImageSet, RegionReleaseDates, ReleaseDateEntry,
        TrailerSearchHit,
    },
};
use marquee_model::{CastMember, CoreMetadata, MovieId, RelatedTitle};
use marquee_server::{AppState, create_app};

/// Movie id whose core lookup reports "not found".
pub const MISSING_MOVIE: u64 = 404;
/// Movie id whose core lookup fails upstream.
pub const BROKEN_MOVIE: u64 = 500;
/// Movie id whose image lookup fails.
pub const NO_IMAGES_MOVIE: u64 = 13;

#[derive(Debug, Default)]
pub struct FakeMetadata;

#[async_trait]
impl MetadataSource for FakeMetadata {
    async fn movie_details(
        &self,
        id: MovieId,
    ) -> Result<CoreMetadata, ProviderError> {
        match id.get() {
            MISSING_MOVIE => Err(ProviderError::NotFound),
            BROKEN_MOVIE => {
                Err(ProviderError::ApiError("upstream exploded".into()))
            }
            _ => Ok(CoreMetadata {
                id,
                title: "Arrival".into(),
                original_title: Some("Arrival".into()),
                overview: Some("Linguist meets heptapods.".into()),
                tagline: Some("Why are they here?".into()),
                release_date: NaiveDate::from_ymd_opt(2016, 11, 10),
                runtime: Some(116),
                vote_average: 7.6,
                vote_count: 18_000,
                genres: Vec::new(),
                production_companies: Vec::new(),
                production_countries: Vec::new(),
                spoken_languages: Vec::new(),
                original_language: Some("en".into()),
                poster_path: Some("/poster.jpg".into()),
                backdrop_path: Some("/backdrop.jpg".into()),
                status: Some("Released".into()),
                homepage: None,
            }),
        }
    }

    async fn movie_images(
        &self,
        id: MovieId,
    ) -> Result<RawImageSet, ProviderError> {
        if id.get() == NO_IMAGES_MOVIE {
            return Err(ProviderError::RateLimited);
        }
        Ok(RawImageSet {
            backdrops: vec![
                RawImage::new("/backdrop-en.jpg", Some("en")),
                RawImage::new("/backdrop-es.jpg", Some("es")),
            ],
            logos: vec![RawImage::new("/logo.png", Some("en"))],
            posters: vec![RawImage::new("/poster.jpg", None)],
        })
    }

    async fn movie_credits(
        &self,
        _id: MovieId,
    ) -> Result<Vec<CastMember>, ProviderError> {
        Ok(vec![CastMember {
            id: 1,
            name: "Amy Adams".into(),
            character: Some("Louise Banks".into()),
            profile_path: None,
            order: 0,
        }])
    }

    async fn movie_recommendations(
        &self,
        _id: MovieId,
    ) -> Result<Vec<RelatedTitle>, ProviderError> {
        Ok(Vec::new())
    }

    async fn movie_release_dates(
        &self,
        _id: MovieId,
    ) -> Result<Vec<RegionReleaseDates>, ProviderError> {
        Ok(vec![RegionReleaseDates {
            iso_3166_1: "US".into(),
            release_dates: vec![ReleaseDateEntry::with_certification("PG-13")],
        }])
    }
}

#[derive(Debug, Default)]
pub struct FakeTrailers;

#[async_trait]
impl TrailerSearch for FakeTrailers {
    async fn search(
        &self,
        _query: &str,
    ) -> Result<Vec<TrailerSearchHit>, ProviderError> {
        Ok(vec![TrailerSearchHit {
            id: Some("tFMo3UJ4B4g".into()),
        }])
    }
}

pub fn test_config() -> Config {
    let env = EnvConfig {
        dev_mode: Some(true),
        tmdb_api_token: Some("test-token".into()),
        ..EnvConfig::default()
    };
    ConfigLoader::new()
        .load_with_env(env, false)
        .expect("default configuration")
        .config
}

pub fn test_state() -> AppState {
    AppState::new(
        test_config(),
        Arc::new(FakeMetadata),
        Arc::new(FakeTrailers),
    )
    .expect("valid state")
}

pub fn test_app() -> Router {
    create_app(test_state())
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

pub fn get_with_cookie(uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("cookie", cookie)
        .body(Body::empty())
        .expect("request")
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_text(response).await).expect("json body")
}
