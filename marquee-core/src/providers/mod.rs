pub mod payloads;
pub mod tmdb;
pub mod trailer_search;

use std::fmt;

use async_trait::async_trait;
use marquee_model::{CastMember, CoreMetadata, MovieId, RelatedTitle};

use crate::error::ProviderError;

pub use payloads::{
    RawImage, RawImageSet, RegionReleaseDates, ReleaseDateEntry,
    TrailerSearchHit,
};
pub use tmdb::TmdbApiProvider;
pub use trailer_search::HttpTrailerSearch;

/// The external metadata provider, keyed by title identifier.
#[async_trait]
pub trait MetadataSource: Send + Sync + fmt::Debug {
    async fn movie_details(
        &self,
        id: MovieId,
    ) -> Result<CoreMetadata, ProviderError>;

    /// All image records across locales; filtering happens downstream.
    async fn movie_images(&self, id: MovieId)
    -> Result<RawImageSet, ProviderError>;

    async fn movie_credits(
        &self,
        id: MovieId,
    ) -> Result<Vec<CastMember>, ProviderError>;

    async fn movie_recommendations(
        &self,
        id: MovieId,
    ) -> Result<Vec<RelatedTitle>, ProviderError>;

    /// Release records grouped by region, in upstream order.
    async fn movie_release_dates(
        &self,
        id: MovieId,
    ) -> Result<Vec<RegionReleaseDates>, ProviderError>;
}

/// First-party search endpoint used to locate a trailer video.
#[async_trait]
pub trait TrailerSearch: Send + Sync + fmt::Debug {
    /// `query` is the plain composed text; implementations encode it.
    async fn search(
        &self,
        query: &str,
    ) -> Result<Vec<TrailerSearchHit>, ProviderError>;
}
