use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use futures::Stream;
use marquee_config::CatalogConfig;
use marquee_model::{
    CastMember, CoreMetadata, DetailSections, DetailViewModel, ImageBuckets,
    MovieId, RelatedTitle,
};
use tracing::{debug, error, info, warn};

use super::certification::{CertificationMap, resolve_certification};
use super::images::bucket_images;
use super::in_flight::{InFlightRequests, PageView};
use super::trailer::{
    SETTLE_DELAY, TrailerReveal, embed_url, reveal_after_settle,
    trailer_query,
};
use crate::error::{AggregationError, ProviderError};
use crate::providers::{MetadataSource, TrailerSearch};

/// The external lookups behind one detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchKind {
    Core,
    Images,
    Credits,
    Recommendations,
    Certification,
    TrailerSearch,
}

impl FetchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchKind::Core => "core",
            FetchKind::Images => "images",
            FetchKind::Credits => "credits",
            FetchKind::Recommendations => "recommendations",
            FetchKind::Certification => "certification",
            FetchKind::TrailerSearch => "trailer_search",
        }
    }
}

impl fmt::Display for FetchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one external call, consumed once by the merge step.
#[derive(Debug)]
pub struct RawFetchResult<T> {
    pub kind: FetchKind,
    pub outcome: Result<T, ProviderError>,
}

impl<T> RawFetchResult<T> {
    pub fn new(kind: FetchKind, outcome: Result<T, ProviderError>) -> Self {
        Self { kind, outcome }
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

impl<T: Default> RawFetchResult<T> {
    /// Value for an optional section; a failure degrades to the default.
    pub fn into_section(self, movie_id: MovieId) -> T {
        match self.outcome {
            Ok(value) => value,
            Err(err) => {
                warn!(
                    %movie_id,
                    source = %self.kind,
                    error = %err,
                    "optional fetch failed; section left empty"
                );
                T::default()
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct AggregatorSettings {
    pub primary_locale: String,
    pub reference_region: String,
    pub settle_delay: Duration,
}

impl Default for AggregatorSettings {
    fn default() -> Self {
        Self {
            primary_locale: "en".to_string(),
            reference_region: "US".to_string(),
            settle_delay: SETTLE_DELAY,
        }
    }
}

impl From<&CatalogConfig> for AggregatorSettings {
    fn from(config: &CatalogConfig) -> Self {
        Self {
            primary_locale: config.primary_locale.clone(),
            reference_region: config.reference_region.clone(),
            settle_delay: SETTLE_DELAY,
        }
    }
}

/// Events emitted for one page view, in order.
#[derive(Debug)]
pub enum AggregatorEvent {
    Loaded(Box<DetailViewModel>),
    Failed(AggregationError),
    /// The settle delay elapsed and the trailer may replace the static art.
    TrailerReady { movie_id: MovieId, embed_url: String },
}

/// Builds detail view models from the metadata provider and trailer search,
/// tracking every open page view so it can be cancelled.
#[derive(Debug, Clone)]
pub struct DetailAggregator {
    metadata: Arc<dyn MetadataSource>,
    trailers: Arc<dyn TrailerSearch>,
    settings: AggregatorSettings,
    certifications: Arc<CertificationMap>,
    in_flight: InFlightRequests,
}

impl DetailAggregator {
    pub fn new(
        metadata: Arc<dyn MetadataSource>,
        trailers: Arc<dyn TrailerSearch>,
        settings: AggregatorSettings,
    ) -> Self {
        Self {
            metadata,
            trailers,
            settings,
            certifications: Arc::new(CertificationMap::default()),
            in_flight: InFlightRequests::new(),
        }
    }

    pub fn with_certifications(mut self, map: CertificationMap) -> Self {
        self.certifications = Arc::new(map);
        self
    }

    pub fn settings(&self) -> &AggregatorSettings {
        &self.settings
    }

    pub fn in_flight(&self) -> &InFlightRequests {
        &self.in_flight
    }

    /// Register a new page view for `movie_id`.
    pub fn open_view(&self, movie_id: MovieId) -> PageView {
        PageView::open(&self.in_flight, movie_id)
    }

    /// Run the aggregation for `view`, aborting as soon as the view is
    /// cancelled.
    pub async fn load(
        &self,
        view: &PageView,
    ) -> Result<DetailViewModel, AggregationError> {
        let movie_id = view.movie_id();
        tokio::select! {
            biased;
            _ = view.token().cancelled() => {
                debug!(%movie_id, request_id = %view.request_id(), "aggregation cancelled");
                Err(AggregationError::Cancelled(movie_id))
            }
            result = self.gather(movie_id) => result,
        }
    }

    /// One-shot aggregation for callers that do not manage a view.
    pub async fn aggregate(
        &self,
        movie_id: MovieId,
    ) -> Result<DetailViewModel, AggregationError> {
        let view = self.open_view(movie_id);
        self.load(&view).await
    }

    /// Event stream for one page view. Dropping the stream tears the view
    /// down, cancelling pending fetches and the delayed trailer reveal.
    pub fn events(
        &self,
        movie_id: MovieId,
    ) -> impl Stream<Item = AggregatorEvent> + Send + use<> {
        let aggregator = self.clone();
        async_stream::stream! {
            let view = aggregator.open_view(movie_id);
            match aggregator.load(&view).await {
                Ok(model) => {
                    let trailer = model.trailer_embed_url.clone();
                    yield AggregatorEvent::Loaded(Box::new(model));

                    if let Some(url) = trailer {
                        let delay = aggregator.settings.settle_delay;
                        match reveal_after_settle(url, delay, view.token()).await {
                            TrailerReveal::Ready(embed_url) => {
                                yield AggregatorEvent::TrailerReady { movie_id, embed_url };
                            }
                            TrailerReveal::Cancelled => {
                                debug!(%movie_id, "trailer reveal cancelled");
                            }
                        }
                    }
                }
                Err(AggregationError::Cancelled(_)) => {}
                Err(err) => yield AggregatorEvent::Failed(err),
            }
        }
    }

    pub fn cancel_movie(&self, movie_id: MovieId) -> usize {
        self.in_flight.cancel_movie(movie_id)
    }

    pub fn cancel_all(&self) -> usize {
        self.in_flight.cancel_all()
    }

    async fn gather(
        &self,
        movie_id: MovieId,
    ) -> Result<DetailViewModel, AggregationError> {
        // The trailer search needs the title and release year, so it is
        // chained behind the core lookup. Everything else runs alongside.
        let core_and_trailer = async {
            let core = RawFetchResult::new(
                FetchKind::Core,
                self.metadata.movie_details(movie_id).await,
            );
            match core.outcome {
                Ok(core) => {
                    let trailer = self.fetch_trailer(&core).await;
                    Ok((core, trailer.into_section(movie_id)))
                }
                Err(source) => {
                    error!(%movie_id, error = %source, "core metadata fetch failed");
                    Err(AggregationError::CoreUnavailable {
                        id: movie_id,
                        source,
                    })
                }
            }
        };

        let ((core, trailer_embed_url), images, cast, recommendations, certification) = tokio::try_join!(
            core_and_trailer,
            infallible(self.fetch_images(movie_id)),
            infallible(self.fetch_credits(movie_id)),
            infallible(self.fetch_recommendations(movie_id)),
            infallible(self.fetch_certification(movie_id)),
        )?;

        let sections = DetailSections {
            images: images.into_section(movie_id),
            cast: cast.into_section(movie_id),
            recommendations: recommendations.into_section(movie_id),
            certification: certification.into_section(movie_id),
            trailer_embed_url,
        };

        let model = DetailViewModel::assemble(core, sections);
        info!(
            %movie_id,
            images = model.images.len(),
            cast = model.cast.len(),
            recommendations = model.recommendations.len(),
            trailer = model.has_trailer(),
            "detail view assembled"
        );
        Ok(model)
    }

    async fn fetch_images(
        &self,
        movie_id: MovieId,
    ) -> RawFetchResult<ImageBuckets> {
        let outcome = self
            .metadata
            .movie_images(movie_id)
            .await
            .map(|raw| bucket_images(&raw, &self.settings.primary_locale));
        RawFetchResult::new(FetchKind::Images, outcome)
    }

    async fn fetch_credits(
        &self,
        movie_id: MovieId,
    ) -> RawFetchResult<Vec<CastMember>> {
        RawFetchResult::new(
            FetchKind::Credits,
            self.metadata.movie_credits(movie_id).await,
        )
    }

    async fn fetch_recommendations(
        &self,
        movie_id: MovieId,
    ) -> RawFetchResult<Vec<RelatedTitle>> {
        RawFetchResult::new(
            FetchKind::Recommendations,
            self.metadata.movie_recommendations(movie_id).await,
        )
    }

    async fn fetch_certification(
        &self,
        movie_id: MovieId,
    ) -> RawFetchResult<Option<String>> {
        let outcome =
            self.metadata
                .movie_release_dates(movie_id)
                .await
                .map(|regions| {
                    resolve_certification(
                        &regions,
                        &self.settings.reference_region,
                        &self.certifications,
                    )
                });
        RawFetchResult::new(FetchKind::Certification, outcome)
    }

    async fn fetch_trailer(
        &self,
        core: &CoreMetadata,
    ) -> RawFetchResult<Option<String>> {
        let query = trailer_query(&core.title, core.release_year());
        let outcome = self.trailers.search(&query).await.map(|hits| {
            hits.first()
                .and_then(|hit| hit.id.as_deref())
                .filter(|id| !id.trim().is_empty())
                .map(embed_url)
        });
        RawFetchResult::new(FetchKind::TrailerSearch, outcome)
    }
}

async fn infallible<F, T>(future: F) -> Result<T, AggregationError>
where
    F: Future<Output = T>,
{
    Ok(future.await)
}
