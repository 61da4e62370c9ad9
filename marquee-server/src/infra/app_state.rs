use std::{fmt, sync::Arc};

use anyhow::Context;
use marquee_config::Config;
use marquee_core::{
    AggregatorSettings, DetailAggregator, HttpTrailerSearch, MetadataSource,
    RouteGate, RouteTableError, TmdbApiProvider, TrailerSearch,
};

#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    gate: Arc<RouteGate>,
    aggregator: DetailAggregator,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("bind", &self.config.bind_address())
            .field("in_flight", &self.aggregator.in_flight().len())
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Assemble state around explicit providers.
    pub fn new(
        config: Config,
        metadata: Arc<dyn MetadataSource>,
        trailers: Arc<dyn TrailerSearch>,
    ) -> Result<Self, RouteTableError> {
        let gate = RouteGate::from_config(&config.gate)?;
        let aggregator = DetailAggregator::new(
            metadata,
            trailers,
            AggregatorSettings::from(&config.catalog),
        );

        Ok(Self {
            config: Arc::new(config),
            gate: Arc::new(gate),
            aggregator,
        })
    }

    /// Build the production providers from configuration.
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let tmdb = TmdbApiProvider::from_config(&config.tmdb)
            .context("failed to build TMDB client")?;
        let trailers = HttpTrailerSearch::from_config(&config.trailer);

        Self::new(config, Arc::new(tmdb), Arc::new(trailers))
            .context("invalid route gate configuration")
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn gate(&self) -> &RouteGate {
        &self.gate
    }

    pub fn aggregator(&self) -> &DetailAggregator {
        &self.aggregator
    }
}
