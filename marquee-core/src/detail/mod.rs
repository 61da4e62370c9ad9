//! Detail aggregation: one view model per page view, assembled from the
//! required core lookup plus independent optional lookups.

pub mod aggregator;
pub mod certification;
pub mod images;
pub mod in_flight;
pub mod trailer;

pub use aggregator::{
    AggregatorEvent, AggregatorSettings, DetailAggregator, FetchKind,
    RawFetchResult,
};
pub use certification::CertificationMap;
pub use in_flight::{InFlightEntry, InFlightRequests, PageView};
pub use trailer::{SETTLE_DELAY, TrailerReveal};
