//! Marquee core: detail aggregation over external metadata providers and the
//! cookie-driven route gate.
#![allow(missing_docs)]

pub mod detail;
pub mod error;
pub mod gate;
pub mod providers;

pub use detail::{
    AggregatorEvent, AggregatorSettings, CertificationMap, DetailAggregator,
    FetchKind, InFlightRequests, PageView, TrailerReveal,
};
pub use error::{AggregationError, ProviderError};
pub use gate::{
    CookieSession, GateDecision, RouteClass, RouteGate, RouteTable,
    RouteTableError, SessionProvider, StaticSession,
};
pub use providers::{
    HttpTrailerSearch, MetadataSource, TmdbApiProvider, TrailerSearch,
};
