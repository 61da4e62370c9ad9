//! Core data model definitions shared across Marquee crates.
#![allow(missing_docs)]

pub mod details;
pub mod ids;
pub mod image;
pub mod rating;
pub mod runtime;
pub mod viewer;

// Intentionally curated re-exports for downstream consumers.
pub use details::{
    CastMember, CoreMetadata, DetailViewModel, GenreInfo, ProductionCompany,
    DetailSections, NOT_RATED_LABEL, ProductionCountry, RelatedTitle,
    SpokenLanguage,
};
pub use ids::{DetailRequest, MovieId, RequestId};
pub use image::{ImageAsset, ImageBuckets, ImageCategory};
pub use rating::{RatingBadge, rating_percent};
pub use runtime::RuntimeSplit;
pub use viewer::ImageViewer;
