use chrono::{Datelike, NaiveDate};

use crate::ids::MovieId;
use crate::image::ImageBuckets;
use crate::rating::{RatingBadge, rating_percent};
use crate::runtime::RuntimeSplit;

/// Label shown when no certification could be resolved.
pub const NOT_RATED_LABEL: &str = "Not Rated";

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenreInfo {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProductionCompany {
    pub id: u64,
    pub name: String,
    pub logo_path: Option<String>,
    pub origin_country: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProductionCountry {
    pub iso_3166_1: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpokenLanguage {
    pub iso_639_1: Option<String>,
    pub name: String,
    pub english_name: Option<String>,
}

/// Everything the required lookup returns. A detail page cannot be shown
/// without it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoreMetadata {
    pub id: MovieId,
    pub title: String,
    pub original_title: Option<String>,
    pub overview: Option<String>,
    pub tagline: Option<String>,
    pub release_date: Option<NaiveDate>,
    /// Total runtime in minutes.
    pub runtime: Option<u32>,
    pub vote_average: f32,
    pub vote_count: u32,
    pub genres: Vec<GenreInfo>,
    pub production_companies: Vec<ProductionCompany>,
    pub production_countries: Vec<ProductionCountry>,
    pub spoken_languages: Vec<SpokenLanguage>,
    pub original_language: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub status: Option<String>,
    pub homepage: Option<String>,
}

impl CoreMetadata {
    pub fn release_year(&self) -> Option<i32> {
        self.release_date.map(|date| date.year())
    }

    pub fn genre_names(&self) -> Vec<&str> {
        self.genres.iter().map(|g| g.name.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CastMember {
    pub id: u64,
    pub name: String,
    pub character: Option<String>,
    pub profile_path: Option<String>,
    pub order: u32,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelatedTitle {
    pub id: MovieId,
    pub title: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
}

/// Merged, ready-to-render detail page. Built once per successful
/// aggregation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DetailViewModel {
    pub core: CoreMetadata,
    pub rating_percent: u8,
    pub rating_badge: RatingBadge,
    pub runtime: RuntimeSplit,
    pub certification: Option<String>,
    pub images: ImageBuckets,
    pub cast: Vec<CastMember>,
    pub recommendations: Vec<RelatedTitle>,
    pub trailer_embed_url: Option<String>,
}

/// The optional sections gathered next to the core metadata. Each one
/// defaults to empty/absent when its source failed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetailSections {
    pub images: ImageBuckets,
    pub cast: Vec<CastMember>,
    pub recommendations: Vec<RelatedTitle>,
    pub certification: Option<String>,
    pub trailer_embed_url: Option<String>,
}

impl DetailViewModel {
    pub fn assemble(core: CoreMetadata, sections: DetailSections) -> Self {
        let DetailSections {
            images,
            cast,
            recommendations,
            certification,
            trailer_embed_url,
        } = sections;

        Self {
            rating_percent: rating_percent(core.vote_average),
            rating_badge: RatingBadge::for_vote_average(core.vote_average),
            runtime: RuntimeSplit::from_total_minutes(core.runtime.unwrap_or(0)),
            certification,
            images,
            cast,
            recommendations,
            trailer_embed_url,
            core,
        }
    }

    pub fn id(&self) -> MovieId {
        self.core.id
    }

    pub fn certification_label(&self) -> &str {
        self.certification.as_deref().unwrap_or(NOT_RATED_LABEL)
    }

    pub fn has_trailer(&self) -> bool {
        self.trailer_embed_url.is_some()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn core(id: u64) -> CoreMetadata {
        CoreMetadata {
            id: MovieId(id),
            title: "The Matrix".into(),
            original_title: Some("The Matrix".into()),
            overview: Some("A hacker learns the truth.".into()),
            tagline: Some("Welcome to the Real World.".into()),
            release_date: NaiveDate::from_ymd_opt(1999, 3, 30),
            runtime: Some(136),
            vote_average: 8.2,
            vote_count: 26_000,
            genres: vec![GenreInfo {
                id: 28,
                name: "Action".into(),
            }],
            production_companies: Vec::new(),
            production_countries: Vec::new(),
            spoken_languages: Vec::new(),
            original_language: Some("en".into()),
            poster_path: Some("/poster.jpg".into()),
            backdrop_path: Some("/backdrop.jpg".into()),
            status: Some("Released".into()),
            homepage: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::core;
    use super::*;

    #[test]
    fn assemble_derives_presentation_fields() {
        let mut metadata = core(603);
        metadata.vote_average = 7.3;
        metadata.runtime = Some(125);

        let view = DetailViewModel::assemble(metadata, DetailSections::default());

        assert_eq!(view.rating_percent, 73);
        assert_eq!(view.rating_badge, RatingBadge::High);
        assert_eq!(view.runtime, RuntimeSplit { hours: 2, minutes: 5 });
        assert_eq!(view.id(), MovieId(603));
    }

    #[test]
    fn missing_runtime_and_certification_fall_back() {
        let mut metadata = core(1);
        metadata.runtime = None;

        let view = DetailViewModel::assemble(metadata, DetailSections::default());

        assert!(view.runtime.is_zero());
        assert_eq!(view.certification_label(), NOT_RATED_LABEL);
        assert!(!view.has_trailer());
        assert!(view.images.is_empty());
    }

    #[test]
    fn release_year_comes_from_the_date() {
        assert_eq!(core(603).release_year(), Some(1999));
        let mut undated = core(603);
        undated.release_date = None;
        assert_eq!(undated.release_year(), None);
    }
}
