//! Wire shapes returned by the metadata provider and the trailer search
//! endpoint. Missing or `null` fields fall back to their defaults so a
//! sparse payload never fails to decode.

use chrono::NaiveDate;
use marquee_model::{
    CastMember, CoreMetadata, GenreInfo, MovieId, ProductionCompany,
    ProductionCountry, RelatedTitle, SpokenLanguage,
};
use serde::{Deserialize, Serialize};

fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

/// Treats an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_optional_date<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_date))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|inner| !inner.trim().is_empty())
}

#[derive(Debug, Clone, Deserialize)]
pub struct MovieDetailsPayload {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vote_average: f32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vote_count: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub genres: Vec<GenrePayload>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub production_companies: Vec<CompanyPayload>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub production_countries: Vec<CountryPayload>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub spoken_languages: Vec<LanguagePayload>,
    #[serde(default)]
    pub original_language: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenrePayload {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompanyPayload {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub logo_path: Option<String>,
    #[serde(default)]
    pub origin_country: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CountryPayload {
    #[serde(default, deserialize_with = "null_as_default")]
    pub iso_3166_1: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LanguagePayload {
    #[serde(default)]
    pub iso_639_1: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub english_name: Option<String>,
}

impl From<MovieDetailsPayload> for CoreMetadata {
    fn from(payload: MovieDetailsPayload) -> Self {
        CoreMetadata {
            id: MovieId(payload.id),
            title: payload.title,
            original_title: non_empty(payload.original_title),
            overview: non_empty(payload.overview),
            tagline: non_empty(payload.tagline),
            release_date: payload.release_date,
            runtime: payload.runtime,
            vote_average: payload.vote_average,
            vote_count: payload.vote_count,
            genres: payload
                .genres
                .into_iter()
                .map(|genre| GenreInfo {
                    id: genre.id,
                    name: genre.name,
                })
                .collect(),
            production_companies: payload
                .production_companies
                .into_iter()
                .map(|company| ProductionCompany {
                    id: company.id,
                    name: company.name,
                    logo_path: non_empty(company.logo_path),
                    origin_country: non_empty(company.origin_country),
                })
                .collect(),
            production_countries: payload
                .production_countries
                .into_iter()
                .map(|country| ProductionCountry {
                    iso_3166_1: country.iso_3166_1,
                    name: country.name,
                })
                .collect(),
            spoken_languages: payload
                .spoken_languages
                .into_iter()
                .map(|language| SpokenLanguage {
                    iso_639_1: non_empty(language.iso_639_1),
                    name: language.name,
                    english_name: non_empty(language.english_name),
                })
                .collect(),
            original_language: non_empty(payload.original_language),
            poster_path: non_empty(payload.poster_path),
            backdrop_path: non_empty(payload.backdrop_path),
            status: non_empty(payload.status),
            homepage: non_empty(payload.homepage),
        }
    }
}

/// A single image record before locale filtering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawImage {
    /// Records without a path are dropped during filtering.
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub iso_639_1: Option<String>,
}

impl RawImage {
    pub fn new(file_path: impl Into<String>, locale: Option<&str>) -> Self {
        Self {
            file_path: Some(file_path.into()),
            iso_639_1: locale.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawImageSet {
    #[serde(default, deserialize_with = "null_as_default")]
    pub backdrops: Vec<RawImage>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub logos: Vec<RawImage>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub posters: Vec<RawImage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreditsPayload {
    #[serde(default, deserialize_with = "null_as_default")]
    pub cast: Vec<CastPayload>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CastPayload {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub character: Option<String>,
    #[serde(default)]
    pub profile_path: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub order: u32,
}

impl From<CastPayload> for CastMember {
    fn from(payload: CastPayload) -> Self {
        CastMember {
            id: payload.id,
            name: payload.name,
            character: non_empty(payload.character),
            profile_path: non_empty(payload.profile_path),
            order: payload.order,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendationsPayload {
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<RecommendationPayload>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationPayload {
    pub id: u64,
    #[serde(default, alias = "name", deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
}

impl From<RecommendationPayload> for RelatedTitle {
    fn from(payload: RecommendationPayload) -> Self {
        RelatedTitle {
            id: MovieId(payload.id),
            title: payload.title,
            poster_path: non_empty(payload.poster_path),
            backdrop_path: non_empty(payload.backdrop_path),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReleaseDatesPayload {
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<RegionReleaseDates>,
}

/// Release records for one region, in upstream order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RegionReleaseDates {
    pub iso_3166_1: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub release_dates: Vec<ReleaseDateEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReleaseDateEntry {
    #[serde(default)]
    pub certification: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default, rename = "type")]
    pub release_type: Option<u8>,
}

impl ReleaseDateEntry {
    pub fn with_certification(code: &str) -> Self {
        Self {
            certification: Some(code.to_string()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrailerSearchPayload {
    #[serde(default, deserialize_with = "null_as_default")]
    pub result: Vec<TrailerSearchHit>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrailerSearchHit {
    #[serde(default)]
    pub id: Option<String>,
}
