use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

/// Catalog key for one title, as issued by the metadata provider.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MovieId(pub u64);

impl MovieId {
    pub fn new(raw: u64) -> Self {
        MovieId(raw)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl From<u64> for MovieId {
    fn from(value: u64) -> Self {
        MovieId(value)
    }
}

impl FromStr for MovieId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(MovieId)
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of a single page view. Two views of the same movie get distinct
/// request ids so each can be torn down on its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RequestId(pub Uuid);

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestId {
    pub fn new() -> Self {
        RequestId(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One detail page view: immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DetailRequest {
    pub request_id: RequestId,
    pub movie_id: MovieId,
}

impl DetailRequest {
    pub fn new(movie_id: MovieId) -> Self {
        Self {
            request_id: RequestId::new(),
            movie_id,
        }
    }
}
