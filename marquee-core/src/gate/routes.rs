use std::collections::HashSet;

use marquee_config::GateConfig;
use regex::Regex;

#[derive(Debug, thiserror::Error)]
pub enum RouteTableError {
    #[error("route `{0}` is listed as both protected and public")]
    Overlap(String),

    #[error("route `{0}` must start with '/'")]
    InvalidPath(String),

    #[error("invalid exclusion pattern: {0}")]
    InvalidExclusion(#[from] regex::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteClass {
    Protected,
    Public,
    Unlisted,
}

/// Two disjoint sets of exact paths plus the pattern for paths the gate
/// never evaluates.
#[derive(Debug, Clone)]
pub struct RouteTable {
    protected: HashSet<String>,
    public: HashSet<String>,
    excluded: Regex,
}

impl RouteTable {
    pub fn new<P, Q, S, T>(
        protected: P,
        public: Q,
        excluded_pattern: &str,
    ) -> Result<Self, RouteTableError>
    where
        P: IntoIterator<Item = S>,
        Q: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        let protected = collect_paths(protected)?;
        let public = collect_paths(public)?;

        if let Some(path) = protected.intersection(&public).min() {
            return Err(RouteTableError::Overlap(path.clone()));
        }

        Ok(Self {
            protected,
            public,
            excluded: Regex::new(excluded_pattern)?,
        })
    }

    pub fn from_config(config: &GateConfig) -> Result<Self, RouteTableError> {
        Self::new(
            config.protected_routes.iter().cloned(),
            config.public_routes.iter().cloned(),
            &config.excluded_pattern,
        )
    }

    /// Exact membership, protected checked first.
    pub fn classify(&self, path: &str) -> RouteClass {
        if self.protected.contains(path) {
            RouteClass::Protected
        } else if self.public.contains(path) {
            RouteClass::Public
        } else {
            RouteClass::Unlisted
        }
    }

    /// Paths matched by the exclusion pattern skip the gate, unless they are
    /// explicitly protected.
    pub fn is_excluded(&self, path: &str) -> bool {
        !self.protected.contains(path) && self.excluded.is_match(path)
    }

    pub fn protected(&self) -> impl Iterator<Item = &str> {
        self.protected.iter().map(String::as_str)
    }

    pub fn public(&self) -> impl Iterator<Item = &str> {
        self.public.iter().map(String::as_str)
    }
}

fn collect_paths<I, S>(paths: I) -> Result<HashSet<String>, RouteTableError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    paths
        .into_iter()
        .map(Into::into)
        .map(|path: String| {
            if path.starts_with('/') {
                Ok(path)
            } else {
                Err(RouteTableError::InvalidPath(path))
            }
        })
        .collect()
}
