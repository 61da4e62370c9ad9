//! Image assets attached to a title, grouped the way the detail page shows them.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ImageCategory {
    Backdrop,
    Logo,
    Poster,
}

impl ImageCategory {
    pub const ALL: [ImageCategory; 3] = [
        ImageCategory::Backdrop,
        ImageCategory::Logo,
        ImageCategory::Poster,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageCategory::Backdrop => "backdrop",
            ImageCategory::Logo => "logo",
            ImageCategory::Poster => "poster",
        }
    }
}

impl fmt::Display for ImageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single image reference. `path` is opaque: it is whatever the provider
/// hands back and is only meaningful to the image CDN.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageAsset {
    pub category: ImageCategory,
    pub path: String,
}

impl ImageAsset {
    pub fn new(category: ImageCategory, path: impl Into<String>) -> Self {
        Self {
            category,
            path: path.into(),
        }
    }
}

/// Images split by category, each bucket keeping provider order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageBuckets {
    #[cfg_attr(feature = "serde", serde(default))]
    pub backdrops: Vec<ImageAsset>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub logos: Vec<ImageAsset>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub posters: Vec<ImageAsset>,
}

impl ImageBuckets {
    pub fn from_assets<I>(assets: I) -> Self
    where
        I: IntoIterator<Item = ImageAsset>,
    {
        let mut buckets = Self::default();
        for asset in assets {
            buckets.push(asset);
        }
        buckets
    }

    pub fn push(&mut self, asset: ImageAsset) {
        match asset.category {
            ImageCategory::Backdrop => self.backdrops.push(asset),
            ImageCategory::Logo => self.logos.push(asset),
            ImageCategory::Poster => self.posters.push(asset),
        }
    }

    pub fn bucket(&self, category: ImageCategory) -> &[ImageAsset] {
        match category {
            ImageCategory::Backdrop => &self.backdrops,
            ImageCategory::Logo => &self.logos,
            ImageCategory::Poster => &self.posters,
        }
    }

    /// The logo rendered over the hero image, if any.
    pub fn primary_logo(&self) -> Option<&ImageAsset> {
        self.logos.first()
    }

    pub fn len(&self) -> usize {
        self.backdrops.len() + self.logos.len() + self.posters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Backdrops first, then logos, then posters.
    pub fn iter(&self) -> impl Iterator<Item = &ImageAsset> {
        self.backdrops
            .iter()
            .chain(self.logos.iter())
            .chain(self.posters.iter())
    }
}
