use marquee_model::{ImageAsset, ImageBuckets, ImageCategory};

use crate::providers::{RawImage, RawImageSet};

/// True when the image is tagged with `primary_locale` or carries no tag.
pub fn keeps_locale(image: &RawImage, primary_locale: &str) -> bool {
    match image.iso_639_1.as_deref() {
        None => true,
        Some(tag) => tag == primary_locale,
    }
}

fn has_path(image: &RawImage) -> bool {
    image
        .file_path
        .as_deref()
        .is_some_and(|path| !path.trim().is_empty())
}

/// Drop every image tagged with a locale other than `primary_locale`, along
/// with records that carry no path.
pub fn filter_locale(set: &RawImageSet, primary_locale: &str) -> RawImageSet {
    let keep = |images: &[RawImage]| -> Vec<RawImage> {
        images
            .iter()
            .filter(|image| has_path(image) && keeps_locale(image, primary_locale))
            .cloned()
            .collect()
    };

    RawImageSet {
        backdrops: keep(&set.backdrops),
        logos: keep(&set.logos),
        posters: keep(&set.posters),
    }
}

/// Filter `set` to the locale policy and group what remains by category.
pub fn bucket_images(set: &RawImageSet, primary_locale: &str) -> ImageBuckets {
    let filtered = filter_locale(set, primary_locale);
    let sections = [
        (ImageCategory::Backdrop, filtered.backdrops),
        (ImageCategory::Logo, filtered.logos),
        (ImageCategory::Poster, filtered.posters),
    ];

    ImageBuckets::from_assets(sections.into_iter().flat_map(
        |(category, images)| {
            images.into_iter().filter_map(move |image| {
                image
                    .file_path
                    .map(|path| ImageAsset::new(category, path))
            })
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RawImageSet {
        RawImageSet {
            backdrops: vec![
                RawImage::new("/b-en.jpg", Some("en")),
                RawImage::new("/b-none.jpg", None),
                RawImage::new("/b-de.jpg", Some("de")),
            ],
            logos: vec![
                RawImage::new("/l-fr.png", Some("fr")),
                RawImage::new("/l-en.png", Some("en")),
            ],
            posters: vec![RawImage::new("/p-ja.jpg", Some("ja"))],
        }
    }

    #[test]
    fn keeps_primary_and_untagged_only() {
        let filtered = filter_locale(&sample(), "en");

        assert_eq!(
            filtered.backdrops,
            vec![
                RawImage::new("/b-en.jpg", Some("en")),
                RawImage::new("/b-none.jpg", None),
            ]
        );
        assert_eq!(filtered.logos, vec![RawImage::new("/l-en.png", Some("en"))]);
        assert!(filtered.posters.is_empty());
    }

    #[test]
    fn filtering_is_idempotent() {
        for locale in ["en", "fr", "ja", "xx"] {
            let once = filter_locale(&sample(), locale);
            let twice = filter_locale(&once, locale);
            assert_eq!(once, twice, "locale {locale}");
        }
    }

    #[test]
    fn buckets_follow_categories() {
        let buckets = bucket_images(&sample(), "en");

        assert_eq!(buckets.backdrops.len(), 2);
        assert!(
            buckets
                .backdrops
                .iter()
                .all(|asset| asset.category == ImageCategory::Backdrop)
        );
        assert_eq!(
            buckets.primary_logo().map(|logo| logo.path.as_str()),
            Some("/l-en.png")
        );
        assert!(buckets.posters.is_empty());
    }

    #[test]
    fn empty_set_yields_empty_buckets() {
        assert!(bucket_images(&RawImageSet::default(), "en").is_empty());
    }

    #[test]
    fn records_without_a_path_are_dropped() {
        let set = RawImageSet {
            backdrops: vec![
                RawImage::new("/a.jpg", None),
                RawImage {
                    file_path: None,
                    iso_639_1: Some("en".into()),
                },
                RawImage::new("  ", Some("en")),
            ],
            ..RawImageSet::default()
        };

        let buckets = bucket_images(&set, "en");
        assert_eq!(buckets.backdrops.len(), 1);
        assert_eq!(buckets.backdrops[0].path, "/a.jpg");
    }
}
