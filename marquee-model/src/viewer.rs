use crate::image::ImageAsset;

/// Full-screen image viewer state for the gallery sections. Opening a new
/// asset replaces whatever was open.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ImageViewer {
    #[default]
    Closed,
    Open(ImageAsset),
}

impl ImageViewer {
    pub fn open(&mut self, asset: ImageAsset) {
        *self = ImageViewer::Open(asset);
    }

    pub fn close(&mut self) {
        *self = ImageViewer::Closed;
    }

    pub fn selected(&self) -> Option<&ImageAsset> {
        match self {
            ImageViewer::Open(asset) => Some(asset),
            ImageViewer::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ImageViewer::Open(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageCategory;

    #[test]
    fn open_replaces_selection_and_close_clears_it() {
        let mut viewer = ImageViewer::default();
        assert!(!viewer.is_open());

        viewer.open(ImageAsset::new(ImageCategory::Backdrop, "/a.jpg"));
        viewer.open(ImageAsset::new(ImageCategory::Poster, "/b.jpg"));
        assert_eq!(viewer.selected().map(|a| a.path.as_str()), Some("/b.jpg"));

        viewer.close();
        assert_eq!(viewer.selected(), None);
    }
}
