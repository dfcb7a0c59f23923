//! Image viewer selection and wraparound navigation.
//!
//! The navigator never owns or mutates the result list; every navigation
//! call receives the list as it is at that moment, which may have grown
//! since the image was opened.

use crate::model::ImageItem;
use tracing::debug;

/// The open image plus the list position it was last seen at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GallerySelection {
    image: ImageItem,
    /// Fast path for locating the image. Re-validated on every use.
    index_hint: Option<usize>,
}

impl GallerySelection {
    /// The selected image.
    pub fn image(&self) -> &ImageItem {
        &self.image
    }

    /// Position of the open image in `items`.
    ///
    /// Uses the remembered index if the item there is still the same image,
    /// otherwise the first entry with a matching full URL.
    pub fn locate(&self, items: &[ImageItem]) -> Option<usize> {
        if let Some(hint) = self.index_hint {
            if items.get(hint).is_some_and(|item| item.same_image(&self.image)) {
                return Some(hint);
            }
        }
        items.iter().position(|item| item.same_image(&self.image))
    }
}

/// Tracks which image is open in the viewer.
#[derive(Debug, Clone, Default)]
pub struct GalleryNavigator {
    selection: Option<GallerySelection>,
}

impl GalleryNavigator {
    /// Closed viewer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an image is open.
    pub fn is_open(&self) -> bool {
        self.selection.is_some()
    }

    /// The current selection, if open.
    pub fn selection(&self) -> Option<&GallerySelection> {
        self.selection.as_ref()
    }

    /// The open image, if any.
    pub fn open_image(&self) -> Option<&ImageItem> {
        self.selection.as_ref().map(GallerySelection::image)
    }

    /// Open `image`. It does not have to be in the current list.
    pub fn open(&mut self, image: ImageItem) {
        self.selection = Some(GallerySelection {
            image,
            index_hint: None,
        });
    }

    /// Open the image at `index`, remembering its position.
    ///
    /// Returns false (and leaves the viewer unchanged) if `index` is out of range.
    pub fn open_at(&mut self, items: &[ImageItem], index: usize) -> bool {
        let Some(image) = items.get(index) else {
            return false;
        };
        self.selection = Some(GallerySelection {
            image: image.clone(),
            index_hint: Some(index),
        });
        true
    }

    /// Close the viewer. Idempotent.
    pub fn close(&mut self) {
        self.selection = None;
    }

    /// Select the following image, wrapping from last to first.
    ///
    /// If the open image is no longer in `items` the viewer closes and `None`
    /// is returned.
    pub fn next(&mut self, items: &[ImageItem]) -> Option<&ImageItem> {
        self.step(items, |i, len| (i + 1) % len)
    }

    /// Select the preceding image, wrapping from first to last.
    ///
    /// If the open image is no longer in `items` the viewer closes and `None`
    /// is returned.
    pub fn previous(&mut self, items: &[ImageItem]) -> Option<&ImageItem> {
        self.step(items, |i, len| (i + len - 1) % len)
    }

    /// Position of the open image in `items`, if both exist.
    pub fn position(&self, items: &[ImageItem]) -> Option<usize> {
        self.selection.as_ref().and_then(|s| s.locate(items))
    }

    fn step(
        &mut self,
        items: &[ImageItem],
        advance: impl Fn(usize, usize) -> usize,
    ) -> Option<&ImageItem> {
        let current = self.selection.as_ref()?.locate(items);
        let Some(i) = current else {
            debug!("Open image no longer in result list; closing viewer");
            self.selection = None;
            return None;
        };

        let j = advance(i, items.len());
        self.selection = Some(GallerySelection {
            image: items[j].clone(),
            index_hint: Some(j),
        });
        self.open_image()
    }
}
