//! Full-screen gallery viewer state.
//!
//! The cursor is an index into the gallery list captured at startup, so two
//! items sharing an image URL stay distinguishable.

use crate::error::ComponentError;

/// One gallery entry: image source and its caption (`alt` text).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: String,
    pub caption: String,
}

#[derive(Debug)]
pub struct Lightbox {
    images: Vec<GalleryImage>,
    cursor: Option<usize>,
}

impl Lightbox {
    pub fn new(images: Vec<GalleryImage>) -> Self {
        Self { images, cursor: None }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn is_open(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn position(&self) -> Option<usize> {
        self.cursor
    }

    /// Image currently shown, if open.
    pub fn current(&self) -> Option<&GalleryImage> {
        self.cursor.and_then(|i| self.images.get(i))
    }

    pub fn open(&mut self, index: usize) -> Result<&GalleryImage, ComponentError> {
        let Some(image) = self.images.get(index) else {
            return Err(ComponentError::OutOfRange {
                component: "Lightbox".to_string(),
                index,
                len: self.images.len(),
            });
        };
        self.cursor = Some(index);
        Ok(image)
    }

    /// Returns false if it was already closed.
    pub fn close(&mut self) -> bool {
        self.cursor.take().is_some()
    }

    /// Step forward, wrapping from the last image to the first.
    pub fn next(&mut self) -> Option<&GalleryImage> {
        self.step(|i, len| (i + 1) % len)
    }

    /// Step back, wrapping from the first image to the last.
    pub fn previous(&mut self) -> Option<&GalleryImage> {
        self.step(|i, len| (i + len - 1) % len)
    }

    fn step(&mut self, f: impl Fn(usize, usize) -> usize) -> Option<&GalleryImage> {
        let len = self.images.len();
        let current = self.cursor?;
        if len == 0 {
            return None;
        }
        let index = f(current, len);
        self.cursor = Some(index);
        self.images.get(index)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn gallery(n: usize) -> Lightbox {
        Lightbox::new(
            (0..n)
                .map(|i| GalleryImage { src: format!("img-{i}.jpg"), caption: format!("Foto {i}") })
                .collect(),
        )
    }

    #[test]
    fn test_open_shows_requested_image() {
        let mut lightbox = gallery(3);
        let image = lightbox.open(1).unwrap();
        assert_eq!(image.src, "img-1.jpg");
        assert_eq!(image.caption, "Foto 1");
        assert!(lightbox.is_open());
    }

    #[test]
    fn test_next_wraps_to_first() {
        let mut lightbox = gallery(3);
        lightbox.open(2).unwrap();
        assert_eq!(lightbox.next().unwrap().src, "img-0.jpg");
        assert_eq!(lightbox.position(), Some(0));
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let mut lightbox = gallery(3);
        lightbox.open(0).unwrap();
        assert_eq!(lightbox.previous().unwrap().src, "img-2.jpg");
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let mut lightbox = gallery(4);
        lightbox.open(1).unwrap();
        for _ in 0..4 {
            lightbox.next();
        }
        assert_eq!(lightbox.position(), Some(1));
    }

    #[test]
    fn test_duplicate_sources_keep_position() {
        let mut lightbox = Lightbox::new(vec![
            GalleryImage { src: "same.jpg".to_string(), caption: "A".to_string() },
            GalleryImage { src: "same.jpg".to_string(), caption: "B".to_string() },
            GalleryImage { src: "other.jpg".to_string(), caption: "C".to_string() },
        ]);
        lightbox.open(1).unwrap();
        assert_eq!(lightbox.next().unwrap().caption, "C");
        assert_eq!(lightbox.previous().unwrap().caption, "B");
    }

    #[test]
    fn test_navigation_ignored_while_closed() {
        let mut lightbox = gallery(2);
        assert!(lightbox.next().is_none());
        assert!(lightbox.previous().is_none());
        assert!(!lightbox.close());
    }

    #[test]
    fn test_open_out_of_range() {
        let mut lightbox = gallery(2);
        assert!(lightbox.open(2).is_err());
        assert!(!lightbox.is_open());
    }

    #[test]
    fn test_close_clears_current() {
        let mut lightbox = gallery(2);
        lightbox.open(0).unwrap();
        assert!(lightbox.close());
        assert!(lightbox.current().is_none());
    }
}
