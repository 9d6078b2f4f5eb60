//! Screenshot carousel state
//!
//! The carousel tracks which screenshot is shown in the main frame and,
//! independently, which one (if any) is enlarged in the lightbox. Both are
//! always valid indices into a fixed-length list.

use crate::prelude::*;

/// Step direction for [`advance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Move `index` one step in `direction` over a list of `len` items,
/// wrapping at both ends.
///
/// An empty list has no valid index and always yields 0. An index past the
/// end is treated as sitting just beyond the last item.
pub fn advance(index: usize, direction: Direction, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let last = len - 1;
    match direction {
        Direction::Previous if index == 0 => last,
        Direction::Previous => index.min(len) - 1,
        Direction::Next if index >= last => 0,
        Direction::Next => index + 1,
    }
}

/// Carousel input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselMessage {
    Previous,
    Next,
    SelectThumbnail(usize),
    OpenLightbox,
    CloseLightbox,
}

/// Active screenshot and lightbox state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    active: usize,
    lightbox: Option<usize>,
}

impl Carousel {
    /// Start at the first screenshot with the lightbox closed
    pub fn new(len: usize) -> Self {
        Self {
            len,
            active: 0,
            lightbox: None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn lightbox(&self) -> Option<usize> {
        self.lightbox
    }

    pub fn is_lightbox_open(&self) -> bool {
        self.lightbox.is_some()
    }

    /// Whether thumbnail `index` is the one in the main frame
    pub fn is_active(&self, index: usize) -> bool {
        self.active == index
    }

    pub fn previous(&mut self) {
        self.active = advance(self.active, Direction::Previous, self.len);
        trace!(active = self.active, "Carousel moved back");
    }

    pub fn next(&mut self) {
        self.active = advance(self.active, Direction::Next, self.len);
        trace!(active = self.active, "Carousel moved forward");
    }

    /// Jump straight to `index`. Out-of-range indices are ignored.
    ///
    /// Returns whether the index was accepted.
    pub fn select_thumbnail(&mut self, index: usize) -> bool {
        if index >= self.len {
            warn!(index, len = self.len, "Ignoring out-of-range thumbnail");
            return false;
        }
        self.active = index;
        true
    }

    /// Enlarge the screenshot currently in the main frame.
    ///
    /// The lightbox keeps this index even if the main frame moves on.
    pub fn open_lightbox(&mut self) {
        if self.is_empty() {
            return;
        }
        self.lightbox = Some(self.active);
        debug!(index = self.active, "Lightbox opened");
    }

    /// Close the lightbox. Returns false if it was already closed.
    pub fn close_lightbox(&mut self) -> bool {
        let was_open = self.lightbox.take().is_some();
        if was_open {
            debug!("Lightbox closed");
        }
        was_open
    }

    pub fn update(&mut self, message: CarouselMessage) {
        match message {
            CarouselMessage::Previous => self.previous(),
            CarouselMessage::Next => self.next(),
            CarouselMessage::SelectThumbnail(index) => {
                self.select_thumbnail(index);
            }
            CarouselMessage::OpenLightbox => self.open_lightbox(),
            CarouselMessage::CloseLightbox => {
                self.close_lightbox();
            }
        }
    }
}
