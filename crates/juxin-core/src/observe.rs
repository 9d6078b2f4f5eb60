//! Browser capabilities consumed by the components
//!
//! Scroll position, element visibility and scroll-into-view are global
//! browser facilities. Components reach them only through these traits, and
//! every listener they register is held by a [`Subscription`] that releases
//! it on drop.

use std::fmt;

/// Guard for a registered listener. Dropping it unregisters the listener.
#[must_use = "dropping a Subscription unregisters its listener immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A subscription with nothing to release
    pub fn noop() -> Self {
        Self { release: None }
    }

    /// Release the listener now
    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// Vertical scroll position of the viewport
pub trait ScrollSource {
    /// Current offset in CSS pixels
    fn offset(&self) -> f64;

    /// Call `on_scroll` with the new offset on every scroll event
    fn subscribe(&self, on_scroll: Box<dyn FnMut(f64)>) -> Subscription;
}

/// Whether an element intersects the viewport
pub trait VisibilitySource {
    /// Call `on_change` whenever the visible fraction crosses `threshold`
    /// (0.0 = any pixel, 1.0 = fully visible)
    fn observe(&self, threshold: f64, on_change: Box<dyn FnMut(bool)>) -> Subscription;
}

/// Decide visibility from an intersection report.
///
/// Observers fire an initial report on registration even when the element
/// is barely on screen, so the ratio is checked against the threshold too.
pub fn is_visible(intersecting: bool, ratio: f64, threshold: f64) -> bool {
    intersecting && ratio + f64::EPSILON >= threshold
}

/// Something the viewport can be scrolled to
#[cfg_attr(test, mockall::automock)]
pub trait ScrollTarget {
    /// Smoothly bring the target into view. Returns false if the target is
    /// not attached to the page.
    fn scroll_into_view(&self) -> bool;
}
