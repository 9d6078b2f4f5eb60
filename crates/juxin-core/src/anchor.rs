//! Scroll-to-section dispatch for the root page

use crate::nav::Section;
use crate::observe::ScrollTarget;
use crate::prelude::*;

/// The three scrollable anchor points of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorPoints<T> {
    pub features: T,
    pub screenshots: T,
    pub download: T,
}

impl<T> AnchorPoints<T> {
    pub fn new(features: T, screenshots: T, download: T) -> Self {
        Self {
            features,
            screenshots,
            download,
        }
    }

    pub fn get(&self, section: Section) -> &T {
        match section {
            Section::Features => &self.features,
            Section::Screenshots => &self.screenshots,
            Section::Download => &self.download,
        }
    }
}

impl<T: ScrollTarget> AnchorPoints<T> {
    /// Scroll the viewport to `section`. A detached anchor is ignored.
    pub fn scroll_to(&self, section: Section) -> bool {
        let scrolled = self.get(section).scroll_into_view();
        if scrolled {
            debug!(%section, "Scrolled to section");
        } else {
            debug!(%section, "Anchor not mounted, ignoring scroll request");
        }
        scrolled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observe::MockScrollTarget;

    fn expect_scrolls(times: usize, mounted: bool) -> MockScrollTarget {
        let mut target = MockScrollTarget::new();
        target
            .expect_scroll_into_view()
            .times(times)
            .return_const(mounted);
        target
    }

    #[test]
    fn test_scroll_to_hits_only_requested_anchor() {
        let anchors = AnchorPoints::new(
            expect_scrolls(0, true),
            expect_scrolls(1, true),
            expect_scrolls(0, true),
        );
        assert!(anchors.scroll_to(Section::Screenshots));
    }

    #[test]
    fn test_unmounted_anchor_is_ignored() {
        let anchors = AnchorPoints::new(
            expect_scrolls(0, true),
            expect_scrolls(0, true),
            expect_scrolls(1, false),
        );
        assert!(!anchors.scroll_to(Section::Download));
    }

    #[test]
    fn test_get_maps_sections() {
        let anchors = AnchorPoints::new("f", "s", "d");
        assert_eq!(*anchors.get(Section::Features), "f");
        assert_eq!(*anchors.get(Section::Screenshots), "s");
        assert_eq!(*anchors.get(Section::Download), "d");
    }
}
