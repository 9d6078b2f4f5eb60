//! End-to-end interaction flows over the embedded site content

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use juxin_core::{
    AnchorPoints, Carousel, NavMessage, NavState, ScrollSource, ScrollTarget, Section,
    SiteContent, Subscription,
};

/// Window stand-in: one scroll listener slot, counted releases
#[derive(Default)]
struct FakeWindow {
    offset: Cell<f64>,
    listener: Rc<RefCell<Option<Box<dyn FnMut(f64)>>>>,
    releases: Rc<Cell<usize>>,
}

impl FakeWindow {
    fn scroll_to(&self, offset: f64) {
        self.offset.set(offset);
        if let Some(listener) = self.listener.borrow_mut().as_mut() {
            listener(offset);
        }
    }
}

impl ScrollSource for FakeWindow {
    fn offset(&self) -> f64 {
        self.offset.get()
    }

    fn subscribe(&self, on_scroll: Box<dyn FnMut(f64)>) -> Subscription {
        *self.listener.borrow_mut() = Some(on_scroll);
        let listener = Rc::clone(&self.listener);
        let releases = Rc::clone(&self.releases);
        Subscription::new(move || {
            listener.borrow_mut().take();
            releases.set(releases.get() + 1);
        })
    }
}

/// Anchor that records how often it was scrolled to
#[derive(Clone, Default)]
struct CountingAnchor {
    mounted: bool,
    hits: Rc<Cell<usize>>,
}

impl ScrollTarget for CountingAnchor {
    fn scroll_into_view(&self) -> bool {
        if self.mounted {
            self.hits.set(self.hits.get() + 1);
        }
        self.mounted
    }
}

fn mounted() -> CountingAnchor {
    CountingAnchor {
        mounted: true,
        ..Default::default()
    }
}

#[test]
fn carousel_wraps_over_embedded_screenshots() {
    let content = SiteContent::embedded().unwrap();
    let mut carousel = Carousel::new(content.screenshots.len());
    assert_eq!(carousel.len(), 6);

    carousel.previous();
    assert_eq!(carousel.active(), 5);
    assert_eq!(content.screenshots[carousel.active()].caption, "AI 助手生成回复");

    carousel.next();
    assert_eq!(carousel.active(), 0);
}

#[test]
fn mobile_link_scrolls_once_and_closes_menu() {
    let anchors = AnchorPoints::new(mounted(), mounted(), mounted());
    let mut nav = NavState::default();
    assert!(!nav.menu_open());

    nav.update(NavMessage::ToggleMenu);
    assert!(nav.menu_open());

    if let Some(section) = nav.update(NavMessage::MobileLink(Section::Features)) {
        anchors.scroll_to(section);
    }

    assert_eq!(anchors.features.hits.get(), 1);
    assert_eq!(anchors.screenshots.hits.get(), 0);
    assert_eq!(anchors.download.hits.get(), 0);
    assert!(!nav.menu_open());
}

#[test]
fn hero_download_with_unmounted_anchor_is_ignored() {
    let anchors = AnchorPoints::new(mounted(), mounted(), CountingAnchor::default());
    assert!(!anchors.scroll_to(Section::Download));
    assert_eq!(anchors.download.hits.get(), 0);
}

#[test]
fn scroll_listener_drives_backdrop_until_released() {
    let window = FakeWindow::default();
    let nav = Rc::new(RefCell::new(NavState::default()));

    let state = Rc::clone(&nav);
    let subscription = window.subscribe(Box::new(move |y| {
        state.borrow_mut().update(NavMessage::Scrolled(y));
    }));

    window.scroll_to(0.0);
    assert!(!nav.borrow().scrolled());
    window.scroll_to(100.0);
    assert!(nav.borrow().scrolled());
    window.scroll_to(0.0);
    assert!(!nav.borrow().scrolled());

    drop(subscription);
    assert_eq!(window.releases.get(), 1);

    window.scroll_to(100.0);
    assert!(!nav.borrow().scrolled());
}

#[test]
fn unavailable_platform_cards_are_inert() {
    let content = SiteContent::embedded().unwrap();
    for platform in content.platforms.iter().filter(|p| !p.available) {
        assert_eq!(platform.activate(), None, "{} navigated", platform.name);
    }
    let windows = content.platforms[0].activate().unwrap();
    assert!(windows.new_context);
}
