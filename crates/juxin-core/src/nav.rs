//! Navigation bar state
//!
//! Two independent flags: `scrolled` drives the bar's backdrop once the page
//! has moved past a threshold, `menu_open` shows the collapsible mobile
//! menu. Link activations are returned to the caller as the [`Section`] to
//! scroll to.

use crate::content::DEFAULT_SCROLL_THRESHOLD_PX;
use crate::prelude::*;

/// In-page anchors reachable from the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Features,
    Screenshots,
    Download,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Features, Section::Screenshots, Section::Download];

    /// Element id of the section
    pub fn anchor_id(&self) -> &'static str {
        match self {
            Section::Features => "features",
            Section::Screenshots => "screenshots",
            Section::Download => "download",
        }
    }

    /// Fragment link to the section
    pub fn fragment(&self) -> &'static str {
        match self {
            Section::Features => "#features",
            Section::Screenshots => "#screenshots",
            Section::Download => "#download",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.anchor_id())
    }
}

/// Navigation bar input events
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavMessage {
    /// Vertical scroll offset changed
    Scrolled(f64),
    /// Hamburger button pressed
    ToggleMenu,
    /// Desktop link or call-to-action activated
    DesktopLink(Section),
    /// Mobile menu link or call-to-action activated
    MobileLink(Section),
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavState {
    threshold: f64,
    scrolled: bool,
    menu_open: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD_PX)
    }
}

impl NavState {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            scrolled: false,
            menu_open: false,
        }
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Record a new scroll offset. Returns whether `scrolled` flipped.
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        let scrolled = offset > self.threshold;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        debug!(open = self.menu_open, "Mobile menu toggled");
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Apply a message, returning the section whose callback should fire
    pub fn update(&mut self, message: NavMessage) -> Option<Section> {
        match message {
            NavMessage::Scrolled(offset) => {
                self.on_scroll(offset);
                None
            }
            NavMessage::ToggleMenu => {
                self.toggle_menu();
                None
            }
            NavMessage::DesktopLink(section) => Some(section),
            NavMessage::MobileLink(section) => {
                self.close_menu();
                Some(section)
            }
        }
    }
}
