//! # juxin-core - Site Model and UI State
//!
//! Foundation crate for the JuXin website. Holds everything about the page
//! that does not depend on a renderer: the static content model, the small
//! state machines behind the interactive components, and the capability
//! traits the browser layer implements.
//!
//! This crate has **no browser dependencies** -- it builds and tests on the
//! host target.
//!
//! ## Public API
//!
//! ### Content (`content`)
//! - [`SiteContent`] - Everything rendered on the page, loaded from `content.toml`
//! - [`FeatureEntry`], [`ScreenshotEntry`], [`PlatformEntry`] - Static list items
//! - [`IconKind`] - Closed set of icons the page draws
//!
//! ### Carousel (`carousel`)
//! - [`advance()`] - Wrap-around index arithmetic
//! - [`Carousel`] - Active screenshot and lightbox state
//!
//! ### Navigation (`nav`)
//! - [`NavState`] - Scrolled backdrop flag and mobile menu toggle
//! - [`Section`] - The three in-page anchors
//!
//! ### Signals (`observe`, `anchor`, `reveal`)
//! - [`ScrollSource`], [`VisibilitySource`], [`ScrollTarget`] - Browser capabilities
//! - [`Subscription`] - RAII guard releasing a listener on drop
//! - [`AnchorPoints`] - Scroll-to-section dispatch
//! - [`Reveal`], [`RevealLatch`] - Reveal-on-view transitions
//!
//! ### Download and footer (`download`, `footer`)
//! - [`Navigation`], [`BadgeTone`] - Platform card activation
//! - [`copyright_line()`], [`current_year()`]
//!
//! ### Error Handling (`error`)
//! - [`Error`], [`Result`]
//!
//! ## Prelude
//!
//! ```rust
//! use juxin_core::prelude::*;
//! ```

pub mod anchor;
pub mod carousel;
pub mod content;
pub mod download;
pub mod error;
pub mod footer;
pub mod nav;
pub mod observe;
pub mod prelude;
pub mod reveal;

pub use anchor::AnchorPoints;
pub use carousel::{advance, Carousel, CarouselMessage, Direction};
pub use content::{
    FeatureEntry, HeroCopy, IconKind, NavCopy, PlatformEntry, ScreenshotEntry, SectionCopy,
    Sections, SiteContent, SiteInfo, DEFAULT_SCROLL_THRESHOLD_PX,
};
pub use download::{BadgeTone, Navigation};
pub use error::{Error, Result};
pub use footer::{copyright_line, current_year};
pub use nav::{NavMessage, NavState, Section};
pub use observe::{is_visible, ScrollSource, ScrollTarget, Subscription, VisibilitySource};
pub use reveal::{Reveal, RevealLatch, RevealStyle};
