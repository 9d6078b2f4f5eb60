//! Platform card behavior for the download panel

use crate::content::PlatformEntry;
use crate::prelude::*;

/// `rel` attribute for links opened in a new viewing context
pub const EXTERNAL_REL: &str = "noreferrer noopener";

/// Where activating a platform card takes the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub href: String,
    /// Open in a new viewing context (`target="_blank"`)
    pub new_context: bool,
    pub rel: &'static str,
}

/// Visual tone of a platform's status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Success,
    Pending,
}

impl PlatformEntry {
    /// Resolve a card activation. Unavailable platforms never navigate.
    pub fn activate(&self) -> Option<Navigation> {
        if !self.available {
            trace!(platform = %self.name, "Ignoring activation of unavailable platform");
            return None;
        }
        let href = self.href.clone()?;
        Some(Navigation {
            href,
            new_context: true,
            rel: EXTERNAL_REL,
        })
    }

    pub fn badge_tone(&self) -> BadgeTone {
        if self.available {
            BadgeTone::Success
        } else {
            BadgeTone::Pending
        }
    }

    /// Label for the hero banner's platform row
    pub fn hero_label(&self) -> String {
        if self.available {
            format!("\u{2713} {}", self.name)
        } else {
            format!("{} {}", self.name, self.badge)
        }
    }
}
