//! Static site content
//!
//! Defines:
//! - `SiteContent` - Everything the page renders, parsed from `content.toml`
//! - `FeatureEntry`, `ScreenshotEntry`, `PlatformEntry` - List items
//! - Copy blocks for the navigation bar, hero and section headings
//!
//! Content is parsed once at start-up and never mutated afterwards.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::nav::Section;
use crate::prelude::*;

/// Vertical offset past which the navigation bar gains its backdrop
pub const DEFAULT_SCROLL_THRESHOLD_PX: f64 = 40.0;

const EMBEDDED_CONTENT: &str = include_str!("../content.toml");

/// Icons drawn by the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    MessageCircle,
    Users,
    Bot,
    Zap,
    Monitor,
    Apple,
    Terminal,
}

/// A single feature highlight card
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FeatureEntry {
    pub icon: IconKind,
    pub title: String,
    pub description: String,
    /// Gradient style token, e.g. `from-indigo-500 to-purple-500`
    pub gradient: String,
}

/// A screenshot shown in the carousel
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ScreenshotEntry {
    pub src: String,
    pub caption: String,
}

/// Download availability for one operating system
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlatformEntry {
    pub name: String,
    pub icon: IconKind,
    #[serde(default)]
    pub available: bool,
    /// Download URL; only meaningful while `available` is set
    #[serde(default)]
    pub href: Option<String>,
    pub badge: String,
}

/// Brand and page-wide settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SiteInfo {
    pub name: String,
    pub short_name: String,
    pub tagline: String,
    pub footer_tagline: String,
    #[serde(default)]
    pub description: String,
    pub icon: String,
    pub icon_alt: String,

    #[serde(default = "default_scroll_threshold")]
    pub scroll_threshold_px: f64,

    /// Browser console log level (`error`, `warn`, `info`, `debug`, `trace`)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_scroll_threshold() -> f64 {
    DEFAULT_SCROLL_THRESHOLD_PX
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Navigation labels, shared by the navigation bar and the footer
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NavCopy {
    pub features: String,
    pub screenshots: String,
    pub download: String,
    pub cta: String,
}

impl NavCopy {
    pub fn label(&self, section: Section) -> &str {
        match section {
            Section::Features => &self.features,
            Section::Screenshots => &self.screenshots,
            Section::Download => &self.download,
        }
    }
}

/// Hero banner text and imagery
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HeroCopy {
    pub eyebrow: String,
    pub headline: Vec<String>,
    pub lede: String,
    pub primary_cta: String,
    pub secondary_cta: String,
    #[serde(default = "default_secondary_href")]
    pub secondary_href: String,
    pub image: String,
    pub image_alt: String,
}

fn default_secondary_href() -> String {
    "#features".to_string()
}

/// Heading block above a page section
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SectionCopy {
    pub eyebrow: String,
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Sections {
    pub features: SectionCopy,
    pub screenshots: SectionCopy,
    pub download: SectionCopy,
}

/// Everything rendered on the page
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SiteContent {
    pub site: SiteInfo,
    pub nav: NavCopy,
    pub hero: HeroCopy,
    pub sections: Sections,
    #[serde(default)]
    pub features: Vec<FeatureEntry>,
    #[serde(default)]
    pub screenshots: Vec<ScreenshotEntry>,
    #[serde(default)]
    pub platforms: Vec<PlatformEntry>,
}

impl SiteContent {
    /// Load the content compiled into the binary
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(EMBEDDED_CONTENT)
    }

    /// Parse and validate content from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let parsed: SiteContent = toml::from_str(content)?;
        parsed.validate()?;
        debug!(
            features = parsed.features.len(),
            screenshots = parsed.screenshots.len(),
            platforms = parsed.platforms.len(),
            "Loaded site content"
        );
        Ok(parsed)
    }

    /// Check the invariants the components rely on
    pub fn validate(&self) -> Result<()> {
        if self.screenshots.is_empty() {
            return Err(Error::content_invalid("screenshot list is empty"));
        }
        if self.features.is_empty() {
            return Err(Error::content_invalid("feature list is empty"));
        }
        if self.platforms.is_empty() {
            return Err(Error::content_invalid("platform list is empty"));
        }
        if !self.site.scroll_threshold_px.is_finite() || self.site.scroll_threshold_px < 0.0 {
            return Err(Error::content_invalid(format!(
                "scroll threshold must be a non-negative number, got {}",
                self.site.scroll_threshold_px
            )));
        }
        if !self.hero.secondary_href.starts_with('#') {
            return Err(Error::content_invalid(format!(
                "hero secondary link must be an in-page fragment, got {:?}",
                self.hero.secondary_href
            )));
        }

        for platform in self.platforms.iter().filter(|p| p.available) {
            validate_download_link(platform)?;
        }

        Ok(())
    }

    /// Platforms with a live download link
    pub fn available_platforms(&self) -> impl Iterator<Item = &PlatformEntry> {
        self.platforms.iter().filter(|p| p.available)
    }
}

fn validate_download_link(platform: &PlatformEntry) -> Result<()> {
    let href = platform
        .href
        .as_deref()
        .ok_or_else(|| Error::invalid_link(&platform.name, "available platform has no href"))?;

    let url = Url::parse(href).map_err(|e| Error::invalid_link(&platform.name, e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(Error::invalid_link(
            &platform.name,
            format!("unsupported scheme {other:?}"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r##"
[site]
name = "Test"
short_name = "T"
tagline = "t"
footer_tagline = "f"
icon = "/icon.ico"
icon_alt = "icon"

[nav]
features = "Features"
screenshots = "Screens"
download = "Download"
cta = "Get it"

[hero]
eyebrow = "e"
headline = ["one", "two"]
lede = "l"
primary_cta = "p"
secondary_cta = "s"
image = "/hero.png"
image_alt = "hero"

[sections.features]
eyebrow = "e"
title = "t"
subtitle = "s"

[sections.screenshots]
eyebrow = "e"
title = "t"
subtitle = "s"

[sections.download]
eyebrow = "e"
title = "t"
subtitle = "s"

[[features]]
icon = "zap"
title = "Fast"
description = "Very"
gradient = "from-amber-500 to-orange-500"

[[screenshots]]
src = "/a.png"
caption = "A"

[[platforms]]
name = "Windows"
icon = "monitor"
available = true
href = "https://example.com/setup.exe"
badge = "Download"
"##;

    #[test]
    fn test_embedded_content_loads() {
        let content = SiteContent::embedded().unwrap();
        assert_eq!(content.features.len(), 4);
        assert_eq!(content.screenshots.len(), 6);
        assert_eq!(content.platforms.len(), 3);
        assert_eq!(content.site.scroll_threshold_px, 40.0);
        assert_eq!(content.hero.headline.len(), 2);
    }

    #[test]
    fn test_embedded_only_windows_available() {
        let content = SiteContent::embedded().unwrap();
        let available: Vec<_> = content
            .available_platforms()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(available, vec!["Windows"]);
        assert!(content.platforms[0]
            .href
            .as_deref()
            .unwrap()
            .starts_with("https://drive.google.com/"));
    }

    #[test]
    fn test_embedded_feature_icons_in_order() {
        let content = SiteContent::embedded().unwrap();
        let icons: Vec<_> = content.features.iter().map(|f| f.icon).collect();
        assert_eq!(
            icons,
            vec![
                IconKind::MessageCircle,
                IconKind::Users,
                IconKind::Bot,
                IconKind::Zap
            ]
        );
    }

    #[test]
    fn test_nav_labels() {
        let content = SiteContent::embedded().unwrap();
        let labels: Vec<_> = Section::ALL
            .iter()
            .map(|s| content.nav.label(*s))
            .collect();
        assert_eq!(labels, vec!["功能", "界面", "下载"]);
    }

    #[test]
    fn test_defaults_applied() {
        let content = SiteContent::from_toml_str(MINIMAL).unwrap();
        assert_eq!(content.site.scroll_threshold_px, DEFAULT_SCROLL_THRESHOLD_PX);
        assert_eq!(content.site.log_level, "info");
        assert_eq!(content.hero.secondary_href, "#features");
        assert_eq!(content.sections.download.note, None);
    }

    #[test]
    fn test_empty_screenshots_rejected() {
        let toml = MINIMAL.replace(
            "[[screenshots]]\nsrc = \"/a.png\"\ncaption = \"A\"\n",
            "",
        );
        let err = SiteContent::from_toml_str(&toml).unwrap_err();
        assert!(matches!(err, Error::ContentInvalid { .. }));
        assert!(err.to_string().contains("screenshot"));
    }

    #[test]
    fn test_relative_download_link_rejected() {
        let toml = MINIMAL.replace("https://example.com/setup.exe", "/setup.exe");
        let err = SiteContent::from_toml_str(&toml).unwrap_err();
        assert!(matches!(err, Error::InvalidLink { ref platform, .. } if platform == "Windows"));
    }

    #[test]
    fn test_non_http_download_link_rejected() {
        let toml = MINIMAL.replace("https://example.com/setup.exe", "ftp://example.com/setup.exe");
        let err = SiteContent::from_toml_str(&toml).unwrap_err();
        assert!(err.to_string().contains("unsupported scheme"));
    }

    #[test]
    fn test_available_platform_without_href_rejected() {
        let toml = MINIMAL.replace("href = \"https://example.com/setup.exe\"\n", "");
        let err = SiteContent::from_toml_str(&toml).unwrap_err();
        assert!(err.to_string().contains("has no href"));
    }

    #[test]
    fn test_unavailable_platform_needs_no_href() {
        let toml = format!(
            "{MINIMAL}\n[[platforms]]\nname = \"Linux\"\nicon = \"terminal\"\nbadge = \"Soon\"\n"
        );
        let content = SiteContent::from_toml_str(&toml).unwrap();
        assert_eq!(content.platforms.len(), 2);
        assert!(!content.platforms[1].available);
        assert_eq!(content.platforms[1].href, None);
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let toml = MINIMAL.replace(
            "icon_alt = \"icon\"",
            "icon_alt = \"icon\"\nscroll_threshold_px = -1.0",
        );
        assert!(SiteContent::from_toml_str(&toml).is_err());
    }

    #[test]
    fn test_unknown_icon_is_parse_error() {
        let toml = MINIMAL.replace("icon = \"zap\"", "icon = \"sparkles\"");
        let err = SiteContent::from_toml_str(&toml).unwrap_err();
        assert!(matches!(err, Error::ContentParse(_)));
    }
}
