pub mod download;
pub mod features;
pub mod footer;
pub mod hero;
pub mod icons;
pub mod navbar;
pub mod reveal;
pub mod screenshots;
