//! Error types for content loading and site start-up

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised before the page renders.
///
/// Nothing past start-up can fail: the interactive components only flip
/// local UI state, so every variant here belongs to content loading or
/// logger setup.
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Content Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse site content: {0}")]
    ContentParse(#[from] toml::de::Error),

    #[error("Invalid site content: {message}")]
    ContentInvalid { message: String },

    #[error("Invalid download link for {platform}: {reason}")]
    InvalidLink { platform: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // Start-up Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to initialize logging: {message}")]
    Logging { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn content_invalid(message: impl Into<String>) -> Self {
        Self::ContentInvalid {
            message: message.into(),
        }
    }

    pub fn invalid_link(platform: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidLink {
            platform: platform.into(),
            reason: reason.into(),
        }
    }

    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }

    /// Content errors mean the page has nothing to render.
    pub fn is_content_error(&self) -> bool {
        matches!(
            self,
            Error::ContentParse(_) | Error::ContentInvalid { .. } | Error::InvalidLink { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::content_invalid("screenshot list is empty");
        assert_eq!(
            err.to_string(),
            "Invalid site content: screenshot list is empty"
        );

        let err = Error::invalid_link("Windows", "relative URL without base");
        assert_eq!(
            err.to_string(),
            "Invalid download link for Windows: relative URL without base"
        );
    }

    #[test]
    fn test_error_from_toml() {
        let toml_err = toml::from_str::<toml::Table>("not = [valid").unwrap_err();
        let err: Error = toml_err.into();
        assert!(matches!(err, Error::ContentParse(_)));
        assert!(err.to_string().starts_with("Failed to parse site content"));
    }

    #[test]
    fn test_error_is_content_error() {
        assert!(Error::content_invalid("x").is_content_error());
        assert!(Error::invalid_link("Linux", "x").is_content_error());
        assert!(!Error::logging("logger already set").is_content_error());
    }
}
