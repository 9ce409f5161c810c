//! Error types for ChromaCode
//!
//! All errors are managed centrally. None of them are fatal: every failure
//! in the highlight path degrades to a plain rendering of the input.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// ChromaCode error type
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Resource resolution
    // ========================================================================
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    // ========================================================================
    // Rendering
    // ========================================================================
    #[error("Render failed: {language} - {message}")]
    Render { language: String, message: String },

    // ========================================================================
    // Configuration
    // ========================================================================
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Whether this error means a grammar or theme could not be resolved
    pub fn is_unknown_resource(&self) -> bool {
        matches!(self, Error::UnknownLanguage(_) | Error::UnknownTheme(_))
    }

    /// Render error constructor helper
    pub fn render(language: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Render {
            language: language.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_resource_classification() {
        assert!(Error::UnknownLanguage("brainfog".into()).is_unknown_resource());
        assert!(Error::UnknownTheme("no-such-theme".into()).is_unknown_resource());
        assert!(!Error::render("rust", "boom").is_unknown_resource());
    }

    #[test]
    fn test_render_error_message() {
        let err = Error::render("rust", "stack overflow in parser");
        assert_eq!(
            err.to_string(),
            "Render failed: rust - stack overflow in parser"
        );
    }
}
