//! Highlighting engine interface
//!
//! The service layer never talks to a concrete highlighter directly; it goes
//! through [`HighlightEngine`] so tests can substitute a scripted fake and
//! production code can plug in the syntect-backed engine.

use async_trait::async_trait;
use chroma_foundation::Result;

pub mod syntect;

pub use self::syntect::SyntectEngine;

/// Capability contract of the external highlighting engine
///
/// `load_language` / `load_theme` resolve and register a resource with the
/// engine's working set; they fail with `Error::UnknownLanguage` /
/// `Error::UnknownTheme` when the name is not recognized. `render_to_markup`
/// expects both resources to already be loaded.
#[async_trait]
pub trait HighlightEngine: Send + Sync {
    /// Resolve and register a grammar by canonical language tag
    async fn load_language(&self, language: &str) -> Result<()>;

    /// Resolve and register a theme by name
    async fn load_theme(&self, theme: &str) -> Result<()>;

    /// Render code to a styled markup fragment
    async fn render_to_markup(&self, code: &str, language: &str, theme: &str) -> Result<String>;
}
