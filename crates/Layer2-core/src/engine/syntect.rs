//! Syntect-backed highlighting engine
//!
//! Wraps syntect's bundled syntax and theme sets behind [`HighlightEngine`].
//! The bundled sets are parsed once at construction; loading a resource
//! resolves it against those sets, so an unrecognized name fails fast and
//! the render path can assume both lookups succeed.

use async_trait::async_trait;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::{SyntaxReference, SyntaxSet};

use chroma_foundation::{Error, Result};

use super::HighlightEngine;

/// Highlighting engine over syntect's bundled grammars and themes
pub struct SyntectEngine {
    syntaxes: SyntaxSet,
    themes: ThemeSet,
}

impl SyntectEngine {
    /// Create an engine with syntect's default syntaxes and themes
    pub fn new() -> Self {
        Self {
            syntaxes: SyntaxSet::load_defaults_newlines(),
            themes: ThemeSet::load_defaults(),
        }
    }

    /// Names of all bundled themes
    pub fn theme_names(&self) -> Vec<String> {
        self.themes.themes.keys().cloned().collect()
    }

    /// Names of all bundled grammars
    pub fn language_names(&self) -> Vec<String> {
        self.syntaxes
            .syntaxes()
            .iter()
            .map(|syntax| syntax.name.clone())
            .collect()
    }

    /// Resolve a canonical tag (name or extension) to a grammar
    fn find_syntax(&self, language: &str) -> Result<&SyntaxReference> {
        self.syntaxes
            .find_syntax_by_token(language)
            .ok_or_else(|| Error::UnknownLanguage(language.to_string()))
    }

    fn find_theme(&self, theme: &str) -> Result<&Theme> {
        self.themes
            .themes
            .get(theme)
            .ok_or_else(|| Error::UnknownTheme(theme.to_string()))
    }
}

impl Default for SyntectEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HighlightEngine for SyntectEngine {
    async fn load_language(&self, language: &str) -> Result<()> {
        self.find_syntax(language).map(|_| ())
    }

    async fn load_theme(&self, theme: &str) -> Result<()> {
        self.find_theme(theme).map(|_| ())
    }

    async fn render_to_markup(&self, code: &str, language: &str, theme: &str) -> Result<String> {
        let syntax = self.find_syntax(language)?;
        let theme = self.find_theme(theme)?;

        highlighted_html_for_string(code, &self.syntaxes, syntax, theme)
            .map_err(|err| Error::render(language, err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_known_resources() {
        let engine = SyntectEngine::new();
        assert!(engine.load_language("rust").await.is_ok());
        assert!(engine.load_language("rs").await.is_ok());
        assert!(engine.load_theme("base16-ocean.dark").await.is_ok());
    }

    #[tokio::test]
    async fn test_load_unknown_resources() {
        let engine = SyntectEngine::new();
        let err = engine
            .load_language("not-a-real-lang")
            .await
            .expect_err("should not resolve");
        assert!(matches!(err, Error::UnknownLanguage(_)));

        let err = engine
            .load_theme("not-a-real-theme")
            .await
            .expect_err("should not resolve");
        assert!(matches!(err, Error::UnknownTheme(_)));
    }

    #[tokio::test]
    async fn test_render_produces_styled_html() {
        let engine = SyntectEngine::new();
        let markup = engine
            .render_to_markup("fn main() {}", "rust", "base16-ocean.dark")
            .await
            .expect("render should succeed");

        assert!(markup.contains("<pre"));
        assert!(markup.contains("main"));
        // Inline styles are what distinguish highlighted output from plain text
        assert!(markup.contains("style="));
    }

    #[test]
    fn test_bundled_sets_are_nonempty() {
        let engine = SyntectEngine::new();
        assert!(!engine.theme_names().is_empty());
        assert!(!engine.language_names().is_empty());
    }
}
