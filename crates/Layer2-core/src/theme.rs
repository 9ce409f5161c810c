//! Code style selection
//!
//! The caller-facing style value is either a literal theme name or the
//! `auto` sentinel, which follows the application's display mode. Resolution
//! happens before a request reaches the highlight service, which only ever
//! sees concrete theme names.

use chroma_foundation::ThemeConfig;

use crate::engine::SyntectEngine;

/// Sentinel value selecting the display-mode-derived theme
pub const AUTO_STYLE: &str = "auto";

/// Caller-selected code style
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeStyle {
    /// Follow the current display mode
    Auto,
    /// A specific theme by name
    Named(String),
}

/// Current display mode of the host application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Light,
    Dark,
}

impl CodeStyle {
    /// Parse a stored style value ("auto" or a theme name)
    pub fn from_name(name: &str) -> Self {
        if name.is_empty() || name == AUTO_STYLE {
            CodeStyle::Auto
        } else {
            CodeStyle::Named(name.to_string())
        }
    }

    /// Resolve to a concrete theme name
    pub fn resolve(&self, mode: DisplayMode, themes: &ThemeConfig) -> String {
        match self {
            CodeStyle::Named(name) => name.clone(),
            CodeStyle::Auto => match mode {
                DisplayMode::Light => themes.light.clone(),
                DisplayMode::Dark => themes.dark.clone(),
            },
        }
    }
}

/// Theme names offered to selection UIs: `auto` plus every bundled theme
pub fn code_themes(engine: &SyntectEngine) -> Vec<String> {
    let mut names = vec![AUTO_STYLE.to_string()];
    let mut bundled = engine.theme_names();
    bundled.sort();
    names.extend(bundled);
    names
}
