//! Highlight configuration

use serde::{Deserialize, Serialize};

/// Highlight system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighlightConfig {
    /// Result cache settings
    pub cache: ResultCacheConfig,

    /// Theme defaults used when the caller selects the `auto` style
    pub themes: ThemeConfig,
}

/// Result cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultCacheConfig {
    /// Maximum number of cached fragments
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,

    /// Total byte budget across all cached fragments
    #[serde(default = "default_max_bytes")]
    pub max_bytes: usize,

    /// Maximum size per fragment in bytes (0 = unlimited)
    /// Fragments larger than this are never cached
    #[serde(default = "default_max_entry_bytes")]
    pub max_entry_bytes: usize,
}

/// Theme selection defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Theme applied by `auto` in light display mode
    #[serde(default = "default_light_theme")]
    pub light: String,

    /// Theme applied by `auto` in dark display mode
    #[serde(default = "default_dark_theme")]
    pub dark: String,
}

// Default value functions
fn default_max_entries() -> usize {
    500
}
fn default_max_bytes() -> usize {
    4 * 1024 * 1024
} // 4MB
fn default_max_entry_bytes() -> usize {
    512 * 1024
} // 512KB
fn default_light_theme() -> String {
    "InspiredGitHub".to_string()
}
fn default_dark_theme() -> String {
    "base16-ocean.dark".to_string()
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            cache: ResultCacheConfig::default(),
            themes: ThemeConfig::default(),
        }
    }
}

impl Default for ResultCacheConfig {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
            max_bytes: default_max_bytes(),
            max_entry_bytes: default_max_entry_bytes(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            light: default_light_theme(),
            dark: default_dark_theme(),
        }
    }
}

impl HighlightConfig {
    /// Create a minimal config for resource-constrained environments
    pub fn minimal() -> Self {
        Self {
            cache: ResultCacheConfig {
                max_entries: 100,
                max_bytes: 1024 * 1024, // 1MB
                max_entry_bytes: 128 * 1024,
            },
            themes: ThemeConfig::default(),
        }
    }
}
