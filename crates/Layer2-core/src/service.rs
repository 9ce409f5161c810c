//! Highlight orchestration service
//!
//! Sole entry point of the highlighting core. Each request flows through
//! key lookup, resource loading, rendering, and caching; any failure along
//! the way degrades to an escaped plain rendering of the input instead of
//! surfacing an error.

use std::sync::Arc;

use tracing::{debug, trace};

use chroma_foundation::{CacheKey, Error, HighlightConfig, Result, ResultCache, ResultCacheStats};

use crate::engine::HighlightEngine;
use crate::language::LanguageAliasTable;
use crate::loader::{LoadOutcome, ResourceLoader};

/// On-demand code highlighting with result caching and lazy resource loading
///
/// Cheap to share: hold it in an `Arc` and call [`highlight`] from as many
/// tasks as needed.
///
/// [`highlight`]: HighlightService::highlight
pub struct HighlightService {
    engine: Arc<dyn HighlightEngine>,
    loader: ResourceLoader,
    cache: ResultCache,
    aliases: LanguageAliasTable,
}

impl HighlightService {
    /// Create a service with default configuration
    pub fn new(engine: Arc<dyn HighlightEngine>) -> Self {
        Self::with_config(engine, HighlightConfig::default())
    }

    /// Create a service with custom configuration
    pub fn with_config(engine: Arc<dyn HighlightEngine>, config: HighlightConfig) -> Self {
        Self {
            loader: ResourceLoader::new(Arc::clone(&engine)),
            cache: ResultCache::new(&config.cache),
            aliases: LanguageAliasTable::new(),
            engine,
        }
    }

    /// Highlight a code fragment, returning a styled markup fragment
    ///
    /// Never fails: when the language or theme cannot be resolved, or the
    /// engine errors out, the result is the input with `<` and `>` escaped
    /// inside a plain preformatted container. Safe to call concurrently.
    pub async fn highlight(
        &self,
        code: &str,
        language: &str,
        theme: &str,
        cache_enabled: bool,
    ) -> String {
        if code.is_empty() {
            return String::new();
        }

        let language = self.aliases.resolve(language);
        let code = code.trim_end();
        let key = CacheKey::compute(code, &language, theme);

        if cache_enabled {
            if let Some(markup) = self.cache.get(&key) {
                return markup;
            }
        }

        match self.render(code, &language, theme).await {
            Ok(markup) => {
                if cache_enabled {
                    self.cache.insert(key, markup.clone(), markup.len());
                    trace!(%key, language = %language, "highlight result cached");
                }
                markup
            }
            Err(err) => {
                debug!(language = %language, theme, error = %err, "highlight failed, rendering fallback");
                fallback_markup(code)
            }
        }
    }

    /// Cache occupancy and hit/miss counters
    pub fn cache_stats(&self) -> ResultCacheStats {
        self.cache.stats()
    }

    /// Resource loader, exposed for observability
    pub fn loader(&self) -> &ResourceLoader {
        &self.loader
    }

    async fn render(&self, code: &str, language: &str, theme: &str) -> Result<String> {
        if self.loader.ensure_theme(theme).await == LoadOutcome::NotFound {
            return Err(Error::UnknownTheme(theme.to_string()));
        }
        if self.loader.ensure_language(language).await == LoadOutcome::NotFound {
            return Err(Error::UnknownLanguage(language.to_string()));
        }
        self.engine.render_to_markup(code, language, theme).await
    }
}

/// Plain rendering used when highlighting is impossible
///
/// Escapes exactly the two markup-significant characters and nothing else,
/// so the code text survives byte-for-byte otherwise.
fn fallback_markup(code: &str) -> String {
    let mut escaped = String::with_capacity(code.len());
    for ch in code.chars() {
        match ch {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            other => escaped.push(other),
        }
    }
    format!("<pre style=\"padding: 10px\"><code>{escaped}</code></pre>")
}
