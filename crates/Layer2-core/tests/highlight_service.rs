//! HighlightService integration tests - full request flow against a
//! scripted engine fake, plus an end-to-end pass over the syntect engine
//!
//! `cargo test -p chroma-core --test highlight_service`

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use chroma_core::{HighlightEngine, HighlightService, SyntectEngine};
use chroma_foundation::{Error, HighlightConfig, Result, ResultCacheConfig, ThemeConfig};

/// Engine fake that records every call
struct ScriptedEngine {
    known_languages: Vec<&'static str>,
    known_themes: Vec<&'static str>,
    fail_render: bool,
    language_loads: AtomicUsize,
    theme_loads: AtomicUsize,
    renders: AtomicUsize,
}

impl ScriptedEngine {
    fn new() -> Self {
        Self {
            known_languages: vec!["python", "rust", "vb"],
            known_themes: vec!["dark", "light"],
            fail_render: false,
            language_loads: AtomicUsize::new(0),
            theme_loads: AtomicUsize::new(0),
            renders: AtomicUsize::new(0),
        }
    }

    fn failing_renders() -> Self {
        Self {
            fail_render: true,
            ..Self::new()
        }
    }

    fn total_calls(&self) -> usize {
        self.language_loads.load(Ordering::SeqCst)
            + self.theme_loads.load(Ordering::SeqCst)
            + self.renders.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HighlightEngine for ScriptedEngine {
    async fn load_language(&self, language: &str) -> Result<()> {
        self.language_loads.fetch_add(1, Ordering::SeqCst);
        if self.known_languages.contains(&language) {
            Ok(())
        } else {
            Err(Error::UnknownLanguage(language.to_string()))
        }
    }

    async fn load_theme(&self, theme: &str) -> Result<()> {
        self.theme_loads.fetch_add(1, Ordering::SeqCst);
        if self.known_themes.contains(&theme) {
            Ok(())
        } else {
            Err(Error::UnknownTheme(theme.to_string()))
        }
    }

    async fn render_to_markup(&self, code: &str, language: &str, theme: &str) -> Result<String> {
        self.renders.fetch_add(1, Ordering::SeqCst);
        if self.fail_render {
            return Err(Error::render(language, "scripted failure"));
        }
        Ok(format!("<pre data-lang=\"{language}\" data-theme=\"{theme}\">{code}</pre>"))
    }
}

fn service_with(engine: Arc<ScriptedEngine>) -> HighlightService {
    HighlightService::new(engine)
}

#[tokio::test]
async fn test_cached_repeat_skips_engine() {
    let engine = Arc::new(ScriptedEngine::new());
    let service = service_with(engine.clone());

    let first = service.highlight("print(1)", "python", "dark", true).await;
    let second = service.highlight("print(1)", "python", "dark", true).await;

    assert_eq!(first, second);
    assert_eq!(engine.renders.load(Ordering::SeqCst), 1);

    let stats = service.cache_stats();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
}

#[tokio::test]
async fn test_cache_bypass_renders_every_time() {
    let engine = Arc::new(ScriptedEngine::new());
    let service = service_with(engine.clone());

    let first = service.highlight("print(1)", "python", "dark", false).await;
    let second = service.highlight("print(1)", "python", "dark", false).await;

    assert_eq!(first, second);
    assert_eq!(engine.renders.load(Ordering::SeqCst), 2);
    // Nothing was stored either
    assert_eq!(service.cache_stats().entries, 0);
}

#[tokio::test]
async fn test_empty_code_short_circuits() {
    let engine = Arc::new(ScriptedEngine::new());
    let service = service_with(engine.clone());

    assert_eq!(service.highlight("", "python", "dark", true).await, "");
    assert_eq!(engine.total_calls(), 0);

    let stats = service.cache_stats();
    assert_eq!(stats.hits + stats.misses, 0);
}

#[tokio::test]
async fn test_unknown_language_falls_back_escaped() {
    let engine = Arc::new(ScriptedEngine::new());
    let service = service_with(engine.clone());

    let code = "let x = a < b > c;";
    let markup = service.highlight(code, "not-a-real-lang", "dark", true).await;

    assert!(markup.contains("let x = a &lt; b &gt; c;"));
    assert!(markup.starts_with("<pre"));
    // Fallbacks are never cached
    assert_eq!(service.cache_stats().entries, 0);
    assert_eq!(engine.renders.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_unknown_theme_falls_back() {
    let engine = Arc::new(ScriptedEngine::new());
    let service = service_with(engine.clone());

    let markup = service
        .highlight("print(1)", "python", "no-such-theme", true)
        .await;

    assert!(markup.contains("print(1)"));
    assert_eq!(engine.renders.load(Ordering::SeqCst), 0);
    assert_eq!(service.cache_stats().entries, 0);
}

#[tokio::test]
async fn test_engine_render_failure_falls_back() {
    let engine = Arc::new(ScriptedEngine::failing_renders());
    let service = service_with(engine.clone());

    let markup = service.highlight("print(1)", "python", "dark", true).await;

    // Resources resolved, render blew up, output degrades instead of erroring
    assert_eq!(engine.renders.load(Ordering::SeqCst), 1);
    assert!(markup.contains("print(1)"));
    assert_eq!(service.cache_stats().entries, 0);
}

#[tokio::test]
async fn test_language_alias_reaches_engine_canonical() {
    let engine = Arc::new(ScriptedEngine::new());
    let service = service_with(engine.clone());

    // "vab" is a known non-canonical spelling of "vb"
    let markup = service.highlight("Dim x", "vab", "dark", true).await;
    assert!(markup.contains("data-lang=\"vb\""));
}

#[tokio::test]
async fn test_trailing_whitespace_trimmed_before_render() {
    let engine = Arc::new(ScriptedEngine::new());
    let service = service_with(engine.clone());

    let markup = service.highlight("print(1)\n\n\n", "python", "dark", true).await;
    assert!(markup.contains(">print(1)</pre>"));

    // Same content modulo trailing whitespace is one cache entry
    service.highlight("print(1)", "python", "dark", true).await;
    assert_eq!(engine.renders.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_resources_load_once_across_requests() {
    let engine = Arc::new(ScriptedEngine::new());
    let service = service_with(engine.clone());

    service.highlight("a = 1", "python", "dark", false).await;
    service.highlight("b = 2", "python", "dark", false).await;
    service.highlight("c = 3", "python", "dark", false).await;

    assert_eq!(engine.language_loads.load(Ordering::SeqCst), 1);
    assert_eq!(engine.theme_loads.load(Ordering::SeqCst), 1);
    assert_eq!(engine.renders.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_concurrent_highlights_share_resource_loads() {
    let engine = Arc::new(ScriptedEngine::new());
    let service = Arc::new(service_with(engine.clone()));

    let requests = (0..12).map(|i| {
        let service = Arc::clone(&service);
        async move {
            service
                .highlight(&format!("x = {i}"), "python", "dark", true)
                .await
        }
    });
    let outputs = futures::future::join_all(requests).await;

    assert!(outputs.iter().all(|markup| markup.starts_with("<pre")));
    assert_eq!(engine.language_loads.load(Ordering::SeqCst), 1);
    assert_eq!(engine.theme_loads.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_cache_budget_bounds_stored_fragments() {
    let engine = Arc::new(ScriptedEngine::new());
    let config = HighlightConfig {
        cache: ResultCacheConfig {
            max_entries: 100,
            max_bytes: 200,
            max_entry_bytes: 0,
        },
        themes: ThemeConfig::default(),
    };
    let service = HighlightService::with_config(engine, config);

    for i in 0..10 {
        service
            .highlight(&format!("block number {i:04}"), "python", "dark", true)
            .await;
        assert!(service.cache_stats().total_bytes <= 200);
    }
    assert!(service.cache_stats().entries < 10);
}

#[tokio::test]
async fn test_syntect_end_to_end() {
    let engine = Arc::new(SyntectEngine::new());
    let service = HighlightService::new(engine);

    let markup = service
        .highlight("fn main() { println!(\"hi\"); }", "rust", "base16-ocean.dark", true)
        .await;

    assert!(markup.contains("<pre"));
    assert!(markup.contains("style="));

    // Second call is served from cache, byte-identical
    let again = service
        .highlight("fn main() { println!(\"hi\"); }", "rust", "base16-ocean.dark", true)
        .await;
    assert_eq!(markup, again);
    assert_eq!(service.cache_stats().hits, 1);
}
