//! Lazy resource loading with in-flight coalescing
//!
//! Grammars and themes are loaded into the engine at most once. The registry
//! tracks what is already loaded and which loads are in flight; concurrent
//! requests for the same not-yet-loaded resource attach to the existing
//! load's completion signal instead of starting a duplicate. Loads run on a
//! detached task, so a caller abandoning its request never cancels work that
//! other requests (or future ones) can still use.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::debug;

use chroma_foundation::Result;

use crate::engine::HighlightEngine;

/// Kind + name identifying one loadable resource
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum ResourceId {
    Language(String),
    Theme(String),
}

impl ResourceId {
    fn name(&self) -> &str {
        match self {
            ResourceId::Language(name) | ResourceId::Theme(name) => name,
        }
    }
}

/// Outcome every caller of an `ensure_*` call observes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The resource is loaded into the engine's working set
    Loaded,
    /// The resource name could not be resolved
    NotFound,
}

/// Process-wide record of loaded and in-flight resources
///
/// Empty at startup. The loaded set only grows; resources are never unloaded
/// in normal operation. A pending entry exists exactly while a load is in
/// flight and is removed on completion, success or failure. Failed loads are
/// not memoized, so a later request for the same name retries from scratch.
#[derive(Debug, Default)]
pub struct ResourceRegistry {
    state: Mutex<RegistryState>,
}

#[derive(Debug, Default)]
struct RegistryState {
    loaded: HashSet<ResourceId>,
    pending: HashMap<ResourceId, watch::Receiver<Option<LoadOutcome>>>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of resources currently loaded
    pub fn loaded_count(&self) -> usize {
        self.state.lock().loaded.len()
    }

    /// Number of loads currently in flight
    pub fn pending_count(&self) -> usize {
        self.state.lock().pending.len()
    }
}

/// Lazily loads grammars and themes, deduplicating concurrent loads
pub struct ResourceLoader {
    engine: Arc<dyn HighlightEngine>,
    registry: Arc<ResourceRegistry>,
}

impl ResourceLoader {
    pub fn new(engine: Arc<dyn HighlightEngine>) -> Self {
        Self {
            engine,
            registry: Arc::new(ResourceRegistry::new()),
        }
    }

    /// Registry handle, mainly for observability
    pub fn registry(&self) -> &ResourceRegistry {
        &self.registry
    }

    /// Ensure a grammar is loaded; `language` must already be canonical
    pub async fn ensure_language(&self, language: &str) -> LoadOutcome {
        self.ensure(ResourceId::Language(language.to_string())).await
    }

    /// Ensure a theme is loaded
    pub async fn ensure_theme(&self, theme: &str) -> LoadOutcome {
        self.ensure(ResourceId::Theme(theme.to_string())).await
    }

    async fn ensure(&self, id: ResourceId) -> LoadOutcome {
        let mut outcome_rx = {
            let mut state = self.registry.state.lock();

            if state.loaded.contains(&id) {
                return LoadOutcome::Loaded;
            }

            if let Some(rx) = state.pending.get(&id) {
                // A load for this resource is already in flight; share it
                rx.clone()
            } else {
                let (tx, rx) = watch::channel(None);
                state.pending.insert(id.clone(), rx.clone());
                self.spawn_load(id, tx);
                rx
            }
        };

        let result = match outcome_rx.wait_for(|outcome| outcome.is_some()).await {
            Ok(outcome) => (*outcome).unwrap_or(LoadOutcome::NotFound),
            // Load task dropped without publishing; treat as unresolved
            Err(_) => LoadOutcome::NotFound,
        };
        result
    }

    /// Run the actual engine load on a detached task
    ///
    /// The task owns the completion signal: it records the outcome in the
    /// registry, removes the pending entry, and broadcasts to every waiter.
    fn spawn_load(&self, id: ResourceId, outcome_tx: watch::Sender<Option<LoadOutcome>>) {
        let engine = Arc::clone(&self.engine);
        let registry = Arc::clone(&self.registry);

        tokio::spawn(async move {
            let outcome = match load_resource(engine.as_ref(), &id).await {
                Ok(()) => {
                    debug!(resource = id.name(), "resource loaded");
                    LoadOutcome::Loaded
                }
                Err(err) => {
                    debug!(resource = id.name(), error = %err, "resource load failed");
                    LoadOutcome::NotFound
                }
            };

            {
                let mut state = registry.state.lock();
                if outcome == LoadOutcome::Loaded {
                    state.loaded.insert(id.clone());
                }
                state.pending.remove(&id);
            }
            let _ = outcome_tx.send(Some(outcome));
        });
    }
}

async fn load_resource(engine: &dyn HighlightEngine, id: &ResourceId) -> Result<()> {
    match id {
        ResourceId::Language(language) => engine.load_language(language).await,
        ResourceId::Theme(theme) => engine.load_theme(theme).await,
    }
}
