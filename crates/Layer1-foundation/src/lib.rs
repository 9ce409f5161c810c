//! # chroma-foundation
//!
//! Foundation layer for ChromaCode:
//! - Error: central error type shared by every layer
//! - Config: highlight and cache settings
//! - Cache: key derivation, byte-accounted LRU store, shared result cache
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Layer2-core (HighlightService, ResourceLoader, engine) │
//! │                     │                                   │
//! │                     ▼                                   │
//! │  Layer1-foundation (this layer)                         │
//! │  ├── CacheKey      (triple -> digest)                   │
//! │  ├── ResultCache   (key -> markup, byte budget)         │
//! │  └── Error/Config  (shared plumbing)                    │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod cache;
pub mod config;
pub mod error;

// ============================================================================
// Error
// ============================================================================
pub use error::{Error, Result};

// ============================================================================
// Config
// ============================================================================
pub use config::{HighlightConfig, ResultCacheConfig, ThemeConfig};

// ============================================================================
// Cache
// ============================================================================
pub use cache::{CacheKey, LruStore, LruStoreConfig, ResultCache, ResultCacheStats};
