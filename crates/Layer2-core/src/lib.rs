//! # chroma-core
//!
//! Core highlighting runtime for ChromaCode:
//! - Engine: the highlighting capability trait + syntect-backed adapter
//! - Language: caller tag -> canonical tag normalization
//! - Theme: code style selection (`auto` sentinel, display-mode resolution)
//! - Loader: lazy, coalesced grammar/theme loading
//! - Service: the single `highlight` entry point
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HighlightService                                        │
//! │  ├── LanguageAliasTable   (normalize caller tags)        │
//! │  ├── ResultCache          (key -> markup, byte budget)   │
//! │  ├── ResourceLoader       (load once, coalesce loads)    │
//! │  │        └── ResourceRegistry (loaded + in-flight)      │
//! │  └── HighlightEngine      (syntect, or a fake in tests)  │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod engine;
pub mod language;
pub mod loader;
pub mod service;
pub mod theme;

// ============================================================================
// Engine
// ============================================================================
pub use engine::{HighlightEngine, SyntectEngine};

// ============================================================================
// Language & Theme
// ============================================================================
pub use language::LanguageAliasTable;
pub use theme::{code_themes, CodeStyle, DisplayMode, AUTO_STYLE};

// ============================================================================
// Loader
// ============================================================================
pub use loader::{LoadOutcome, ResourceLoader, ResourceRegistry};

// ============================================================================
// Service
// ============================================================================
pub use service::HighlightService;
