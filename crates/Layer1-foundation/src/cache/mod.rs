//! # ChromaCode Cache System
//!
//! Content-addressed caching for rendered highlight fragments.
//!
//! ## Design Principles
//!
//! 1. **Bounded Memory** - every fragment is byte-accounted against a budget
//! 2. **Cheap Keys** - one non-cryptographic hashing pass per request
//! 3. **Simplicity** - in-memory only, no persistence across restarts
//!
//! ## Modules
//!
//! - [`key`] - cache key derivation from the (code, language, theme) triple
//! - [`lru`] - byte-accounted LRU backing store
//! - [`result`] - the shared, thread-safe result cache

pub mod key;
pub mod lru;
pub mod result;

// Re-exports for convenience
pub use key::CacheKey;
pub use lru::{LruStore, LruStoreConfig};
pub use result::{ResultCache, ResultCacheStats};
