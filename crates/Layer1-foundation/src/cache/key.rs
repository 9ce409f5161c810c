//! Cache key derivation for highlight results
//!
//! Keys are a fast non-cryptographic digest of the (code, language, theme)
//! triple. Collisions are possible in principle and accepted in exchange for
//! a single O(n) hashing pass; this is not a security boundary.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::Hasher;

/// Key identifying one (code, language, theme) triple
///
/// Deterministic: byte-identical inputs always produce the same key, and
/// the three fields are length-delimited so adjacent fields cannot alias
/// (`("ab", "c")` never keys like `("a", "bc")`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey(u64);

impl CacheKey {
    /// Derive the key for a highlight request
    ///
    /// `code` is expected to already be normalized the way the caller renders
    /// it (trailing whitespace trimmed); `language` is the resolved canonical
    /// tag, not the raw caller-supplied one.
    pub fn compute(code: &str, language: &str, theme: &str) -> Self {
        let mut hasher = DefaultHasher::new();
        hash_field(&mut hasher, code);
        hash_field(&mut hasher, language);
        hash_field(&mut hasher, theme);
        CacheKey(hasher.finish())
    }

    /// Raw digest value
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

fn hash_field(hasher: &mut DefaultHasher, field: &str) {
    hasher.write_usize(field.len());
    hasher.write(field.as_bytes());
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}
