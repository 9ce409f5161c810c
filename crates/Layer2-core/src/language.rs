//! Language tag normalization
//!
//! Callers supply whatever tag their editor or document metadata carries.
//! The alias table maps the known non-canonical spellings onto tags the
//! engine resolves; anything unmapped passes through verbatim on the
//! assumption that it is already canonical.

use std::collections::HashMap;

/// Static mapping from caller-supplied language tags to canonical ones
///
/// Read-only after construction.
#[derive(Debug)]
pub struct LanguageAliasTable {
    aliases: HashMap<&'static str, &'static str>,
}

impl LanguageAliasTable {
    /// Build the table of known non-canonical spellings
    pub fn new() -> Self {
        let mut aliases = HashMap::new();
        aliases.insert("vab", "vb");
        aliases.insert("golang", "go");
        aliases.insert("shell", "bash");
        aliases.insert("sh", "bash");
        aliases.insert("zsh", "bash");
        aliases.insert("node", "js");
        aliases.insert("javascript", "js");
        aliases.insert("c++", "cpp");
        aliases.insert("c#", "cs");
        aliases.insert("csharp", "cs");
        aliases.insert("yml", "yaml");
        aliases.insert("markdown", "md");

        Self { aliases }
    }

    /// Resolve a caller tag to its canonical form
    ///
    /// Lookup is case-insensitive on the trimmed tag; unmapped tags are
    /// returned verbatim (trimmed only).
    pub fn resolve(&self, tag: &str) -> String {
        let trimmed = tag.trim();
        let lowered = trimmed.to_lowercase();
        match self.aliases.get(lowered.as_str()) {
            Some(canonical) => (*canonical).to_string(),
            None => trimmed.to_string(),
        }
    }
}

impl Default for LanguageAliasTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_aliases_map() {
        let table = LanguageAliasTable::new();
        assert_eq!(table.resolve("vab"), "vb");
        assert_eq!(table.resolve("golang"), "go");
        assert_eq!(table.resolve("shell"), "bash");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let table = LanguageAliasTable::new();
        assert_eq!(table.resolve("GoLang"), "go");
        assert_eq!(table.resolve(" C++ "), "cpp");
    }

    #[test]
    fn test_unmapped_tags_pass_through() {
        let table = LanguageAliasTable::new();
        assert_eq!(table.resolve("rust"), "rust");
        assert_eq!(table.resolve("not-a-real-lang"), "not-a-real-lang");
        // Pass-through keeps the caller's casing
        assert_eq!(table.resolve("Rust"), "Rust");
    }
}
