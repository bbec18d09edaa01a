//! Vendor-name normalization.

use followon_core::config::ResolverConfig;
use followon_core::types::collections::{FxHashMap, FxHashSet};

/// Config-driven vendor-name normalizer.
///
/// Lowercases, strips punctuation, drops corporate suffixes, and applies
/// the abbreviation table ("technologies" → "tech") so that
/// "Acme Technologies, Inc." and "ACME TECH LLC" normalize identically.
pub struct NameNormalizer {
    abbreviations: FxHashMap<String, String>,
    drop_suffixes: FxHashSet<String>,
}

impl NameNormalizer {
    pub fn from_config(config: &ResolverConfig) -> Self {
        Self {
            abbreviations: config
                .abbreviations
                .iter()
                .map(|(k, v)| (k.to_ascii_lowercase(), v.to_ascii_lowercase()))
                .collect(),
            drop_suffixes: config
                .drop_suffixes
                .iter()
                .map(|s| s.to_ascii_lowercase())
                .collect(),
        }
    }

    /// Normalize a raw vendor name. Returns an empty string when nothing
    /// survives (e.g. a name that is all punctuation).
    pub fn normalize(&self, name: &str) -> String {
        let mut tokens: Vec<&str> = Vec::new();
        let folded: String = name
            .chars()
            .map(|c| if c.is_alphanumeric() { c.to_ascii_lowercase() } else { ' ' })
            .collect();
        for token in folded.split_whitespace() {
            if self.drop_suffixes.contains(token) {
                continue;
            }
            tokens.push(token);
        }
        tokens
            .iter()
            .map(|t| self.abbreviations.get(*t).map(String::as_str).unwrap_or(t))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Normalized tokens, for phonetic comparison.
    pub fn tokens(&self, name: &str) -> Vec<String> {
        self.normalize(name)
            .split_whitespace()
            .map(String::from)
            .collect()
    }
}
