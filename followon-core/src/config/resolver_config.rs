//! Entity-resolver configuration.

use serde::{Deserialize, Serialize};

/// Thresholds and normalization tables for vendor-identity matching.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ResolverConfig {
    /// Fuzzy-name similarity at or above which a match is auto-accepted.
    pub fuzzy_primary_threshold: f64,
    /// Lower similarity accepted only with a corroborating weak signal
    /// (e.g. matching funding agency).
    pub fuzzy_secondary_threshold: f64,
    /// Weight of the phonetic token score in the blended similarity;
    /// the remainder is Jaro-Winkler.
    pub phonetic_weight: f64,
    /// Abbreviation normalization pairs applied to vendor names,
    /// e.g. "technologies" → "tech".
    pub abbreviations: Vec<(String, String)>,
    /// Corporate suffixes dropped entirely during normalization.
    pub drop_suffixes: Vec<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            fuzzy_primary_threshold: 0.90,
            fuzzy_secondary_threshold: 0.82,
            phonetic_weight: 0.25,
            abbreviations: default_abbreviations(),
            drop_suffixes: default_suffixes(),
        }
    }
}

fn default_abbreviations() -> Vec<(String, String)> {
    [
        ("technologies", "tech"),
        ("technology", "tech"),
        ("laboratories", "labs"),
        ("laboratory", "lab"),
        ("international", "intl"),
        ("manufacturing", "mfg"),
        ("associates", "assoc"),
        ("engineering", "eng"),
        ("solutions", "sol"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

fn default_suffixes() -> Vec<String> {
    [
        "inc", "incorporated", "llc", "llp", "lp", "ltd", "plc", "pllc", "co", "corp",
        "corporation", "company",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
