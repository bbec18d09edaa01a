//! Blended fuzzy name similarity: Jaro-Winkler + Double Metaphone.

use rphonetic::{DoubleMetaphone, Encoder};

/// Phonetic token-overlap score between two token lists.
///
/// Each token is reduced to its primary Double Metaphone code; the score is
/// the shared-code count over the larger code set. "KRAFT" and "Kraft
/// Dynamics" overlap on one of two codes → 0.5.
pub fn phonetic_token_score(
    metaphone: &DoubleMetaphone,
    tokens_a: &[String],
    tokens_b: &[String],
) -> f64 {
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }
    let codes_a: Vec<String> = tokens_a.iter().map(|t| metaphone.encode(t)).collect();
    let codes_b: Vec<String> = tokens_b.iter().map(|t| metaphone.encode(t)).collect();
    let larger = codes_a.len().max(codes_b.len());
    let shared = codes_a
        .iter()
        .filter(|code| !code.is_empty() && codes_b.iter().any(|other| other == *code))
        .count();
    shared as f64 / larger as f64
}

/// Blend Jaro-Winkler string similarity with the phonetic token score.
///
/// `phonetic_weight` is the phonetic share; the remainder is Jaro-Winkler.
pub fn blended_similarity(jaro_winkler: f64, phonetic: f64, phonetic_weight: f64) -> f64 {
    let w = phonetic_weight.clamp(0.0, 1.0);
    (1.0 - w) * jaro_winkler + w * phonetic
}
