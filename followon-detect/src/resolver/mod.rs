//! Vendor entity resolution.
//!
//! Identity priority: UEI > CAGE > DUNS > normalized company name. An
//! exact-identifier match always dominates fuzzy-name matching; fuzzy
//! matching runs against a two-tier threshold where the lower tier also
//! requires a corroborating weak signal from the caller.

pub mod fuzzy;
pub mod normalize;

use rphonetic::{DoubleMetaphone, Encoder};
use serde::{Deserialize, Serialize};

use followon_core::config::ResolverConfig;
use followon_core::types::VendorIdentity;

pub use normalize::NameNormalizer;

/// Canonical vendor key, in identity-priority order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanonicalVendorKey {
    Uei(String),
    Cage(String),
    Duns(String),
    /// Normalized vendor name — the weakest canonical form.
    Name(String),
}

impl CanonicalVendorKey {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Uei(_) => "uei",
            Self::Cage(_) => "cage",
            Self::Duns(_) => "duns",
            Self::Name(_) => "name",
        }
    }
}

/// Strength of an identity match between two vendor records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchStrength {
    /// A shared identifier (UEI, CAGE, or DUNS) matched exactly.
    ExactId,
    /// Normalized names matched above the fuzzy threshold.
    FuzzyName,
    /// No usable identity overlap.
    None,
}

/// Resolves vendor records to canonical keys and compares identities.
pub struct EntityResolver {
    config: ResolverConfig,
    normalizer: NameNormalizer,
    metaphone: DoubleMetaphone,
}

impl EntityResolver {
    pub fn new(config: ResolverConfig) -> Self {
        let normalizer = NameNormalizer::from_config(&config);
        Self {
            config,
            normalizer,
            metaphone: DoubleMetaphone::default(),
        }
    }

    /// Map a vendor record to its canonical key, or `None` when the record
    /// carries no usable identity at all.
    pub fn resolve_vendor_id(&self, identity: &VendorIdentity<'_>) -> Option<CanonicalVendorKey> {
        if let Some(uei) = clean_id(identity.uei) {
            return Some(CanonicalVendorKey::Uei(uei));
        }
        if let Some(cage) = clean_id(identity.cage) {
            return Some(CanonicalVendorKey::Cage(cage));
        }
        if let Some(duns) = clean_id(identity.duns) {
            return Some(CanonicalVendorKey::Duns(duns));
        }
        if let Some(name) = identity.name {
            let normalized = self.normalizer.normalize(name);
            if !normalized.is_empty() {
                return Some(CanonicalVendorKey::Name(normalized));
            }
        }
        None
    }

    /// Match strength between two vendor records.
    ///
    /// `corroborated` is the caller-supplied weak signal (e.g. matching
    /// funding agency) that unlocks the secondary fuzzy threshold.
    pub fn match_strength(
        &self,
        a: &VendorIdentity<'_>,
        b: &VendorIdentity<'_>,
        corroborated: bool,
    ) -> MatchStrength {
        if ids_match(a.uei, b.uei) || ids_match(a.cage, b.cage) || ids_match(a.duns, b.duns) {
            return MatchStrength::ExactId;
        }

        let (Some(name_a), Some(name_b)) = (a.name, b.name) else {
            return MatchStrength::None;
        };
        let similarity = self.name_similarity(name_a, name_b);
        if similarity >= self.config.fuzzy_primary_threshold {
            MatchStrength::FuzzyName
        } else if similarity >= self.config.fuzzy_secondary_threshold && corroborated {
            MatchStrength::FuzzyName
        } else {
            MatchStrength::None
        }
    }

    /// Blended name similarity in [0, 1] over normalized names.
    pub fn name_similarity(&self, a: &str, b: &str) -> f64 {
        let norm_a = self.normalizer.normalize(a);
        let norm_b = self.normalizer.normalize(b);
        if norm_a.is_empty() || norm_b.is_empty() {
            return 0.0;
        }
        if norm_a == norm_b {
            return 1.0;
        }
        let jw = strsim::jaro_winkler(&norm_a, &norm_b);
        let phonetic = fuzzy::phonetic_token_score(
            &self.metaphone,
            &self.normalizer.tokens(a),
            &self.normalizer.tokens(b),
        );
        fuzzy::blended_similarity(jw, phonetic, self.config.phonetic_weight)
    }

    /// Coarse blocking key for candidate indexing: the phonetic code of the
    /// first normalized name token. Names that could fuzzy-match almost
    /// always share it, so the pipeline only scores within a block.
    pub fn name_block_key(&self, name: &str) -> Option<String> {
        let tokens = self.normalizer.tokens(name);
        let first = tokens.first()?;
        let code = self.metaphone.encode(first);
        if code.is_empty() {
            Some(first.clone())
        } else {
            Some(code)
        }
    }

    pub fn normalizer(&self) -> &NameNormalizer {
        &self.normalizer
    }
}

fn clean_id(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_ascii_uppercase())
    }
}

fn ids_match(a: Option<&str>, b: Option<&str>) -> bool {
    match (a.map(str::trim), b.map(str::trim)) {
        (Some(a), Some(b)) if !a.is_empty() && !b.is_empty() => a.eq_ignore_ascii_case(b),
        _ => false,
    }
}
