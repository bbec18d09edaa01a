//! Top-level configuration aggregating all sub-configs.

use serde::{Deserialize, Serialize};

use super::{DetectionConfig, PerfConfig, ResolverConfig, ScoringConfig, WindowConfig};
use crate::errors::ConfigError;

/// Complete engine configuration.
///
/// Constructed by the host (file and environment layering are the host's
/// concern), validated fail-fast here before any component is built.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct TransitionConfig {
    pub scoring: ScoringConfig,
    pub window: WindowConfig,
    pub resolver: ResolverConfig,
    pub detection: DetectionConfig,
    pub perf: PerfConfig,
}

impl TransitionConfig {
    /// Parse a TOML string and validate the result.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every weight, threshold, and window.
    ///
    /// Fatal by design: a run with a NaN weight or inverted cutpoints would
    /// silently produce misleading detections.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in self.scoring.weight_fields() {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be a finite value between 0.0 and 1.0".to_string(),
                });
            }
        }

        let threshold = self.detection.score_threshold;
        if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) || threshold == 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "detection.score_threshold".to_string(),
                message: "must be in (0.0, 1.0]".to_string(),
            });
        }

        let cuts = self.detection.cutpoints;
        if !cuts.high.is_finite()
            || !cuts.likely.is_finite()
            || !(cuts.likely < cuts.high && cuts.likely > 0.0 && cuts.high <= 1.0)
        {
            return Err(ConfigError::ValidationFailed {
                field: "detection.cutpoints".to_string(),
                message: "cutpoints must satisfy 0.0 < likely < high <= 1.0".to_string(),
            });
        }

        if self.detection.chunk_size == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "detection.chunk_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.detection.max_workers == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "detection.max_workers".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        if self.window.max_lookback_days <= 0 {
            return Err(ConfigError::ValidationFailed {
                field: "window.max_lookback_days".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.window.backdating_tolerance_days < 0 {
            return Err(ConfigError::ValidationFailed {
                field: "window.backdating_tolerance_days".to_string(),
                message: "must not be negative".to_string(),
            });
        }

        let primary = self.resolver.fuzzy_primary_threshold;
        let secondary = self.resolver.fuzzy_secondary_threshold;
        if !primary.is_finite() || !secondary.is_finite() || !(0.0 < secondary && secondary < primary && primary <= 1.0) {
            return Err(ConfigError::ValidationFailed {
                field: "resolver.fuzzy_thresholds".to_string(),
                message: "must satisfy 0.0 < secondary < primary <= 1.0".to_string(),
            });
        }
        let phonetic = self.resolver.phonetic_weight;
        if !phonetic.is_finite() || !(0.0..=1.0).contains(&phonetic) {
            return Err(ConfigError::ValidationFailed {
                field: "resolver.phonetic_weight".to_string(),
                message: "must be a finite value between 0.0 and 1.0".to_string(),
            });
        }

        if !self.perf.target_detections_per_minute.is_finite()
            || self.perf.target_detections_per_minute <= 0.0
        {
            return Err(ConfigError::ValidationFailed {
                field: "perf.target_detections_per_minute".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
