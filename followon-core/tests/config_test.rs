//! Tests for the Followon configuration system.

use followon_core::config::TransitionConfig;
use followon_core::errors::ConfigError;

#[test]
fn test_defaults_validate() {
    let config = TransitionConfig::default();
    assert!(config.validate().is_ok());
}

#[test]
fn test_from_toml_overrides_weights() {
    let config = TransitionConfig::from_toml(
        r#"
[scoring]
same_agency = 0.4

[detection]
score_threshold = 0.75
chunk_size = 100
"#,
    )
    .unwrap();

    assert_eq!(config.scoring.same_agency, 0.4);
    assert_eq!(config.detection.score_threshold, 0.75);
    assert_eq!(config.detection.chunk_size, 100);
    // Untouched sections keep compiled defaults
    assert_eq!(config.scoring.base_score, 0.30);
    assert_eq!(config.window.max_lookback_days, 730);
}

#[test]
fn test_out_of_range_weight_is_fatal() {
    let result = TransitionConfig::from_toml(
        r#"
[scoring]
same_agency = 1.5
"#,
    );
    match result {
        Err(ConfigError::ValidationFailed { field, .. }) => {
            assert_eq!(field, "scoring.same_agency");
        }
        other => panic!("expected ValidationFailed, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_zero_threshold_is_fatal() {
    let mut config = TransitionConfig::default();
    config.detection.score_threshold = 0.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationFailed { .. })
    ));
}

#[test]
fn test_inverted_cutpoints_are_fatal() {
    let mut config = TransitionConfig::default();
    config.detection.cutpoints.likely = 0.9;
    config.detection.cutpoints.high = 0.7;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationFailed { field, .. }) if field == "detection.cutpoints"
    ));
}

#[test]
fn test_secondary_fuzzy_threshold_must_be_below_primary() {
    let mut config = TransitionConfig::default();
    config.resolver.fuzzy_secondary_threshold = 0.95;
    assert!(config.validate().is_err());
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let result = TransitionConfig::from_toml("scoring = not valid toml");
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn test_toml_roundtrip() {
    let config = TransitionConfig::default();
    let toml = config.to_toml().unwrap();
    let parsed = TransitionConfig::from_toml(&toml).unwrap();
    assert_eq!(parsed, config);
}
