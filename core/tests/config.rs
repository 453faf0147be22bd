use std::time::Duration;
use wikipath_core::{ConfigError, SearchConfig};

#[test]
fn test_default_config() {
    let config = SearchConfig::default();

    assert_eq!(config.beta, 10.0);
    assert_eq!(config.max_depth, 10);
    assert_eq!(config.max_time, Duration::from_secs(60));
}

#[test]
fn test_valid_config() {
    let config = SearchConfig::new(2.5, 4, Duration::from_secs(15)).unwrap();

    assert_eq!(config.beta, 2.5);
    assert_eq!(config.max_depth, 4);
    assert_eq!(config.max_time, Duration::from_secs(15));
}

#[test]
fn test_rejects_non_positive_or_non_finite_beta() {
    for beta in [0.0, -1.0, f32::NAN, f32::INFINITY] {
        let result = SearchConfig::new(beta, 10, Duration::from_secs(60));
        assert!(matches!(result, Err(ConfigError::InvalidBeta(_))));
    }
}

#[test]
fn test_rejects_zero_depth() {
    let result = SearchConfig::new(10.0, 0, Duration::from_secs(60));
    assert_eq!(result.unwrap_err(), ConfigError::InvalidMaxDepth(0));
}

#[test]
fn test_rejects_zero_time() {
    let result = SearchConfig::new(10.0, 10, Duration::ZERO);
    assert_eq!(result.unwrap_err(), ConfigError::InvalidMaxTime(Duration::ZERO));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        ConfigError::InvalidMaxDepth(0).to_string(),
        "max depth must be at least 1, got 0"
    );
    assert_eq!(
        ConfigError::InvalidBeta(-1.0).to_string(),
        "beta must be a positive finite number, got -1"
    );
}
