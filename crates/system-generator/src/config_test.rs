use star_system::SysgenError;
use units::DEFAULT_UNIVERSE_SEED;

use crate::config::{load_config, GeneratorConfig};

#[test]
fn test_defaults() {
    let config = GeneratorConfig::default();
    assert_eq!(config.universe_seed, DEFAULT_UNIVERSE_SEED);
    assert_eq!(config.survivor_radius, 30);
    assert_eq!(config.max_trade_adjustment, 25);
    assert_eq!(config.trade_jitter, 5);
}

#[test]
fn test_partial_json_keeps_defaults() {
    let config = GeneratorConfig::from_json(r#"{ "survivorRadius": 12, "universeSeed": 7 }"#).unwrap();
    assert_eq!(config.survivor_radius, 12);
    assert_eq!(config.universe_seed, 7);
    assert_eq!(config.max_trade_adjustment, 25);
    assert_eq!(config.trade_jitter, 5);
}

#[test]
fn test_bad_json_is_an_error() {
    let err = GeneratorConfig::from_json("{ survivorRadius: }").unwrap_err();
    assert!(matches!(err, SysgenError::Json(_)));
}

#[test]
fn test_missing_file_is_an_error() {
    let err = load_config("/nonexistent/sysgen-config.json").unwrap_err();
    assert!(matches!(err, SysgenError::Io(_)));
}
