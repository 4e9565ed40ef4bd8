//! Loading distance configuration from JSON files.

use std::io::Write;

use osadist::distance::{DistanceConfig, DistanceEngine, SubstitutionMode, SymbolMode};
use osadist::error::EditDistanceError;
use tempfile::NamedTempFile;

fn write_config(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_config_file() {
    let file = write_config(
        r#"{
            "weights": {"swap": 0, "insert": 2},
            "substitution": "canonical",
            "symbols": "graphemes"
        }"#,
    );

    let config = DistanceConfig::<f64>::from_json_file(file.path()).unwrap();
    assert_eq!(config.substitution, SubstitutionMode::Canonical);
    assert_eq!(config.symbols, SymbolMode::Graphemes);

    let engine = DistanceEngine::new(config).unwrap();
    assert_eq!(engine.weights().swap, 0.0);
    assert_eq!(engine.weights().delete, 1.0);
    assert_eq!(engine.distance_str("ab", "ba"), 0.0);
    assert_eq!(engine.distance_str("", "abc"), 6.0);
}

#[test]
fn test_missing_file() {
    let result = DistanceConfig::<u32>::from_json_file("/nonexistent/osadist.json");
    assert!(matches!(result, Err(EditDistanceError::Config(_))));
}

#[test]
fn test_invalid_weight_in_file() {
    let file = write_config(r#"{"weights": {"substitute": -0.5}}"#);
    let result = DistanceConfig::<f64>::from_json_file(file.path());
    assert!(matches!(result, Err(EditDistanceError::InvalidWeight { .. })));
}

#[test]
fn test_integer_config_round_trip() {
    let config = DistanceConfig::<u32>::from_json_str(r#"{"weights": {"delete": 4}}"#).unwrap();
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(DistanceConfig::<u32>::from_json_str(&json).unwrap(), config);

    let engine = DistanceEngine::new(config).unwrap();
    assert_eq!(engine.distance_str("abc", ""), 12);
}
