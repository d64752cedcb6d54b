//! Config Tests
//!
//! Tests verify:
//! - Defaults and the builder
//! - Validation of zero capacity / bound
//! - JSON loading from strings and files, with partial documents

use std::io::Write;

use algokit::config::Config;
use algokit::sorting::SortAlgorithm;
use algokit::AlgoError;
use tempfile::NamedTempFile;

// =============================================================================
// Builder Tests
// =============================================================================

#[test]
fn test_default_config_is_valid() {
    let config = Config::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.sort_algorithm, SortAlgorithm::Merge);
    assert_eq!(config.seed, None);
}

#[test]
fn test_builder_sets_fields() {
    let config = Config::builder()
        .queue_capacity(32)
        .sort_algorithm(SortAlgorithm::Heap)
        .sample_size(10)
        .sample_bound(1000)
        .seed(42)
        .log_filter("warn")
        .build()
        .unwrap();

    assert_eq!(config.queue_capacity, 32);
    assert_eq!(config.sort_algorithm, SortAlgorithm::Heap);
    assert_eq!(config.sample_size, 10);
    assert_eq!(config.sample_bound, 1000);
    assert_eq!(config.seed, Some(42));
    assert_eq!(config.log_filter, "warn");
}

#[test]
fn test_builder_rejects_zero_capacity() {
    let result = Config::builder().queue_capacity(0).build();
    assert!(matches!(result, Err(AlgoError::Config(_))));
}

#[test]
fn test_builder_rejects_zero_bound() {
    let result = Config::builder().sample_bound(0).build();
    assert!(matches!(result, Err(AlgoError::Config(_))));
}

// =============================================================================
// JSON Tests
// =============================================================================

#[test]
fn test_partial_json_uses_defaults() {
    let config = Config::from_json_str(r#"{ "sort_algorithm": "quick", "seed": 7 }"#).unwrap();

    assert_eq!(config.sort_algorithm, SortAlgorithm::Quick);
    assert_eq!(config.seed, Some(7));
    assert_eq!(config.queue_capacity, Config::default().queue_capacity);
}

#[test]
fn test_json_algorithm_names_match_cli_spelling() {
    for name in ["Quick", "HEAP", " shell "] {
        let json = format!(r#"{{ "sort_algorithm": "{}" }}"#, name);
        let config = Config::from_json_str(&json).unwrap();
        assert_eq!(config.sort_algorithm, name.parse::<SortAlgorithm>().unwrap());
    }
}

#[test]
fn test_algorithm_serializes_lowercase() {
    let json = serde_json::to_string(&SortAlgorithm::Insertion).unwrap();
    assert_eq!(json, r#""insertion""#);
}

#[test]
fn test_json_round_trip() {
    let config = Config::builder()
        .sort_algorithm(SortAlgorithm::Shell)
        .seed(3)
        .build()
        .unwrap();
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(Config::from_json_str(&json).unwrap(), config);
}

#[test]
fn test_invalid_json_is_config_error() {
    let result = Config::from_json_str("{ not json");
    assert!(matches!(result, Err(AlgoError::Config(_))));
}

#[test]
fn test_unknown_algorithm_in_json() {
    let result = Config::from_json_str(r#"{ "sort_algorithm": "bogo" }"#);
    assert!(matches!(result, Err(AlgoError::Config(_))));
}

#[test]
fn test_json_validation_applies() {
    let result = Config::from_json_str(r#"{ "queue_capacity": 0 }"#);
    assert!(matches!(result, Err(AlgoError::Config(_))));
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "queue_capacity": 4, "sample_size": 20 }}"#).unwrap();

    let config = Config::from_json_file(file.path()).unwrap();
    assert_eq!(config.queue_capacity, 4);
    assert_eq!(config.sample_size, 20);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Config::from_json_file(&dir.path().join("missing.json"));
    assert!(matches!(result, Err(AlgoError::Io(_))));
}
