//! Configuration Tests.

use rvpipe_core::common::error::SimError;
use rvpipe_core::config::Config;

#[test]
fn defaults_describe_a_bare_metal_run() {
    let config = Config::default();
    assert_eq!(config.memory.base, 0x8000_0000);
    assert_eq!(config.general.start_pc, config.memory.base);
    assert!(config.general.direct_mode);
    assert!(!config.general.trace_instructions);
    assert_eq!(config.memory.latency, 0);
    assert_eq!(config.csr.latency, 1);
    assert_eq!(config.csr.mtvec, config.memory.base);
}

#[test]
fn empty_document_uses_defaults() {
    let config = Config::from_json("{}").expect("parse");
    let default = Config::default();
    assert_eq!(config.memory.size, default.memory.size);
    assert_eq!(config.general.max_cycles, default.general.max_cycles);
    assert!(config.general.direct_mode);
}

#[test]
fn partial_sections_keep_other_fields() {
    let json = r#"{ "memory": { "latency": 3 }, "general": { "direct_mode": false } }"#;
    let config = Config::from_json(json).expect("parse");
    assert_eq!(config.memory.latency, 3);
    assert_eq!(config.memory.base, 0x8000_0000);
    assert!(!config.general.direct_mode);
    assert_eq!(config.general.start_pc, 0x8000_0000);
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = Config::from_json("{ \"memory\": ").unwrap_err();
    assert!(matches!(err, SimError::Config(_)));
    assert!(err.to_string().starts_with("invalid configuration"));
}

#[test]
fn wrong_field_type_is_rejected() {
    let json = r#"{ "memory": { "size": "big" } }"#;
    assert!(Config::from_json(json).is_err());
}
