use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_true_variants() {
    for val in ["1", "true", "yes", "on", "TRUE", "On", "  true  "] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_bool_false_variants() {
    for val in ["0", "false", "no", "off", "False"] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_invalid_returns_none() {
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}

// =============================================================================
// ServerConfig
// =============================================================================

#[test]
fn defaults_when_unset() {
    let config = ServerConfig::from_lookup(lookup_from(&[])).expect("config");
    assert_eq!(config, ServerConfig { host: "0.0.0.0".to_owned(), port: 3000, edge_gate: true });
}

#[test]
fn reads_overrides() {
    let config = ServerConfig::from_lookup(lookup_from(&[("HOST", "127.0.0.1"), ("PORT", " 8080 "), ("EDGE_GATE", "off")]))
        .expect("config");
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 8080);
    assert!(!config.edge_gate);
}

#[test]
fn blank_host_falls_back_to_default() {
    let config = ServerConfig::from_lookup(lookup_from(&[("HOST", "  ")])).expect("config");
    assert_eq!(config.host, "0.0.0.0");
}

#[test]
fn invalid_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "http")])).expect_err("port");
    assert!(matches!(err, ConfigError::InvalidPort(ref raw) if raw == "http"));
}

#[test]
fn out_of_range_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).expect_err("port");
    assert!(matches!(err, ConfigError::InvalidPort(_)));
}

#[test]
fn invalid_gate_flag_is_rejected() {
    let err = ServerConfig::from_lookup(lookup_from(&[("EDGE_GATE", "sometimes")])).expect_err("flag");
    assert!(matches!(err, ConfigError::InvalidFlag(_)));
}
