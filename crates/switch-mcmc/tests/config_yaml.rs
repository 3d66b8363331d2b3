use std::io::Write;

use switch_core::SwitchError;
use switch_mcmc::{ChainConfig, SeedPolicy};

#[test]
fn missing_fields_take_defaults() {
    let config = ChainConfig::from_yaml_str("iterations: 250\n").unwrap();
    assert_eq!(config.iterations, 250);
    assert_eq!(config.burn_in, 500);
    assert_eq!(config.call_every, 100);
    assert_eq!(config.seed_policy, SeedPolicy::default());
    assert_eq!(ChainConfig::from_yaml_str("{}").unwrap(), ChainConfig::default());
}

#[test]
fn yaml_round_trip_preserves_seed_policy() {
    let mut config = ChainConfig::default();
    config.seed_policy.master_seed = 99;
    config.seed_policy.label = Some("x01".to_string());
    let yaml = config.to_yaml_string().unwrap();
    assert_eq!(ChainConfig::from_yaml_str(&yaml).unwrap(), config);
}

#[test]
fn load_reads_and_validates_files() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "iterations: 10\nburn_in: 2\ncall_every: 1\nseed_policy:\n  master_seed: 7").unwrap();
    let config = ChainConfig::load(file.path()).unwrap();
    assert_eq!(config.seed_policy.master_seed, 7);
    assert_eq!(config.burn_in, 2);

    let mut bad = tempfile::NamedTempFile::new().unwrap();
    writeln!(bad, "call_every: 0").unwrap();
    let err = ChainConfig::load(bad.path()).unwrap_err();
    assert_eq!(err.info().code, "invalid-call-every");
}

#[test]
fn unreadable_inputs_are_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = ChainConfig::load(dir.path().join("missing.yaml")).unwrap_err();
    assert!(matches!(err, SwitchError::Io(_)));
    let err = ChainConfig::from_yaml_str("iterations: [1, 2]").unwrap_err();
    assert!(matches!(err, SwitchError::Config(_)));
}

#[test]
fn errors_serialise_with_family_tags() {
    let err = ChainConfig::from_yaml_str("call_every: nope").unwrap_err();
    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(json["family"], "Config");
    assert_eq!(json["detail"]["code"], "yaml-deserialize");
}
