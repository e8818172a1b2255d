use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "BAZAAR_ENV"));
}

#[test]
fn build_app_config_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.vendors_path, PathBuf::from("./config/vendors.yaml"));
    assert!(cfg.default_delivery_radius_km.is_none());
    assert_eq!(cfg.currency_symbol, "₹");
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("BAZAAR_ENV", "production");
    map.insert("BAZAAR_LOG_LEVEL", "debug");
    map.insert("BAZAAR_VENDORS_PATH", "/etc/bazaar/vendors.yaml");
    map.insert("BAZAAR_CURRENCY_SYMBOL", "Rs. ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(cfg.vendors_path, PathBuf::from("/etc/bazaar/vendors.yaml"));
    assert_eq!(cfg.currency_symbol, "Rs. ");
}

#[test]
fn default_delivery_radius_override() {
    let mut map = HashMap::new();
    map.insert("BAZAAR_DEFAULT_DELIVERY_RADIUS_KM", "7.5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.default_delivery_radius_km, Some(7.5));
    assert_eq!(cfg.delivery_policy().default_radius_km, Some(7.5));
}

#[test]
fn default_delivery_radius_absent_means_unbounded_policy() {
    let map = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.delivery_policy(), crate::DeliveryPolicy::unbounded());
}

#[test]
fn default_delivery_radius_invalid() {
    let mut map = HashMap::new();
    map.insert("BAZAAR_DEFAULT_DELIVERY_RADIUS_KM", "far");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "BAZAAR_DEFAULT_DELIVERY_RADIUS_KM"),
        "expected InvalidEnvVar(BAZAAR_DEFAULT_DELIVERY_RADIUS_KM), got: {result:?}"
    );
}

#[test]
fn default_delivery_radius_rejects_negative() {
    let mut map = HashMap::new();
    map.insert("BAZAAR_DEFAULT_DELIVERY_RADIUS_KM", "-2");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "BAZAAR_DEFAULT_DELIVERY_RADIUS_KM"),
        "expected InvalidEnvVar(BAZAAR_DEFAULT_DELIVERY_RADIUS_KM), got: {result:?}"
    );
}

#[test]
fn default_delivery_radius_rejects_infinity() {
    let mut map = HashMap::new();
    map.insert("BAZAAR_DEFAULT_DELIVERY_RADIUS_KM", "inf");
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_err(), "expected error, got: {result:?}");
}
