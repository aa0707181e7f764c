use super::*;
use serial_test::serial;
use std::env;

#[test]
fn test_override_targets_generate_under_base() {
    let config = Config::from_override(Some("https://api.example.com/v2"));
    assert_eq!(config.api_url, "https://api.example.com/v2");
    assert_eq!(config.generate_url(), "https://api.example.com/v2/generate");
}

#[test]
fn test_no_override_uses_default() {
    let config = Config::from_override(None);
    assert_eq!(config.api_url, DEFAULT_API_URL);
    assert_eq!(config.generate_url(), "http://localhost:5000/api/generate");
}

#[test]
fn test_empty_override_counts_as_unset() {
    assert_eq!(Config::from_override(Some("")), Config::default());
    assert_eq!(Config::from_override(Some("   ")), Config::default());
}

#[test]
fn test_trailing_slash_is_ignored() {
    let config = Config::default().with_api_url("http://backend:8000/api/");
    assert_eq!(config.generate_url(), "http://backend:8000/api/generate");
}

#[test]
#[serial]
fn test_new_respects_env_var() {
    unsafe {
        env::set_var(API_URL_ENV, "http://from-env:9000/api");
    }

    let config = Config::new();
    assert_eq!(config.generate_url(), "http://from-env:9000/api/generate");

    unsafe {
        env::remove_var(API_URL_ENV);
    }
}

#[test]
#[serial]
fn test_new_without_env_var_uses_default() {
    unsafe {
        env::remove_var(API_URL_ENV);
    }

    assert_eq!(Config::new(), Config::default());
}

#[test]
#[serial]
fn test_explicit_url_beats_env_var() {
    // Precedence: CLI flag > env var > default
    unsafe {
        env::set_var(API_URL_ENV, "http://from-env:9000/api");
    }

    let config = Config::resolve(Some("http://explicit:7777".to_string()));
    assert_eq!(config.api_url, "http://explicit:7777");

    let config = Config::resolve(None);
    assert_eq!(config.api_url, "http://from-env:9000/api");

    unsafe {
        env::remove_var(API_URL_ENV);
    }
}
