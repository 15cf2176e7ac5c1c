// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for `config.rs`

use super::*;
use std::io::Write;

const SAMPLE: &str = r#"
# Grid master connection
[NIOS]
gm = '192.168.1.10'
api_version = "v2.12"
valid_cert = 'false'
user = 'admin'
pass = 'infoblox'
"#;

#[test]
fn test_parse_sample_config() {
    let config = GridConfig::parse_ini(SAMPLE).unwrap();

    assert_eq!(config.gm, "192.168.1.10");
    assert_eq!(config.api_version, "v2.12");
    assert!(!config.valid_cert);
    assert_eq!(config.user, "admin");
    assert_eq!(config.password, "infoblox");
    assert_eq!(
        config.timeout,
        Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
    );
    assert_eq!(config.lock_method, LockMethod::Update);
}

#[test]
fn test_valid_cert_true() {
    let ini = SAMPLE.replace("valid_cert = 'false'", "valid_cert = true");
    let config = GridConfig::parse_ini(&ini).unwrap();
    assert!(config.valid_cert);
}

#[test]
fn test_valid_cert_missing_defaults_to_false() {
    let ini = SAMPLE.replace("valid_cert = 'false'\n", "");
    let config = GridConfig::parse_ini(&ini).unwrap();
    assert!(!config.valid_cert);
}

#[test]
fn test_valid_cert_invalid_value() {
    let ini = SAMPLE.replace("valid_cert = 'false'", "valid_cert = maybe");
    let err = GridConfig::parse_ini(&ini).unwrap_err();
    assert!(matches!(err, ZoneLockError::Config { .. }));
    assert!(err.to_string().contains("maybe"));
}

#[test]
fn test_optional_timeout_and_lock_method() {
    let ini = format!("{SAMPLE}timeout = 5\nlock_method = 'function'\n");
    let config = GridConfig::parse_ini(&ini).unwrap();
    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(config.lock_method, LockMethod::Function);
}

#[test]
fn test_zero_timeout_rejected() {
    let ini = format!("{SAMPLE}timeout = 0\n");
    assert!(GridConfig::parse_ini(&ini).is_err());
}

#[test]
fn test_unknown_lock_method_rejected() {
    let ini = format!("{SAMPLE}lock_method = patch\n");
    let err = GridConfig::parse_ini(&ini).unwrap_err();
    assert!(err.to_string().contains("patch"));
}

#[test]
fn test_missing_section() {
    let err = GridConfig::parse_ini("[OTHER]\ngm = x\n").unwrap_err();
    assert!(err.to_string().contains("[NIOS]"));
}

#[test]
fn test_missing_required_key() {
    let ini = SAMPLE.replace("pass = 'infoblox'\n", "");
    let err = GridConfig::parse_ini(&ini).unwrap_err();
    assert!(err.to_string().contains("'pass'"));
}

#[test]
fn test_empty_required_key() {
    let ini = SAMPLE.replace("user = 'admin'", "user = ''");
    let err = GridConfig::parse_ini(&ini).unwrap_err();
    assert!(err.to_string().contains("'user'"));
    assert!(err.to_string().contains("empty"));
}

#[test]
fn test_keys_are_case_insensitive_and_colon_separated() {
    let ini = "[NIOS]\nGM: gm.example.com\nAPI_VERSION: v2.10\nUser: a\nPass: b\n";
    let config = GridConfig::parse_ini(ini).unwrap();
    assert_eq!(config.gm, "gm.example.com");
    assert_eq!(config.api_version, "v2.10");
}

#[test]
fn test_key_outside_section() {
    let err = GridConfig::parse_ini("gm = x\n[NIOS]\n").unwrap_err();
    assert!(err.to_string().contains("line 1"));
}

#[test]
fn test_unterminated_section_header() {
    let err = GridConfig::parse_ini("[NIOS\ngm = x\n").unwrap_err();
    assert!(err.to_string().contains("unterminated"));
}

#[test]
fn test_password_with_equals_sign() {
    let ini = SAMPLE.replace("pass = 'infoblox'", "pass = 'a=b'");
    let config = GridConfig::parse_ini(&ini).unwrap();
    assert_eq!(config.password, "a=b");
}

#[test]
fn test_debug_redacts_password() {
    let config = GridConfig::parse_ini(SAMPLE).unwrap();
    let rendered = format!("{config:?}");
    assert!(!rendered.contains("infoblox"));
    assert!(rendered.contains("<redacted>"));
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE.as_bytes()).unwrap();

    let config = GridConfig::from_file(file.path()).unwrap();
    assert_eq!(config.gm, "192.168.1.10");
}

#[test]
fn test_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = GridConfig::from_file(dir.path().join("gm.ini")).unwrap_err();
    assert!(matches!(err, ZoneLockError::Config { .. }));
    assert!(err.to_string().contains("gm.ini"));
}

#[test]
fn test_lock_method_from_str() {
    assert_eq!("PUT".parse::<LockMethod>().unwrap(), LockMethod::Update);
    assert_eq!(
        "lock_unlock_zone".parse::<LockMethod>().unwrap(),
        LockMethod::Function
    );
}
