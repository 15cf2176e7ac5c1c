// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

// Common test utilities for integration tests

#![allow(dead_code)]

use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use std::time::Duration;
use wiremock::matchers::{basic_auth, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zonelock::config::{GridConfig, LockMethod};

pub const API_VERSION: &str = "v2.12";
pub const USER: &str = "admin";
pub const PASSWORD: &str = "infoblox";

/// Grid configuration pointing at a mock grid master
pub fn grid_config(server: &MockServer) -> GridConfig {
    GridConfig {
        gm: server.uri(),
        api_version: API_VERSION.to_string(),
        valid_cert: false,
        user: USER.to_string(),
        password: PASSWORD.to_string(),
        timeout: Duration::from_secs(5),
        lock_method: LockMethod::Update,
    }
}

/// Write an INI file for the mock grid master and return its path
pub fn write_ini(dir: &Path, server: &MockServer, extra: &str) -> PathBuf {
    let contents = format!(
        "[NIOS]\ngm = '{}'\napi_version = '{API_VERSION}'\nvalid_cert = 'false'\nuser = '{USER}'\npass = '{PASSWORD}'\n{extra}",
        server.uri()
    );
    let ini = dir.join("gm.ini");
    std::fs::write(&ini, contents).expect("failed to write test ini");
    ini
}

/// WAPI reference for a test zone
pub fn zone_ref(fqdn: &str) -> String {
    format!("zone_auth/ZG5zLnpvbmUkLl9kZWZhdWx0:{fqdn}/default")
}

/// URL path of a test zone object
pub fn zone_path(fqdn: &str) -> String {
    format!("/wapi/{API_VERSION}/{}", zone_ref(fqdn))
}

/// URL path of the zone list endpoint
pub fn zone_list_path() -> String {
    format!("/wapi/{API_VERSION}/zone_auth")
}

/// A `zone_auth` object as the grid returns it
pub fn zone_json(fqdn: &str, locked: bool) -> Value {
    let mut zone = json!({
        "_ref": zone_ref(fqdn),
        "fqdn": fqdn,
        "locked": locked,
    });
    if locked {
        zone["locked_by"] = json!(USER);
    }
    zone
}

/// Mount the unfiltered zone list, expected exactly once
pub async fn mount_all_zones(server: &MockServer, zones: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path(zone_list_path()))
        .and(basic_auth(USER, PASSWORD))
        .and(query_param("_return_fields", "fqdn,locked,locked_by"))
        .and(query_param_is_missing("fqdn"))
        .respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(zones)))
        .expect(1)
        .named("list all zones")
        .mount(server)
        .await;
}

/// Mount a filtered zone lookup, expected exactly once
pub async fn mount_named_zone(server: &MockServer, fqdn: &str, zones: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path(zone_list_path()))
        .and(basic_auth(USER, PASSWORD))
        .and(query_param("_return_fields", "fqdn,locked,locked_by"))
        .and(query_param("fqdn", fqdn))
        .respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(zones)))
        .expect(1)
        .named("list named zone")
        .mount(server)
        .await;
}

/// Assert that no mutation of any kind reaches the grid
pub async fn expect_no_mutations(server: &MockServer) {
    for verb in ["PUT", "POST"] {
        Mock::given(method(verb))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .named(format!("no {verb} calls"))
            .mount(server)
            .await;
    }
}

/// Mount a successful lock-flag update for one zone, expected exactly once
pub async fn mount_lock_update(server: &MockServer, fqdn: &str, locked: bool) {
    Mock::given(method("PUT"))
        .and(path(zone_path(fqdn)))
        .and(basic_auth(USER, PASSWORD))
        .and(wiremock::matchers::body_json(json!({ "locked": locked })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(zone_ref(fqdn))))
        .expect(1)
        .named(format!("update {fqdn}"))
        .mount(server)
        .await;
}
