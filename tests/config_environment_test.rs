// ABOUTME: Integration tests for environment-based server configuration
// ABOUTME: Mutates process environment variables, so every test runs serially
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pierre_anthropometry::config::{ConfigError, Environment, ServerConfig};
use serial_test::serial;
use std::env;
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

const VARS: [&str; 6] = [
    "HTTP_PORT",
    "PORT",
    "HOST",
    "CORS_ALLOWED_ORIGINS",
    "RECOMMENDATIONS_PATH",
    "ENVIRONMENT",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.http_port, 5000);
    assert_eq!(config.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.cors.allowed_origins, "*");
    assert!(config.recommendations_path.is_none());
}

#[test]
#[serial]
fn test_http_port_wins_over_port() {
    clear_env();
    env::set_var("PORT", "8080");
    env::set_var("HTTP_PORT", "9090");

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.http_port, 9090);

    env::remove_var("HTTP_PORT");
    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.http_port, 8080);

    clear_env();
}

#[test]
#[serial]
fn test_invalid_port_is_reported() {
    clear_env();
    env::set_var("HTTP_PORT", "not-a-port");

    let result = ServerConfig::from_env();
    assert!(matches!(
        result,
        Err(ConfigError::InvalidPort { var: "HTTP_PORT", .. })
    ));

    clear_env();
}

#[test]
#[serial]
fn test_invalid_host_is_reported() {
    clear_env();
    env::set_var("HOST", "local host");

    assert!(matches!(
        ServerConfig::from_env(),
        Err(ConfigError::InvalidHost { .. })
    ));

    clear_env();
}

#[test]
#[serial]
fn test_catalog_path_and_environment() {
    clear_env();
    env::set_var("RECOMMENDATIONS_PATH", "/etc/pierre/catalog.yaml");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("CORS_ALLOWED_ORIGINS", "https://app.example.com");

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(
        config.recommendations_path,
        Some(PathBuf::from("/etc/pierre/catalog.yaml"))
    );
    assert!(config.environment.is_production());
    assert_eq!(config.cors.allowed_origins, "https://app.example.com");
    assert!(config.summary().contains("/etc/pierre/catalog.yaml"));

    clear_env();
}

#[test]
#[serial]
fn test_empty_catalog_path_is_rejected() {
    clear_env();
    env::set_var("RECOMMENDATIONS_PATH", "  ");

    assert!(matches!(
        ServerConfig::from_env(),
        Err(ConfigError::EmptyPath { .. })
    ));

    clear_env();
}
