// ABOUTME: Integration tests for environment-driven server configuration
// ABOUTME: Verifies defaults, overrides, and rejection of invalid values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use liftlog::config::{environment::parse_delimiter, Environment, ServerConfig};
use serial_test::serial;
use std::env;

const CONFIG_VARS: &[&str] = &[
    "HOST",
    "HTTP_PORT",
    "ENVIRONMENT",
    "CORS_ALLOWED_ORIGINS",
    "CHART_RENDERING_ENABLED",
    "CHART_WIDTH",
    "CHART_HEIGHT",
    "CSV_DELIMITER",
    "MAX_UPLOAD_BYTES",
];

fn clear_config_env() {
    for var in CONFIG_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_config_env();

    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config, ServerConfig::default());
    assert_eq!(config.bind_address(), "0.0.0.0:8080");
    assert_eq!(config.analysis.max_upload_bytes, 10 * 1024 * 1024);
    assert!(config.analysis.render_charts);
    assert_eq!(config.analysis.csv_delimiter, b',');
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_config_env();
    env::set_var("HOST", "127.0.0.1");
    env::set_var("HTTP_PORT", "9100");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("CORS_ALLOWED_ORIGINS", "https://lifts.example.com");
    env::set_var("CHART_RENDERING_ENABLED", "false");
    env::set_var("CHART_WIDTH", "800");
    env::set_var("CSV_DELIMITER", ";");
    env::set_var("MAX_UPLOAD_BYTES", "4096");

    let config = ServerConfig::from_env().unwrap();
    clear_config_env();

    assert_eq!(config.bind_address(), "127.0.0.1:9100");
    assert!(config.environment.is_production());
    assert_eq!(config.cors.allowed_origins, "https://lifts.example.com");
    assert!(!config.analysis.render_charts);
    assert_eq!(config.analysis.chart_width, 800);
    assert_eq!(config.analysis.chart_height, 600);
    assert_eq!(config.analysis.csv_delimiter, b';');
    assert_eq!(config.analysis.max_upload_bytes, 4096);
    assert!(config.summary().contains("Chart Rendering: Disabled"));
}

#[test]
#[serial]
fn test_invalid_port_is_rejected_with_context() {
    clear_config_env();
    env::set_var("HTTP_PORT", "eighty");

    let err = ServerConfig::from_env().unwrap_err();
    clear_config_env();

    assert!(err.to_string().contains("Invalid HTTP_PORT value"));
}

#[test]
#[serial]
fn test_zero_chart_size_is_rejected() {
    clear_config_env();
    env::set_var("CHART_HEIGHT", "0");

    let result = ServerConfig::from_env();
    clear_config_env();

    assert!(result.is_err());
}

#[test]
fn test_environment_names() {
    assert_eq!(Environment::from_str_or_default("PROD"), Environment::Production);
    assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
    assert_eq!(Environment::from_str_or_default("staging"), Environment::Development);
}

#[test]
fn test_delimiter_parsing() {
    assert_eq!(parse_delimiter(",").unwrap(), b',');
    assert_eq!(parse_delimiter("tab").unwrap(), b'\t');
    assert_eq!(parse_delimiter("\\t").unwrap(), b'\t');
    assert!(parse_delimiter("").is_err());
    assert!(parse_delimiter(";;").is_err());
    assert!(parse_delimiter("é").is_err());
}

#[test]
fn test_delimiter_rejects_quote_and_line_terminators() {
    assert!(parse_delimiter("\"").is_err());
    assert!(parse_delimiter("\n").is_err());
    assert!(parse_delimiter("\r").is_err());
    assert_eq!(parse_delimiter(";").unwrap(), b';');
}

#[test]
#[serial]
fn test_quote_delimiter_is_rejected_from_env() {
    clear_config_env();
    env::set_var("CSV_DELIMITER", "\"");

    let result = ServerConfig::from_env();
    clear_config_env();

    assert!(result.is_err());
}
