// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management
//!
//! All settings come from environment variables with typed defaults. There is
//! no configuration file. Values are read once at startup and shared
//! read-only with every request.

use anyhow::{bail, Context, Result};
use liftlog_analytics::loader::LoadOptions;
use liftlog_core::constants::{chart, defaults};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use tracing::info;

/// Environment type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorsConfig {
    /// Comma-separated allowed origins, or `*`
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: "*".to_owned(),
        }
    }
}

/// Analysis behavior shared by every request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Render an SVG chart into analysis responses
    pub render_charts: bool,
    /// Chart width in pixels
    pub chart_width: u32,
    /// Chart height in pixels
    pub chart_height: u32,
    /// CSV field delimiter
    pub csv_delimiter: u8,
    /// Largest accepted upload in bytes
    pub max_upload_bytes: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            render_charts: true,
            chart_width: chart::DEFAULT_WIDTH,
            chart_height: chart::DEFAULT_HEIGHT,
            csv_delimiter: defaults::CSV_DELIMITER,
            max_upload_bytes: defaults::MAX_UPLOAD_BYTES,
        }
    }
}

impl AnalysisConfig {
    /// Loader options derived from this configuration
    #[must_use]
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions::default().with_delimiter(self.csv_delimiter)
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// HTTP API port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// CORS settings
    pub cors: CorsConfig,
    /// Analysis settings
    pub analysis: AnalysisConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::HOST.to_owned(),
            http_port: defaults::HTTP_PORT,
            environment: Environment::default(),
            cors: CorsConfig::default(),
            analysis: AnalysisConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to a value that cannot be parsed
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            host: env_var_or("HOST", defaults::HOST),
            http_port: env_var_or("HTTP_PORT", &defaults::HTTP_PORT.to_string())
                .parse()
                .context("Invalid HTTP_PORT value")?,
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            cors: CorsConfig {
                allowed_origins: env_var_or("CORS_ALLOWED_ORIGINS", "*"),
            },
            analysis: AnalysisConfig {
                render_charts: env_var_or("CHART_RENDERING_ENABLED", "true")
                    .parse()
                    .context("Invalid CHART_RENDERING_ENABLED value")?,
                chart_width: env_var_or("CHART_WIDTH", &chart::DEFAULT_WIDTH.to_string())
                    .parse()
                    .context("Invalid CHART_WIDTH value")?,
                chart_height: env_var_or("CHART_HEIGHT", &chart::DEFAULT_HEIGHT.to_string())
                    .parse()
                    .context("Invalid CHART_HEIGHT value")?,
                csv_delimiter: parse_delimiter(&env_var_or("CSV_DELIMITER", ","))
                    .context("Invalid CSV_DELIMITER value")?,
                max_upload_bytes: env_var_or(
                    "MAX_UPLOAD_BYTES",
                    &defaults::MAX_UPLOAD_BYTES.to_string(),
                )
                .parse()
                .context("Invalid MAX_UPLOAD_BYTES value")?,
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that would make the server unusable
    ///
    /// # Errors
    ///
    /// Returns an error when chart dimensions or the upload limit are zero
    pub fn validate(&self) -> Result<()> {
        if self.analysis.chart_width == 0 || self.analysis.chart_height == 0 {
            bail!("CHART_WIDTH and CHART_HEIGHT must be positive");
        }
        if self.analysis.max_upload_bytes == 0 {
            bail!("MAX_UPLOAD_BYTES must be positive");
        }
        Ok(())
    }

    /// Socket address string to bind
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Human-readable configuration summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "LiftLog Server Configuration:\n\
             - Bind: {}\n\
             - Environment: {}\n\
             - CORS Origins: {}\n\
             - Chart Rendering: {}\n\
             - Max Upload: {} bytes\n\
             - CSV Delimiter: {:?}",
            self.bind_address(),
            self.environment,
            self.cors.allowed_origins,
            if self.analysis.render_charts {
                format!(
                    "Enabled ({}x{})",
                    self.analysis.chart_width, self.analysis.chart_height
                )
            } else {
                "Disabled".to_owned()
            },
            self.analysis.max_upload_bytes,
            char::from(self.analysis.csv_delimiter),
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse a single-byte delimiter; `tab` and `\t` select a tab
///
/// # Errors
///
/// Returns an error unless the value is exactly one ASCII character that is
/// neither the quote character nor a line terminator
pub fn parse_delimiter(raw: &str) -> Result<u8> {
    let byte = match raw {
        "tab" | "\\t" | "\t" => b'\t',
        s if s.len() == 1 && s.is_ascii() => s.as_bytes()[0],
        other => bail!("delimiter must be a single ASCII character, got {other:?}"),
    };
    if matches!(byte, b'"' | b'\n' | b'\r') {
        bail!("delimiter cannot be a quote or line terminator, got {raw:?}");
    }
    Ok(byte)
}
