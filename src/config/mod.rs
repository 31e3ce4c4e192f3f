// ABOUTME: Configuration module for the LiftLog server and CLI
// ABOUTME: Environment-only configuration with typed defaults

/// Environment-based configuration
pub mod environment;

pub use environment::{AnalysisConfig, CorsConfig, Environment, ServerConfig};
