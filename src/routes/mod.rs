// ABOUTME: HTTP route composition for the analysis server
// ABOUTME: Groups health and analysis endpoints into axum routers

//! Route modules

/// Upload analysis routes
pub mod analysis;
/// Health check routes
pub mod health;

pub use analysis::{AnalysisRoutes, AnalyzeParams};
pub use health::HealthRoutes;
