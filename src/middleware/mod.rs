// ABOUTME: HTTP middleware for the analysis server
// ABOUTME: Provides CORS configuration and request tracing layers

//! HTTP middleware

/// CORS layer configuration
pub mod cors;
/// Request IDs and request spans
pub mod tracing;

pub use cors::setup_cors;
pub use self::tracing::{make_request_span, RequestIdLayers, REQUEST_ID_HEADER};
