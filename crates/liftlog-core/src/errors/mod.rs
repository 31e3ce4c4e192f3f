// ABOUTME: Unified error handling with standard error codes and HTTP status mapping
// ABOUTME: Defines ErrorCode, AppError, AppResult and the JSON error response format
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every failure the analytics pipeline can report is an [`AppError`] carrying
//! an [`ErrorCode`]. The code decides the failure category (bad input versus
//! processing failure) and therefore the HTTP status the server responds with.
//! Domain errors such as [`AnalysisError`] convert into `AppError` so callers
//! only ever deal with one type at the boundary.

/// Analysis pipeline error types
pub mod analysis;

pub use analysis::AnalysisError;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Whether a failure was caused by the caller's input or by the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// The request must be corrected before retrying
    BadInput,
    /// The request was well-formed but could not be processed
    ProcessingFailure,
}

/// Standard error codes used throughout the application
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Generic invalid input
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// CSV header lacks one or more required columns
    #[serde(rename = "MISSING_COLUMNS")]
    MissingColumns = 3001,
    /// No row survived data cleaning
    #[serde(rename = "NO_VALID_ROWS")]
    NoValidRows = 3002,
    /// Analysis mode is not one of the supported values
    #[serde(rename = "INVALID_ANALYSIS_MODE")]
    InvalidAnalysisMode = 3003,
    /// Exercise query was missing or blank
    #[serde(rename = "EMPTY_EXERCISE_SELECTION")]
    EmptyExerciseSelection = 3004,
    /// Request body exceeded the configured upload limit
    #[serde(rename = "PAYLOAD_TOO_LARGE")]
    PayloadTooLarge = 3005,

    // Exercise resolution (4000-4999)
    /// No exercise matched the query
    #[serde(rename = "NO_MATCH")]
    NoMatch = 4000,
    /// Several exercises matched the query
    #[serde(rename = "AMBIGUOUS_MATCH")]
    AmbiguousMatch = 4001,

    // Configuration (6000-6999)
    /// Configuration error
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Upload could not be read as CSV
    #[serde(rename = "MALFORMED_CSV")]
    MalformedCsv = 9001,
    /// Chart rendering failed
    #[serde(rename = "RENDER_ERROR")]
    RenderError = 9002,
    /// Serialization of a response failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Failure category for this code
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput
            | Self::MissingColumns
            | Self::NoValidRows
            | Self::InvalidAnalysisMode
            | Self::EmptyExerciseSelection
            | Self::PayloadTooLarge
            | Self::NoMatch
            | Self::AmbiguousMatch => ErrorCategory::BadInput,

            Self::ConfigError
            | Self::InternalError
            | Self::MalformedCsv
            | Self::RenderError
            | Self::SerializationError => ErrorCategory::ProcessingFailure,
        }
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        match self {
            Self::PayloadTooLarge => 413,
            _ => match self.category() {
                ErrorCategory::BadInput => 400,
                ErrorCategory::ProcessingFailure => 500,
            },
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingColumns => "The CSV file is missing required columns",
            Self::NoValidRows => "The CSV file contains no valid workout sets",
            Self::InvalidAnalysisMode => "The requested analysis mode is not supported",
            Self::EmptyExerciseSelection => "An exercise name is required",
            Self::PayloadTooLarge => "The uploaded file exceeds the size limit",
            Self::NoMatch => "No exercise matched the query",
            Self::AmbiguousMatch => "The exercise query matched several exercises",
            Self::ConfigError => "Configuration error encountered",
            Self::InternalError => "An internal server error occurred",
            Self::MalformedCsv => "The uploaded file could not be read as CSV",
            Self::RenderError => "Chart rendering failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Structured details (candidate lists, missing columns, ...)
    pub details: serde_json::Value,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: serde_json::Value::Null,
            source: None,
        }
    }

    /// Attach structured details
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Failure category for this error
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        self.code.category()
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Chart rendering error
    pub fn render(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::RenderError, message)
    }

    /// Upload larger than the configured limit
    pub fn payload_too_large(limit_bytes: usize) -> Self {
        Self::new(
            ErrorCode::PayloadTooLarge,
            format!("Uploaded file exceeds the {limit_bytes} byte limit"),
        )
        .with_details(serde_json::json!({ "limit_bytes": limit_bytes }))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(
            ErrorCode::SerializationError,
            format!("JSON serialization failed: {error}"),
        )
        .with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error response body
///
/// Serialized as `{"error": "...", "code": "...", "category": "...", "details": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable message
    pub error: String,
    /// Machine-readable error code
    pub code: ErrorCode,
    /// Failure category
    pub category: ErrorCategory,
    /// Structured details, omitted when empty
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub details: serde_json::Value,
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self {
            error: error.message.clone(),
            code: error.code,
            category: error.category(),
            details: error.details.clone(),
        }
    }
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            category: error.category(),
            error: error.message,
            code: error.code,
            details: error.details,
        }
    }
}

#[cfg(feature = "http-response")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = http::StatusCode::from_u16(self.http_status())
            .unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(code = ?self.code, error = %self.message, "request failed");
        } else {
            tracing::debug!(code = ?self.code, error = %self.message, "request rejected");
        }

        (status, axum::Json(ErrorResponse::from(self))).into_response()
    }
}
