// ABOUTME: Error taxonomy of the workout analysis pipeline
// ABOUTME: AnalysisError variants and their conversion into AppError codes

use super::{AppError, ErrorCode};

/// Errors raised while loading, resolving, or analyzing workout data
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    /// The CSV header does not contain every required column
    #[error("CSV must contain Date, Exercise Name, Weight, and Reps columns (missing: {})", .missing.join(", "))]
    MissingColumns {
        /// Required columns absent from the header
        missing: Vec<String>,
    },

    /// Every row was dropped during cleaning
    #[error("No valid workout sets found ({rows_read} rows read)")]
    NoValidRows {
        /// Number of data rows read before cleaning
        rows_read: usize,
    },

    /// Several exercises contain the query and none equals it
    #[error("Multiple matches found: {}", .candidates.join(", "))]
    AmbiguousMatch {
        /// The query as given
        query: String,
        /// Every matching exercise name, sorted
        candidates: Vec<String>,
    },

    /// Nothing equals or contains the query
    #[error("No matches found for '{query}'")]
    NoMatch {
        /// The query as given
        query: String,
    },

    /// Analysis mode string not recognized
    #[error("Invalid analysis mode '{value}'. Must be one of: weight, 1rm, volume")]
    InvalidAnalysisMode {
        /// The rejected value
        value: String,
    },

    /// No exercise was given
    #[error("Exercise name is required")]
    EmptyExerciseSelection,

    /// The upload is not readable CSV
    #[error("Error processing file: {reason}")]
    MalformedCsv {
        /// 1-based line where reading failed, when known
        line: Option<u64>,
        /// Reader error description
        reason: String,
    },
}

impl AnalysisError {
    /// Error code this failure maps to
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::MissingColumns { .. } => ErrorCode::MissingColumns,
            Self::NoValidRows { .. } => ErrorCode::NoValidRows,
            Self::AmbiguousMatch { .. } => ErrorCode::AmbiguousMatch,
            Self::NoMatch { .. } => ErrorCode::NoMatch,
            Self::InvalidAnalysisMode { .. } => ErrorCode::InvalidAnalysisMode,
            Self::EmptyExerciseSelection => ErrorCode::EmptyExerciseSelection,
            Self::MalformedCsv { .. } => ErrorCode::MalformedCsv,
        }
    }

    fn details(&self) -> serde_json::Value {
        match self {
            Self::MissingColumns { missing } => serde_json::json!({ "missing_columns": missing }),
            Self::NoValidRows { rows_read } => serde_json::json!({ "rows_read": rows_read }),
            Self::AmbiguousMatch { query, candidates } => serde_json::json!({
                "query": query,
                "candidates": candidates,
            }),
            Self::NoMatch { query } => serde_json::json!({ "query": query }),
            Self::InvalidAnalysisMode { value } => serde_json::json!({
                "value": value,
                "allowed": ["weight", "1rm", "volume"],
            }),
            Self::EmptyExerciseSelection => serde_json::Value::Null,
            Self::MalformedCsv { line, .. } => {
                line.map_or(serde_json::Value::Null, |l| serde_json::json!({ "line": l }))
            }
        }
    }
}

impl From<AnalysisError> for AppError {
    fn from(error: AnalysisError) -> Self {
        let details = error.details();
        Self::new(error.code(), error.to_string()).with_details(details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambiguous_message_lists_candidates() {
        let error = AnalysisError::AmbiguousMatch {
            query: "press".into(),
            candidates: vec!["Bench Press".into(), "Overhead Press".into()],
        };
        assert_eq!(
            error.to_string(),
            "Multiple matches found: Bench Press, Overhead Press"
        );

        let app: AppError = error.into();
        assert_eq!(app.code, ErrorCode::AmbiguousMatch);
        assert_eq!(app.details["candidates"][1], "Overhead Press");
    }

    #[test]
    fn test_no_match_message() {
        let app: AppError = AnalysisError::NoMatch {
            query: "curl".into(),
        }
        .into();
        assert_eq!(app.message, "No matches found for 'curl'");
        assert_eq!(app.http_status(), 400);
    }

    #[test]
    fn test_malformed_csv_is_processing_failure() {
        let app: AppError = AnalysisError::MalformedCsv {
            line: Some(4),
            reason: "found record with 3 fields".into(),
        }
        .into();
        assert_eq!(app.http_status(), 500);
        assert_eq!(app.details["line"], 4);
    }
}
