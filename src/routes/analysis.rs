// ABOUTME: Analysis route handlers for uploaded workout logs
// ABOUTME: Exercise listing, per-exercise progress analysis, and weekly workout summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Analysis routes
//!
//! Each endpoint takes the raw CSV export as the request body. Analysis runs
//! on the blocking pool since parsing and chart rendering are CPU bound.

use crate::service::AnalysisService;
use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use liftlog_core::errors::{AppError, AppResult};
use serde::Deserialize;
use std::sync::Arc;
use tokio::task;

/// Query parameters for the analyze endpoint
#[derive(Debug, Deserialize, Default)]
pub struct AnalyzeParams {
    /// Exercise name or fragment
    #[serde(default)]
    pub exercise: Option<String>,
    /// `weight`, `1rm`, or `volume`
    #[serde(default)]
    pub analysis_mode: Option<String>,
}

/// Analysis routes
pub struct AnalysisRoutes;

impl AnalysisRoutes {
    /// Create all analysis routes
    pub fn routes(service: Arc<AnalysisService>) -> Router {
        Router::new()
            .route("/api/exercises", post(Self::handle_exercises))
            .route("/api/analyze", post(Self::handle_analyze))
            .route("/api/weekly-summary", post(Self::handle_weekly_summary))
            .with_state(service)
    }

    /// Handle exercise listing
    async fn handle_exercises(
        State(service): State<Arc<AnalysisService>>,
        body: Result<Bytes, BytesRejection>,
    ) -> Result<Response, AppError> {
        let upload = read_upload(&service, body)?;
        let catalog = run_blocking(move || service.exercises(&upload)).await?;

        Ok((StatusCode::OK, Json(catalog)).into_response())
    }

    /// Handle exercise analysis
    async fn handle_analyze(
        State(service): State<Arc<AnalysisService>>,
        params: Result<Query<AnalyzeParams>, QueryRejection>,
        body: Result<Bytes, BytesRejection>,
    ) -> Result<Response, AppError> {
        let Query(params) = params.map_err(|rejection| {
            AppError::invalid_input(format!(
                "Invalid query parameters: {}",
                rejection.body_text()
            ))
        })?;
        let upload = read_upload(&service, body)?;
        let report = run_blocking(move || {
            service.analyze(
                &upload,
                params.exercise.as_deref(),
                params.analysis_mode.as_deref(),
            )
        })
        .await?;

        Ok((StatusCode::OK, Json(report)).into_response())
    }

    /// Handle weekly summary
    async fn handle_weekly_summary(
        State(service): State<Arc<AnalysisService>>,
        body: Result<Bytes, BytesRejection>,
    ) -> Result<Response, AppError> {
        let upload = read_upload(&service, body)?;
        let summary = run_blocking(move || service.weekly_summary(&upload)).await?;

        Ok((StatusCode::OK, Json(summary)).into_response())
    }
}

fn read_upload(
    service: &AnalysisService,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<Bytes> {
    body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::payload_too_large(service.config().max_upload_bytes)
        } else {
            AppError::invalid_input(format!("Failed to read upload: {}", rejection.body_text()))
        }
    })
}

async fn run_blocking<T, F>(job: F) -> AppResult<T>
where
    F: FnOnce() -> AppResult<T> + Send + 'static,
    T: Send + 'static,
{
    task::spawn_blocking(job)
        .await
        .map_err(|e| AppError::internal(format!("Analysis task failed: {e}")))?
}
