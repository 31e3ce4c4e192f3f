// ABOUTME: HTTP server assembly for the analysis API
// ABOUTME: Composes routes with CORS, body limit, request ID, and tracing layers and serves them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ServerConfig;
use crate::middleware::{make_request_span, setup_cors, RequestIdLayers};
use crate::routes::{AnalysisRoutes, HealthRoutes};
use crate::service::AnalysisService;
use anyhow::{Context, Result};
use axum::{extract::DefaultBodyLimit, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{info, Level};

/// Analysis HTTP server
pub struct AnalysisServer {
    config: ServerConfig,
    service: Arc<AnalysisService>,
}

impl AnalysisServer {
    /// Create a server from configuration
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let service = Arc::new(AnalysisService::new(config.analysis));
        Self { config, service }
    }

    /// Build the fully layered router
    #[must_use]
    pub fn router(&self) -> Router {
        let trace_layer = TraceLayer::new_for_http()
            .make_span_with(make_request_span)
            .on_response(DefaultOnResponse::new().level(Level::INFO));

        Router::new()
            .merge(HealthRoutes::routes())
            .merge(AnalysisRoutes::routes(Arc::clone(&self.service)))
            .layer(DefaultBodyLimit::max(self.config.analysis.max_upload_bytes))
            .layer(trace_layer)
            .layer(RequestIdLayers::propagate())
            .layer(RequestIdLayers::set())
            .layer(setup_cors(&self.config))
    }

    /// Bind and serve until ctrl-c
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound or the server fails
    pub async fn run(self) -> Result<()> {
        let address = self.config.bind_address();
        let listener = TcpListener::bind(&address)
            .await
            .with_context(|| format!("Failed to bind {address}"))?;

        info!("HTTP server listening on http://{address}");
        log_endpoints(&address);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server error")?;

        info!("HTTP server stopped");
        Ok(())
    }
}

/// Router for `config`, used by tests and embedding applications
#[must_use]
pub fn build_router(config: &ServerConfig) -> Router {
    AnalysisServer::new(config.clone()).router()
}

fn log_endpoints(address: &str) {
    info!("=== Available API Endpoints ===");
    info!("   Health:          GET  http://{address}/health");
    info!("   Exercises:       POST http://{address}/api/exercises");
    info!("   Analyze:         POST http://{address}/api/analyze?exercise=...&analysis_mode=...");
    info!("   Weekly Summary:  POST http://{address}/api/weekly-summary");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
