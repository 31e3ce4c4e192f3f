// ABOUTME: HTTP server binary for LiftLog upload analysis
// ABOUTME: Loads environment configuration, initializes logging, and serves the analysis API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # LiftLog Server Binary

use anyhow::Result;
use clap::Parser;
use liftlog::{config::ServerConfig, logging, server::AnalysisServer};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "liftlog-server")]
#[command(about = "LiftLog - strength-training progress analytics API")]
#[command(version)]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind host
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }

    logging::init_from_env()?;

    info!("Starting LiftLog server");
    info!("{}", config.summary());

    if let Err(e) = AnalysisServer::new(config).run().await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}
