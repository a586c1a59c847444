// ABOUTME: Server binary for the Pierre sports anthropometry HTTP service
// ABOUTME: Loads configuration and the recommendation catalog, then serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Pierre Anthropometry Server Binary
//!
//! Starts the HTTP API for anthropometric calculations and goal recommendations.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use pierre_anthropometry::{
    config::ServerConfig, logging, recommendations::RecommendationCatalog,
    resources::ServerResources, server,
};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "pierre-anthropometry-server")]
#[command(about = "Pierre Anthropometry - body composition and goal recommendation API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Recommendation catalog (YAML) replacing the bundled one
    #[arg(long)]
    recommendations: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(path) = args.recommendations {
        config.recommendations_path = Some(path);
    }

    logging::init_from_env()?;

    info!("Starting Pierre Anthropometry API");
    info!("{}", config.summary());

    let catalog = RecommendationCatalog::from_path_or_bundled(config.recommendations_path.as_deref())?;
    info!("Recommendation catalog loaded with {} goals", catalog.len());

    let resources = Arc::new(ServerResources::new(config, catalog));

    if let Err(e) = server::run(resources).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}
