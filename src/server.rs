// ABOUTME: HTTP server assembly: router, CORS and request tracing layers, listener lifecycle
// ABOUTME: Binds the configured address and serves until ctrl-c or SIGTERM
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#[cfg(not(unix))]
use std::future;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{http::Uri, Router};
use pierre_anthro_core::errors::AppError;
use tokio::net::TcpListener;
use tokio::signal;
#[cfg(unix)]
use tokio::signal::unix::{signal as unix_signal, SignalKind};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::middleware::setup_cors;
use crate::resources::ServerResources;
use crate::routes::{AnthropometryRoutes, HealthRoutes};

async fn handle_not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("Route {}", uri.path()))
}

/// Build the complete application router
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config.cors);

    Router::new()
        .merge(HealthRoutes::routes())
        .merge(AnthropometryRoutes::routes(resources))
        .fallback(handle_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Serve the application until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails
pub async fn run(resources: Arc<ServerResources>) -> Result<()> {
    let address = resources.config.bind_address();
    let app = build_router(resources);

    let listener = TcpListener::bind(address)
        .await
        .with_context(|| format!("Failed to bind HTTP listener on {address}"))?;
    info!(%address, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server terminated with an error")?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for ctrl-c: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match unix_signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => error!("Failed to listen for SIGTERM: {e}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
