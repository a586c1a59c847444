// ABOUTME: Main library entry point for the Pierre sports anthropometry service
// ABOUTME: Wires configuration, logging, the recommendation catalog and HTTP routes together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Anthropometry
//!
//! HTTP service that turns one set of body measurements into derived indices,
//! skinfold-based body composition, a training goal and goal-specific advice.
//!
//! ## Architecture
//!
//! - **`pierre-anthro-core`**: error types, measurement models and constants
//! - **`pierre-anthro-intelligence`**: validation, indices, body composition and goal rules
//! - **This crate**: configuration, logging, the recommendation catalog and the axum server
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pierre_anthropometry::config::ServerConfig;
//! use pierre_anthropometry::recommendations::RecommendationCatalog;
//! use pierre_anthropometry::resources::ServerResources;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let catalog = RecommendationCatalog::bundled()?;
//!     let resources = Arc::new(ServerResources::new(config, catalog));
//!     pierre_anthropometry::server::run(resources).await
//! }
//! ```

/// Environment-based server configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// HTTP middleware layers
pub mod middleware;

/// Goal text and advice catalog
pub mod recommendations;

/// Shared handler resources
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Router assembly and server lifecycle
pub mod server;

pub use pierre_anthro_core::{constants, errors, models};
pub use pierre_anthro_intelligence as intelligence;
