// ABOUTME: Shared, read-only resources handed to every HTTP handler
// ABOUTME: Holds the configuration, the recommendation catalog and the metrics engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use pierre_anthro_intelligence::{GoalPresentation, MetricsEngine};

use crate::config::ServerConfig;
use crate::recommendations::RecommendationCatalog;

/// Resources shared by all route handlers
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ServerResources {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Recommendation catalog
    pub catalog: Arc<RecommendationCatalog>,
    /// Metrics engine using the catalog for goal text
    pub engine: MetricsEngine,
}

impl ServerResources {
    /// Wire the engine to the catalog
    #[must_use]
    pub fn new(config: ServerConfig, catalog: RecommendationCatalog) -> Self {
        let catalog = Arc::new(catalog);
        let presentation: Arc<dyn GoalPresentation> = catalog.clone();

        Self {
            config: Arc::new(config),
            catalog,
            engine: MetricsEngine::with_presentation(presentation),
        }
    }
}
