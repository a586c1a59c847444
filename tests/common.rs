// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet test logging and a router wired to the bundled catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::expect_used
)]
//! Shared test utilities for `pierre_anthropometry`

use axum::Router;
use pierre_anthropometry::{
    config::ServerConfig, recommendations::RecommendationCatalog, resources::ServerResources,
    server,
};
use serde_json::{json, Value};
use std::env;
use std::sync::{Arc, Once};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; quiet by default
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Resources backed by the default configuration and the bundled catalog
pub fn create_test_resources() -> Arc<ServerResources> {
    init_test_logging();
    let catalog = RecommendationCatalog::bundled().expect("bundled catalog must parse");
    Arc::new(ServerResources::new(ServerConfig::default(), catalog))
}

/// Full application router, as served by the binary
pub fn create_test_router() -> Router {
    server::build_router(create_test_resources())
}

/// Male, 30 y, 80 kg, 180 cm with the chest/abdomen/thigh skinfolds
pub fn male_payload() -> Value {
    json!({
        "gender": "M",
        "age": 30,
        "weight": 80,
        "height": 180,
        "waist": 85,
        "hip": 100,
        "chest": 10,
        "abdomen": 15,
        "thigh": 12
    })
}

/// Female, 25 y, 60 kg, 165 cm with the triceps/suprailiac/thigh skinfolds
pub fn female_payload() -> Value {
    json!({
        "gender": "F",
        "age": 25,
        "weight": 60,
        "height": 165,
        "waist": 70,
        "hip": 95,
        "triceps_fold": 15,
        "suprailiac_fold": 12,
        "thigh_fold": 20
    })
}
