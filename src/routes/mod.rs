// ABOUTME: Route module organization for the anthropometry HTTP endpoints
// ABOUTME: Health monitoring plus calculation, recommendation and repeatability routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Each domain module contains route definitions and thin handlers that
//! delegate to the engine crate.

/// Anthropometric calculation, recommendations and repeatability routes
pub mod anthropometry;
/// Health check route
pub mod health;

pub use anthropometry::AnthropometryRoutes;
pub use health::HealthRoutes;
