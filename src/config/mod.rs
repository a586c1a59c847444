// ABOUTME: Configuration module for the anthropometry HTTP service
// ABOUTME: Environment-only settings for networking, CORS and the recommendation catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration is read from environment variables only; command-line flags
//! in the server binary override individual fields.

/// Environment and server configuration
pub mod environment;

pub use environment::{ConfigError, CorsConfig, Environment, ServerConfig};
