// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Service identifiers, API paths and network defaults for the anthropometry service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into small domain modules rather than one flat list.

/// Service identifiers used in logs and health output
pub mod service_names {
    /// Name of the HTTP service
    pub const PIERRE_ANTHROPOMETRY: &str = "pierre-anthropometry";
}

/// API endpoints
pub mod endpoints {
    /// Health check endpoint
    pub const HEALTH_CHECK: &str = "/api/health";
    /// Anthropometric calculation endpoint
    pub const CALCULATE: &str = "/api/calculate";
    /// Goal recommendations endpoint
    pub const RECOMMENDATIONS: &str = "/api/recommendations";
    /// Repeated-measurement quality endpoint
    pub const REPEATABILITY: &str = "/api/measurements/repeatability";
}

/// Network defaults
pub mod network {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 5000;
    /// Default bind address
    pub const DEFAULT_HOST: &str = "0.0.0.0";
}

/// Environment variable names read by the service
pub mod env_vars {
    /// HTTP port (preferred)
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// HTTP port (platform-provided fallback)
    pub const PORT: &str = "PORT";
    /// Bind address
    pub const HOST: &str = "HOST";
    /// Comma-separated list of allowed CORS origins, or `*`
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Path to the recommendation catalog YAML file
    pub const RECOMMENDATIONS_PATH: &str = "RECOMMENDATIONS_PATH";
    /// Deployment environment (development, production)
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}
