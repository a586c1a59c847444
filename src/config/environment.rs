// ABOUTME: Environment configuration for the HTTP service: port, bind address, CORS and catalog path
// ABOUTME: Parses environment variables into a typed ServerConfig with explicit configuration errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use pierre_anthro_core::constants::{env_vars, network};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

/// Configuration could not be read from the environment
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Port variable is not a valid TCP port
    #[error("Invalid {var} value '{value}': expected a port number between 1 and 65535")]
    InvalidPort {
        /// Variable name
        var: &'static str,
        /// Raw value
        value: String,
    },

    /// Host is not an IP address
    #[error("Invalid {var} value '{value}': expected an IP address")]
    InvalidHost {
        /// Variable name
        var: &'static str,
        /// Raw value
        value: String,
    },

    /// Catalog path is set but empty
    #[error("{var} is set but empty")]
    EmptyPath {
        /// Variable name
        var: &'static str,
    },
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback to development
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Cross-origin settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorsConfig {
    /// Comma-separated allowed origins, or `*` for any
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: "*".to_owned(),
        }
    }
}

/// HTTP service configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Port the HTTP listener binds to
    pub http_port: u16,
    /// Address the HTTP listener binds to
    pub host: IpAddr,
    /// Deployment environment
    pub environment: Environment,
    /// CORS settings
    pub cors: CorsConfig,
    /// Recommendation catalog file; the bundled catalog is used when unset
    pub recommendations_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: network::DEFAULT_HTTP_PORT,
            host: IpAddr::from([0, 0, 0, 0]),
            environment: Environment::default(),
            cors: CorsConfig::default(),
            recommendations_path: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// `HTTP_PORT` takes precedence over `PORT`.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unparseable value
    pub fn from_env() -> Result<Self, ConfigError> {
        let http_port = match env::var(env_vars::HTTP_PORT) {
            Ok(value) => parse_port(env_vars::HTTP_PORT, &value)?,
            Err(_) => match env::var(env_vars::PORT) {
                Ok(value) => parse_port(env_vars::PORT, &value)?,
                Err(_) => network::DEFAULT_HTTP_PORT,
            },
        };

        let host_value =
            env::var(env_vars::HOST).unwrap_or_else(|_| network::DEFAULT_HOST.to_owned());
        let host = host_value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidHost {
                var: env_vars::HOST,
                value: host_value.clone(),
            })?;

        let recommendations_path = match env::var(env_vars::RECOMMENDATIONS_PATH) {
            Ok(value) if value.trim().is_empty() => {
                return Err(ConfigError::EmptyPath {
                    var: env_vars::RECOMMENDATIONS_PATH,
                })
            }
            Ok(value) => Some(PathBuf::from(value.trim())),
            Err(_) => None,
        };

        let config = Self {
            http_port,
            host,
            environment: env::var(env_vars::ENVIRONMENT)
                .map(|value| Environment::from_str_or_default(&value))
                .unwrap_or_default(),
            cors: CorsConfig {
                allowed_origins: env::var(env_vars::CORS_ALLOWED_ORIGINS)
                    .unwrap_or_else(|_| "*".to_owned()),
            },
            recommendations_path,
        };

        info!("Configuration loaded from environment");
        Ok(config)
    }

    /// Socket address to bind
    #[must_use]
    pub const fn bind_address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.http_port)
    }

    /// Configuration summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Pierre Anthropometry Configuration:\n\
             - Bind Address: {}\n\
             - Environment: {}\n\
             - CORS Origins: {}\n\
             - Recommendation Catalog: {}",
            self.bind_address(),
            self.environment,
            self.cors.allowed_origins,
            self.recommendations_path
                .as_ref()
                .map_or_else(|| "bundled".to_owned(), |path| path.display().to_string()),
        )
    }
}

fn parse_port(var: &'static str, value: &str) -> Result<u16, ConfigError> {
    match value.trim().parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort {
            var,
            value: value.to_owned(),
        }),
    }
}
