// ABOUTME: Computation error type for formulas that are undefined for their inputs
// ABOUTME: Covers square-root domain, zero denominators and degenerate body density
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_anthro_core::errors::AppError;
use thiserror::Error;

/// A formula could not produce a finite value for the supplied measurements
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComputationError {
    /// Denominator was zero or not finite
    #[error("{metric} is undefined: {denominator} must be a positive finite number")]
    DegenerateDenominator {
        /// Metric being computed
        metric: &'static str,
        /// Name of the offending denominator
        denominator: &'static str,
    },

    /// Expression under a square root left the [0, 1] domain
    #[error("{metric} is undefined: radicand {radicand:.4} is outside [0, 1]")]
    RadicandOutOfDomain {
        /// Metric being computed
        metric: &'static str,
        /// Value found under the root
        radicand: f64,
    },

    /// Regression produced a non-positive or non-finite body density
    #[error("body density {density:.4} is not physiologically meaningful")]
    DegenerateDensity {
        /// Computed density (g/cm³)
        density: f64,
    },

    /// Result was NaN or infinite
    #[error("{metric} evaluated to a non-finite value")]
    NonFinite {
        /// Metric being computed
        metric: &'static str,
    },
}

impl From<ComputationError> for AppError {
    fn from(error: ComputationError) -> Self {
        Self::computation_undefined(error.to_string())
    }
}
