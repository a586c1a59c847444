// ABOUTME: Sports anthropometry engine: validation, indices, body composition and goal classification
// ABOUTME: Pure synchronous algorithms consumed by the HTTP service in the main crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Anthropometry Intelligence
//!
//! Stateless calculation pipeline for sports anthropometry. Given a
//! [`MeasurementRecord`](pierre_anthro_core::models::MeasurementRecord) it
//! validates physiological ranges, computes BMI, waist ratios and the Body
//! Roundness Index, estimates body composition from skinfolds and derives a
//! training/nutrition goal.
//!
//! ## Modules
//!
//! - **validation**: Range and coherence rules, all evaluated in one pass
//! - **metrics**: Basic indices and rounding
//! - **body_composition**: Jackson-Pollock density, Siri body fat, FFMI
//! - **goal_engine**: Ordered goal decision table and goal text seam
//! - **interpretation**: Labelled bands for each metric
//! - **repeatability**: ISAK coefficient-of-variation check
//! - **engine**: The end-to-end pipeline and batch evaluation

/// Physiological ranges, regression coefficients and thresholds
pub mod physiological_constants;

/// Computation errors for undefined formulas
pub mod error;

/// Input validation
pub mod validation;

/// BMI, waist ratios and Body Roundness Index
pub mod metrics;

/// Skinfold site selection and body composition
pub mod body_composition;

/// Goal decision table and presentation text
pub mod goal_engine;

/// Metric interpretation bands
pub mod interpretation;

/// Repeated-measurement quality
pub mod repeatability;

/// End-to-end calculation pipeline
pub mod engine;

pub use body_composition::{
    calculate_body_composition, select_skinfold_sites, BodyComposition, SkinfoldProtocol,
    SkinfoldSelection,
};
pub use engine::{
    compute_metrics, compute_metrics_batch, AnthropometricMetrics, CalculationResult,
    MetricsEngine,
};
pub use error::ComputationError;
pub use goal_engine::{
    determine_goal, BuiltinGoalText, CaloricPlan, CaloricTarget, GoalCategory, GoalDecision,
    GoalPresentation, GoalRecord, GoalText,
};
pub use interpretation::{Interpretation, MetricInterpretations, MetricStatus};
pub use metrics::BasicIndices;
pub use repeatability::{assess_repeatability, RepeatabilityAssessment};
pub use validation::{validate_measurements, ValidationError, ValidationErrorKind, ValidationReport};
