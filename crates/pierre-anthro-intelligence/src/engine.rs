// ABOUTME: Calculation pipeline: validate the record, compute indices, composition, goal and bands
// ABOUTME: Returns a CalculationResult as data and never panics; batch evaluation uses rayon
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Metrics Engine
//!
//! Control flow for one record:
//!
//! 1. [`validate_measurements`] runs first; any violation ends the calculation.
//! 2. The four basic indices are always computed.
//! 3. Body composition runs only when a complete skinfold subset is present.
//! 4. A goal is derived from the composition and interpreted bands are attached.
//!
//! Every failure is reported in [`CalculationResult::errors`] with
//! `success = false` and no partial metrics.

use crate::body_composition::{calculate_body_composition, BodyComposition};
use crate::error::ComputationError;
use crate::goal_engine::{determine_goal, BuiltinGoalText, GoalPresentation, GoalRecord};
use crate::interpretation::{
    interpret_bmi, interpret_body_fat, interpret_fat_free_mass_index, interpret_waist_height_ratio,
    interpret_waist_hip_ratio, MetricInterpretations,
};
use crate::metrics::BasicIndices;
use crate::validation::validate_measurements;
use pierre_anthro_core::models::{MeasurementInput, MeasurementRecord};
use rayon::prelude::*;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Computed metrics; composition fields are flattened in when present
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnthropometricMetrics {
    /// BMI, WHR, WHtR and BRI
    #[serde(flatten)]
    pub basic: BasicIndices,
    /// Skinfold-derived metrics
    #[serde(flatten)]
    pub composition: Option<BodyComposition>,
}

/// Outcome of one calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    /// True when every requested metric was computed
    pub success: bool,
    /// Metrics, present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<AnthropometricMetrics>,
    /// Recommended goal, present when composition was computed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<GoalRecord>,
    /// Band for each metric, present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpretations: Option<MetricInterpretations>,
    /// Reasons for failure
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl CalculationResult {
    /// Failed result carrying `errors`
    #[must_use]
    pub const fn failure(errors: Vec<String>) -> Self {
        Self {
            success: false,
            metrics: None,
            goal: None,
            interpretations: None,
            errors,
        }
    }
}

/// Calculation pipeline with pluggable goal text
#[derive(Clone)]
pub struct MetricsEngine {
    presentation: Arc<dyn GoalPresentation>,
}

impl Default for MetricsEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MetricsEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetricsEngine").finish_non_exhaustive()
    }
}

impl MetricsEngine {
    /// Engine using the built-in English goal text
    #[must_use]
    pub fn new() -> Self {
        Self {
            presentation: Arc::new(BuiltinGoalText),
        }
    }

    /// Engine using `presentation` for goal text
    #[must_use]
    pub fn with_presentation(presentation: Arc<dyn GoalPresentation>) -> Self {
        Self { presentation }
    }

    /// Validate and compute metrics for one record
    #[must_use]
    pub fn compute(&self, record: &MeasurementRecord) -> CalculationResult {
        let report = validate_measurements(record);
        if !report.valid {
            return CalculationResult::failure(report.messages());
        }

        let input = match MeasurementInput::try_from(record) {
            Ok(input) => input,
            Err(e) => return CalculationResult::failure(vec![e.to_string()]),
        };

        match self.compute_validated(&input) {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(error = %e, "Metric computation undefined for validated input");
                CalculationResult::failure(vec![e.to_string()])
            }
        }
    }

    /// Compute metrics for many records in parallel, preserving order
    #[must_use]
    pub fn compute_batch(&self, records: &[MeasurementRecord]) -> Vec<CalculationResult> {
        records.par_iter().map(|record| self.compute(record)).collect()
    }

    fn compute_validated(&self, input: &MeasurementInput) -> Result<CalculationResult, ComputationError> {
        let basic =
            BasicIndices::compute(input.weight_kg, input.height_cm, input.waist_cm, input.hip_cm)?;
        let composition = calculate_body_composition(input)?;

        let goal = composition.map(|composition| {
            let decision = determine_goal(
                input.gender,
                basic.waist_hip_ratio,
                composition.fat_free_mass_index,
                composition.body_fat_percentage,
            );
            GoalRecord::from_decision(decision, self.presentation.as_ref())
        });

        let interpretations = MetricInterpretations {
            bmi: interpret_bmi(basic.bmi),
            waist_hip_ratio: interpret_waist_hip_ratio(input.gender, basic.waist_hip_ratio),
            waist_height_ratio: interpret_waist_height_ratio(basic.waist_height_ratio),
            body_fat_percentage: composition
                .map(|c| interpret_body_fat(input.gender, c.body_fat_percentage)),
            fat_free_mass_index: composition
                .map(|c| interpret_fat_free_mass_index(input.gender, c.fat_free_mass_index)),
        };

        Ok(CalculationResult {
            success: true,
            metrics: Some(AnthropometricMetrics { basic, composition }),
            goal,
            interpretations: Some(interpretations),
            errors: Vec::new(),
        })
    }
}

/// Validate and compute metrics using the built-in goal text
#[must_use]
pub fn compute_metrics(record: &MeasurementRecord) -> CalculationResult {
    MetricsEngine::new().compute(record)
}

/// Compute metrics for many records in parallel using the built-in goal text
#[must_use]
pub fn compute_metrics_batch(records: &[MeasurementRecord]) -> Vec<CalculationResult> {
    MetricsEngine::new().compute_batch(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pierre_anthro_core::models::{Gender, SkinfoldSite};

    #[test]
    fn test_basic_only_record_has_no_goal() {
        let record = MeasurementRecord::new(Gender::Male, 30, 80.0, 180.0, 85.0, 100.0);
        let result = compute_metrics(&record);

        assert!(result.success);
        let metrics = result.metrics.unwrap();
        assert!(metrics.composition.is_none());
        assert!(result.goal.is_none());
        assert!(result.interpretations.unwrap().body_fat_percentage.is_none());
    }

    #[test]
    fn test_invalid_record_returns_errors_only() {
        let mut record = MeasurementRecord::new(Gender::Male, 30, 400.0, 180.0, 85.0, 100.0);
        record.waist = Some(120.0);

        let result = compute_metrics(&record);
        assert!(!result.success);
        assert!(result.metrics.is_none());
        assert!(result.goal.is_none());
        assert!(result.errors.iter().any(|e| e.starts_with("Weight")));
    }

    #[test]
    fn test_failure_serialization_omits_metrics() {
        let result = compute_metrics(&MeasurementRecord::default());
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["success"], false);
        assert!(json.get("metrics").is_none());
        assert!(json["errors"].as_array().is_some_and(|e| !e.is_empty()));
    }

    #[test]
    fn test_composition_fields_flattened() {
        let record = MeasurementRecord::new(Gender::Male, 30, 80.0, 180.0, 85.0, 100.0)
            .with_skinfold(SkinfoldSite::Chest, 10.0)
            .with_skinfold(SkinfoldSite::Abdomen, 15.0)
            .with_skinfold(SkinfoldSite::Thigh, 12.0);

        let json = serde_json::to_value(compute_metrics(&record)).unwrap();
        assert_eq!(json["metrics"]["bmi"], 24.69);
        assert_eq!(json["metrics"]["body_fat_percentage"], 11.2);
        assert_eq!(json["metrics"]["skinfold_protocol"], "male_specific");
        assert_eq!(json["goal"]["primary_goal"], "Standard plan");
    }
}
