// ABOUTME: Physiological range and cross-field coherence validation for measurement records
// ABOUTME: Evaluates every rule independently and reports the full list of violations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Measurement validation
//!
//! [`validate_measurements`] never stops at the first problem: each rule is
//! checked on its own so a client can fix every field in one round trip.
//! Failures are returned as data; nothing here panics or returns `Err`.

use crate::physiological_constants::ranges;
use pierre_anthro_core::models::{Gender, MeasurementRecord, SkinfoldSite};
use serde::Serialize;
use std::fmt;

/// Category of a validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    /// Required input absent
    MissingField,
    /// Value outside its physiological domain
    OutOfRange,
    /// Fields are individually valid but inconsistent together
    CrossFieldInconsistency,
}

/// One violated rule
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    /// Failure category
    pub kind: ValidationErrorKind,
    /// Field or rule name (`weight`, `triceps`, `waist_hip`, `bmi_coherence`)
    pub field: &'static str,
    /// Human-readable reason
    pub message: String,
}

impl ValidationError {
    fn missing(field: &'static str) -> Self {
        Self {
            kind: ValidationErrorKind::MissingField,
            field,
            message: format!("Missing required field: {field}"),
        }
    }

    fn out_of_range(field: &'static str, message: String) -> Self {
        Self {
            kind: ValidationErrorKind::OutOfRange,
            field,
            message,
        }
    }

    fn inconsistent(field: &'static str, message: String) -> Self {
        Self {
            kind: ValidationErrorKind::CrossFieldInconsistency,
            field,
            message,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Outcome of validating one record
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    /// True when no rule was violated
    pub valid: bool,
    /// Every violated rule, in evaluation order
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// Error messages as plain strings
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// True when some error concerns `field`
    #[must_use]
    pub fn has_error_for(&self, field: &str) -> bool {
        self.errors.iter().any(|error| error.field == field)
    }
}

/// A required numeric field with its domain and the wording of its error
struct RangeRule {
    field: &'static str,
    label: &'static str,
    unit: &'static str,
    bounds: (f64, f64),
}

const REQUIRED_RANGES: [RangeRule; 5] = [
    RangeRule {
        field: "age",
        label: "Age",
        unit: "years",
        bounds: ranges::AGE_YEARS,
    },
    RangeRule {
        field: "weight",
        label: "Weight",
        unit: "kg",
        bounds: ranges::WEIGHT_KG,
    },
    RangeRule {
        field: "height",
        label: "Height",
        unit: "cm",
        bounds: ranges::HEIGHT_CM,
    },
    RangeRule {
        field: "waist",
        label: "Waist circumference",
        unit: "cm",
        bounds: ranges::CIRCUMFERENCE_CM,
    },
    RangeRule {
        field: "hip",
        label: "Hip circumference",
        unit: "cm",
        bounds: ranges::CIRCUMFERENCE_CM,
    },
];

fn within(value: f64, (min, max): (f64, f64)) -> bool {
    (min..=max).contains(&value)
}

fn required_value(record: &MeasurementRecord, field: &str) -> Option<f64> {
    match field {
        "age" => record.age,
        "weight" => record.weight,
        "height" => record.height,
        "waist" => record.waist,
        "hip" => record.hip,
        _ => None,
    }
}

fn check_gender(record: &MeasurementRecord, errors: &mut Vec<ValidationError>) {
    match record.gender.as_deref() {
        None => errors.push(ValidationError::missing("gender")),
        Some(raw) => {
            if raw.parse::<Gender>().is_err() {
                errors.push(ValidationError::out_of_range(
                    "gender",
                    "Gender must be 'M' (male) or 'F' (female)".to_owned(),
                ));
            }
        }
    }
}

fn check_required_ranges(record: &MeasurementRecord, errors: &mut Vec<ValidationError>) {
    for rule in &REQUIRED_RANGES {
        let Some(value) = required_value(record, rule.field) else {
            errors.push(ValidationError::missing(rule.field));
            continue;
        };
        let (min, max) = rule.bounds;
        if !within(value, rule.bounds) {
            errors.push(ValidationError::out_of_range(
                rule.field,
                format!(
                    "{} must be between {min} and {max} {}",
                    rule.label, rule.unit
                ),
            ));
        } else if rule.field == "age" && value.fract() != 0.0 {
            errors.push(ValidationError::out_of_range(
                "age",
                "Age must be a whole number of years".to_owned(),
            ));
        }
    }
}

fn check_skinfolds(record: &MeasurementRecord, errors: &mut Vec<ValidationError>) {
    let (min, max) = ranges::SKINFOLD_MM;
    for (site, value) in record.skinfolds().present() {
        if !within(value, ranges::SKINFOLD_MM) {
            errors.push(ValidationError::out_of_range(
                site.name(),
                format!("{} skinfold must be between {min} and {max} mm", site_label(site)),
            ));
        }
    }
}

const fn site_label(site: SkinfoldSite) -> &'static str {
    match site {
        SkinfoldSite::Triceps => "Triceps",
        SkinfoldSite::Subscapular => "Subscapular",
        SkinfoldSite::Suprailiac => "Suprailiac",
        SkinfoldSite::Chest => "Chest",
        SkinfoldSite::Abdomen => "Abdomen",
        SkinfoldSite::Thigh => "Thigh",
    }
}

fn check_waist_hip(record: &MeasurementRecord, errors: &mut Vec<ValidationError>) {
    if let (Some(waist), Some(hip)) = (record.waist, record.hip) {
        if waist > hip {
            errors.push(ValidationError::inconsistent(
                "waist_hip",
                "Hip circumference must be greater than or equal to waist circumference"
                    .to_owned(),
            ));
        }
    }
}

fn check_bmi_coherence(record: &MeasurementRecord, errors: &mut Vec<ValidationError>) {
    let (Some(weight), Some(height)) = (record.weight, record.height) else {
        return;
    };
    if !weight.is_finite() || !height.is_finite() || height <= 0.0 {
        return;
    }

    let height_m = height / 100.0;
    let bmi = weight / (height_m * height_m);
    if !within(bmi, ranges::BMI_COHERENCE) {
        let (min, max) = ranges::BMI_COHERENCE;
        errors.push(ValidationError::inconsistent(
            "bmi_coherence",
            format!(
                "Weight-to-height relationship is not physiologically coherent (BMI {bmi:.1} outside {min}-{max})"
            ),
        ));
    }
}

/// Validate a measurement record against physiological ranges and coherence rules
///
/// Rules, all evaluated:
/// - gender present and one of `M`/`MALE`/`F`/`FEMALE`
/// - age [10, 120] whole years, weight [30, 300] kg, height [100, 250] cm,
///   waist and hip [20, 200] cm
/// - every present skinfold within [3, 70] mm
/// - waist ≤ hip
/// - BMI derived from weight and height within [12, 60]
#[must_use]
pub fn validate_measurements(record: &MeasurementRecord) -> ValidationReport {
    let mut errors = Vec::new();

    check_gender(record, &mut errors);
    check_required_ranges(record, &mut errors);
    check_skinfolds(record, &mut errors);
    check_waist_hip(record, &mut errors);
    check_bmi_coherence(record, &mut errors);

    if !errors.is_empty() {
        tracing::debug!(
            error_count = errors.len(),
            fields = ?errors.iter().map(|e| e.field).collect::<Vec<_>>(),
            "Measurement record failed validation"
        );
    }

    ValidationReport::from_errors(errors)
}
