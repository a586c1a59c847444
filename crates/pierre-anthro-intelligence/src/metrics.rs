// ABOUTME: Basic anthropometric indices computed from circumferences, height and weight
// ABOUTME: BMI, waist-hip ratio, waist-height ratio and body roundness index with rounding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Basic Indices
//!
//! All functions take lengths in centimetres and mass in kilograms, round to
//! the precision the result is reported at, and refuse to return a
//! non-finite number.

use crate::error::ComputationError;
use crate::physiological_constants::body_roundness;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Round half away from zero to `decimals` places
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

fn positive(
    value: f64,
    metric: &'static str,
    denominator: &'static str,
) -> Result<f64, ComputationError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ComputationError::DegenerateDenominator {
            metric,
            denominator,
        })
    }
}

pub(crate) fn finite(value: f64, metric: &'static str) -> Result<f64, ComputationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ComputationError::NonFinite { metric })
    }
}

/// Body-Mass Index in kg/m², 2 decimals
///
/// # Errors
///
/// Returns an error if height is zero, negative or not finite
pub fn body_mass_index(weight_kg: f64, height_cm: f64) -> Result<f64, ComputationError> {
    let height_m = positive(height_cm, "bmi", "height")? / 100.0;
    finite(round_to(weight_kg / (height_m * height_m), 2), "bmi")
}

/// Waist-Hip Ratio, 2 decimals
///
/// # Errors
///
/// Returns an error if hip circumference is zero, negative or not finite
pub fn waist_hip_ratio(waist_cm: f64, hip_cm: f64) -> Result<f64, ComputationError> {
    let hip_cm = positive(hip_cm, "waist_hip_ratio", "hip")?;
    finite(round_to(waist_cm / hip_cm, 2), "waist_hip_ratio")
}

/// Waist-Height Ratio, 2 decimals
///
/// # Errors
///
/// Returns an error if height is zero, negative or not finite
pub fn waist_height_ratio(waist_cm: f64, height_cm: f64) -> Result<f64, ComputationError> {
    let height_cm = positive(height_cm, "waist_height_ratio", "height")?;
    finite(round_to(waist_cm / height_cm, 2), "waist_height_ratio")
}

/// Body Roundness Index (Thomas et al. 2013), 2 decimals
///
/// Formula: `BRI = 364.2 - 365.5 * sqrt(1 - (waist_m / 2π)² / (0.5 * height_m)²)`
///
/// The body is modelled as an ellipse; the radicand is its eccentricity term
/// and must stay in `[0, 1]`. A waist wider than `π * height` leaves that
/// domain and the index is undefined.
///
/// # Errors
///
/// Returns an error if height is not positive or the radicand leaves `[0, 1]`
pub fn body_roundness_index(waist_cm: f64, height_cm: f64) -> Result<f64, ComputationError> {
    let height_m = positive(height_cm, "body_roundness_index", "height")? / 100.0;
    let waist_m = waist_cm / 100.0;

    let waist_radius = waist_m / (2.0 * PI);
    let half_height = 0.5 * height_m;
    let radicand = 1.0 - (waist_radius * waist_radius) / (half_height * half_height);

    if !(0.0..=1.0).contains(&radicand) {
        return Err(ComputationError::RadicandOutOfDomain {
            metric: "body_roundness_index",
            radicand,
        });
    }

    let bri = body_roundness::ECCENTRICITY_COEF.mul_add(-radicand.sqrt(), body_roundness::INTERCEPT);
    finite(round_to(bri, 2), "body_roundness_index")
}

/// Indices computed for every valid record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BasicIndices {
    /// Body-Mass Index (kg/m²)
    pub bmi: f64,
    /// Waist-Hip Ratio
    pub waist_hip_ratio: f64,
    /// Waist-Height Ratio
    pub waist_height_ratio: f64,
    /// Body Roundness Index
    pub body_roundness_index: f64,
}

impl BasicIndices {
    /// Compute all four indices; any undefined index fails the whole set
    ///
    /// # Errors
    ///
    /// Returns the first [`ComputationError`] encountered
    pub fn compute(
        weight_kg: f64,
        height_cm: f64,
        waist_cm: f64,
        hip_cm: f64,
    ) -> Result<Self, ComputationError> {
        Ok(Self {
            bmi: body_mass_index(weight_kg, height_cm)?,
            waist_hip_ratio: waist_hip_ratio(waist_cm, hip_cm)?,
            waist_height_ratio: waist_height_ratio(waist_cm, height_cm)?,
            body_roundness_index: body_roundness_index(waist_cm, height_cm)?,
        })
    }
}
