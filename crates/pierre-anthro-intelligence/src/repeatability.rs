// ABOUTME: Technical error check over repeated measurements of the same anthropometric site
// ABOUTME: Sample coefficient of variation compared against the ISAK acceptance limit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::error::ComputationError;
use crate::metrics::round_to;
use crate::physiological_constants::measurement_quality;
use serde::Serialize;

/// Quality of a series of repeated measurements
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RepeatabilityAssessment {
    /// True when the coefficient of variation is within the ISAK limit
    pub acceptable: bool,
    /// Sample coefficient of variation (%), 2 decimals
    pub coefficient_of_variation: f64,
    /// Number of repeats assessed
    pub repeats: usize,
}

/// Assess repeated measurements of one site
///
/// CV is the sample standard deviation (n - 1) over the mean, in percent.
/// Acceptance is decided on the unrounded CV. Fewer than two repeats cannot
/// be assessed and are reported as not acceptable with a CV of 0.
///
/// # Errors
///
/// Returns an error if a value is not finite or the mean is not positive
pub fn assess_repeatability(values: &[f64]) -> Result<RepeatabilityAssessment, ComputationError> {
    let repeats = values.len();
    if repeats < measurement_quality::MIN_REPEATS {
        return Ok(RepeatabilityAssessment {
            acceptable: false,
            coefficient_of_variation: 0.0,
            repeats,
        });
    }

    if values.iter().any(|value| !value.is_finite()) {
        return Err(ComputationError::NonFinite {
            metric: "coefficient_of_variation",
        });
    }

    let count = repeats as f64;
    let mean = values.iter().sum::<f64>() / count;
    if !mean.is_finite() {
        return Err(ComputationError::NonFinite {
            metric: "coefficient_of_variation",
        });
    }
    if mean <= 0.0 {
        return Err(ComputationError::DegenerateDenominator {
            metric: "coefficient_of_variation",
            denominator: "mean",
        });
    }

    let variance = values
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / (count - 1.0);
    let cv = variance.sqrt() / mean * 100.0;
    if !cv.is_finite() {
        return Err(ComputationError::NonFinite {
            metric: "coefficient_of_variation",
        });
    }

    Ok(RepeatabilityAssessment {
        acceptable: cv <= measurement_quality::MAX_COEFFICIENT_OF_VARIATION,
        coefficient_of_variation: round_to(cv, 2),
        repeats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consistent_repeats_acceptable() {
        let assessment = assess_repeatability(&[10.0, 10.2, 10.1]).unwrap();
        assert!(assessment.acceptable);
        assert!((assessment.coefficient_of_variation - 0.99).abs() < 1e-9);
        assert_eq!(assessment.repeats, 3);
    }

    #[test]
    fn test_scattered_repeats_rejected() {
        let assessment = assess_repeatability(&[10.0, 12.0]).unwrap();
        assert!(!assessment.acceptable);
        assert!((assessment.coefficient_of_variation - 12.86).abs() < 1e-9);
    }

    #[test]
    fn test_single_value_not_assessable() {
        let assessment = assess_repeatability(&[12.0]).unwrap();
        assert!(!assessment.acceptable);
        assert!(assessment.coefficient_of_variation.abs() < f64::EPSILON);
        assert!(!assess_repeatability(&[]).unwrap().acceptable);
    }

    #[test]
    fn test_identical_repeats_have_zero_cv() {
        let assessment = assess_repeatability(&[8.0, 8.0, 8.0]).unwrap();
        assert!(assessment.acceptable);
        assert!(assessment.coefficient_of_variation.abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_positive_mean_undefined() {
        assert!(matches!(
            assess_repeatability(&[0.0, 0.0]),
            Err(ComputationError::DegenerateDenominator { .. })
        ));
        assert!(assess_repeatability(&[1.0, f64::INFINITY]).is_err());
    }

    #[test]
    fn test_overflowing_repeats_are_non_finite() {
        assert!(matches!(
            assess_repeatability(&[1e308, 1e308]),
            Err(ComputationError::NonFinite { .. })
        ));
        assert!(matches!(
            assess_repeatability(&[1e308, 1.0]),
            Err(ComputationError::NonFinite { .. })
        ));
    }
}
