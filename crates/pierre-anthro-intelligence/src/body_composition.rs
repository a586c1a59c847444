// ABOUTME: Skinfold-based body composition using Jackson-Pollock density and the Siri equation
// ABOUTME: Site selection, body density, body-fat percentage and fat-free mass metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Body Composition Module
//!
//! Estimates body fat from three skinfold sites using the generalized
//! Jackson-Pollock regressions and converts density to fat percentage with
//! the Siri two-compartment model.
//!
//! # Scientific References
//!
//! - Jackson, A.S. & Pollock, M.L. (1978). *British Journal of Nutrition*, 40(3), 497-504.
//!   <https://doi.org/10.1079/BJN19780152>
//! - Jackson, A.S., Pollock, M.L. & Ward, A. (1980). *Medicine and Science in Sports and
//!   Exercise*, 12(3), 175-181.
//! - Siri, W.E. (1961). Body composition from fluid spaces and density: analysis of methods.
//!
//! # Site selection
//!
//! | Gender | Preferred sites | Fallback sites |
//! |---|---|---|
//! | Male | chest, abdomen, thigh | triceps, subscapular, suprailiac |
//! | Female | triceps, suprailiac, thigh | triceps, subscapular, suprailiac |

use crate::error::ComputationError;
use crate::metrics::{finite, round_to};
use crate::physiological_constants::{jackson_pollock, siri};
use pierre_anthro_core::models::{Gender, MeasurementInput, Skinfolds};
use serde::{Deserialize, Serialize};

/// Which complete three-site subset was measured
///
/// Variants carry the three values so a selection can never be built from an
/// incomplete set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SkinfoldSelection {
    /// No complete subset present; composition is skipped
    None,
    /// Triceps, subscapular, suprailiac (either gender)
    Generic {
        /// Triceps (mm)
        triceps: f64,
        /// Subscapular (mm)
        subscapular: f64,
        /// Suprailiac (mm)
        suprailiac: f64,
    },
    /// Chest, abdomen, thigh (men)
    MaleSpecific {
        /// Chest (mm)
        chest: f64,
        /// Abdomen (mm)
        abdomen: f64,
        /// Thigh (mm)
        thigh: f64,
    },
    /// Triceps, suprailiac, thigh (women)
    FemaleSpecific {
        /// Triceps (mm)
        triceps: f64,
        /// Suprailiac (mm)
        suprailiac: f64,
        /// Thigh (mm)
        thigh: f64,
    },
}

impl SkinfoldSelection {
    /// Sum of the three selected sites (mm), `None` when nothing was selected
    #[must_use]
    pub fn sum(&self) -> Option<f64> {
        match *self {
            Self::None => None,
            Self::Generic {
                triceps,
                subscapular,
                suprailiac,
            } => Some(triceps + subscapular + suprailiac),
            Self::MaleSpecific {
                chest,
                abdomen,
                thigh,
            } => Some(chest + abdomen + thigh),
            Self::FemaleSpecific {
                triceps,
                suprailiac,
                thigh,
            } => Some(triceps + suprailiac + thigh),
        }
    }

    /// Protocol tag reported alongside the result
    #[must_use]
    pub const fn protocol(&self) -> Option<SkinfoldProtocol> {
        match self {
            Self::None => None,
            Self::Generic { .. } => Some(SkinfoldProtocol::Generic),
            Self::MaleSpecific { .. } => Some(SkinfoldProtocol::MaleSpecific),
            Self::FemaleSpecific { .. } => Some(SkinfoldProtocol::FemaleSpecific),
        }
    }
}

/// Serializable name of the skinfold subset used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkinfoldProtocol {
    /// Triceps, subscapular, suprailiac
    Generic,
    /// Chest, abdomen, thigh
    MaleSpecific,
    /// Triceps, suprailiac, thigh
    FemaleSpecific,
}

/// Pick the skinfold subset for `gender`: gender-specific first, then generic
#[must_use]
pub fn select_skinfold_sites(gender: Gender, skinfolds: &Skinfolds) -> SkinfoldSelection {
    let specific = match gender {
        Gender::Male => match (skinfolds.chest, skinfolds.abdomen, skinfolds.thigh) {
            (Some(chest), Some(abdomen), Some(thigh)) => Some(SkinfoldSelection::MaleSpecific {
                chest,
                abdomen,
                thigh,
            }),
            _ => None,
        },
        Gender::Female => match (skinfolds.triceps, skinfolds.suprailiac, skinfolds.thigh) {
            (Some(triceps), Some(suprailiac), Some(thigh)) => {
                Some(SkinfoldSelection::FemaleSpecific {
                    triceps,
                    suprailiac,
                    thigh,
                })
            }
            _ => None,
        },
    };

    specific.unwrap_or_else(|| {
        match (
            skinfolds.triceps,
            skinfolds.subscapular,
            skinfolds.suprailiac,
        ) {
            (Some(triceps), Some(subscapular), Some(suprailiac)) => SkinfoldSelection::Generic {
                triceps,
                subscapular,
                suprailiac,
            },
            _ => SkinfoldSelection::None,
        }
    })
}

/// Body density (g/cm³) from a three-site skinfold sum
///
/// Formula: `density = intercept - a*S + b*S² - c*age` with sex-specific
/// coefficients. Generic and gender-specific site sets share the same
/// coefficients; only the sum differs.
///
/// # Errors
///
/// Returns an error if the density is not a positive finite number
pub fn body_density(gender: Gender, skinfold_sum_mm: f64, age: u32) -> Result<f64, ComputationError> {
    let coef = match gender {
        Gender::Male => jackson_pollock::MALE,
        Gender::Female => jackson_pollock::FEMALE,
    };

    let sum = skinfold_sum_mm;
    let density = coef.intercept - coef.sum_linear * sum + coef.sum_quadratic * sum * sum
        - coef.age * f64::from(age);

    if density.is_finite() && density > 0.0 {
        Ok(density)
    } else {
        Err(ComputationError::DegenerateDensity { density })
    }
}

/// Body-fat percentage from density using the Siri equation, 1 decimal
///
/// Formula: `%BF = 495 / density - 450`
///
/// # Errors
///
/// Returns an error if density is not a positive finite number
pub fn siri_body_fat_percentage(density: f64) -> Result<f64, ComputationError> {
    if !density.is_finite() || density <= 0.0 {
        return Err(ComputationError::DegenerateDensity { density });
    }
    finite(
        round_to(siri::DENSITY_NUMERATOR / density - siri::OFFSET, 1),
        "body_fat_percentage",
    )
}

/// Fat-free mass in kg, 2 decimals
#[must_use]
pub fn fat_free_mass(weight_kg: f64, body_fat_percentage: f64) -> f64 {
    round_to(weight_kg * (1.0 - body_fat_percentage / 100.0), 2)
}

/// Fat-free-mass index in kg/m², 2 decimals
///
/// # Errors
///
/// Returns an error if height is not a positive finite number
pub fn fat_free_mass_index(fat_free_mass_kg: f64, height_cm: f64) -> Result<f64, ComputationError> {
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(ComputationError::DegenerateDenominator {
            metric: "fat_free_mass_index",
            denominator: "height",
        });
    }
    let height_m = height_cm / 100.0;
    finite(
        round_to(fat_free_mass_kg / (height_m * height_m), 2),
        "fat_free_mass_index",
    )
}

/// Body composition derived from a complete skinfold subset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyComposition {
    /// Skinfold subset used
    pub skinfold_protocol: SkinfoldProtocol,
    /// Sum of the three sites (mm)
    pub skinfold_sum: f64,
    /// Body density (g/cm³), unrounded
    pub body_density: f64,
    /// Body fat (%)
    pub body_fat_percentage: f64,
    /// Fat-free mass (kg)
    pub fat_free_mass: f64,
    /// Fat-free-mass index (kg/m²)
    pub fat_free_mass_index: f64,
    /// Fat mass (kg)
    pub fat_mass: f64,
}

/// Compute body composition when a complete skinfold subset is present
///
/// Returns `Ok(None)` when neither subset is complete; that is not an error.
///
/// # Errors
///
/// Returns an error if density, fat percentage or FFMI cannot be evaluated
pub fn calculate_body_composition(
    input: &MeasurementInput,
) -> Result<Option<BodyComposition>, ComputationError> {
    let selection = select_skinfold_sites(input.gender, &input.skinfolds);
    let (Some(skinfold_sum), Some(skinfold_protocol)) = (selection.sum(), selection.protocol())
    else {
        tracing::debug!("No complete skinfold subset, skipping body composition");
        return Ok(None);
    };

    let density = body_density(input.gender, skinfold_sum, input.age)?;
    let body_fat_percentage = siri_body_fat_percentage(density)?;
    let fat_free_mass = fat_free_mass(input.weight_kg, body_fat_percentage);
    let fat_free_mass_index = fat_free_mass_index(fat_free_mass, input.height_cm)?;
    let fat_mass = round_to(input.weight_kg - fat_free_mass, 2);

    tracing::debug!(
        protocol = ?skinfold_protocol,
        skinfold_sum,
        density,
        body_fat_percentage,
        "Computed body composition"
    );

    Ok(Some(BodyComposition {
        skinfold_protocol,
        skinfold_sum,
        body_density: density,
        body_fat_percentage,
        fat_free_mass,
        fat_free_mass_index,
        fat_mass,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skinfolds(values: &[(&str, f64)]) -> Skinfolds {
        let mut set = Skinfolds::default();
        for (name, value) in values {
            match *name {
                "triceps" => set.triceps = Some(*value),
                "subscapular" => set.subscapular = Some(*value),
                "suprailiac" => set.suprailiac = Some(*value),
                "chest" => set.chest = Some(*value),
                "abdomen" => set.abdomen = Some(*value),
                "thigh" => set.thigh = Some(*value),
                other => panic!("unknown site {other}"),
            }
        }
        set
    }

    #[test]
    fn test_male_specific_preferred_over_generic() {
        let set = skinfolds(&[
            ("chest", 10.0),
            ("abdomen", 15.0),
            ("thigh", 12.0),
            ("triceps", 20.0),
            ("subscapular", 20.0),
            ("suprailiac", 20.0),
        ]);

        let selection = select_skinfold_sites(Gender::Male, &set);
        assert_eq!(selection.protocol(), Some(SkinfoldProtocol::MaleSpecific));
        assert_eq!(selection.sum(), Some(37.0));
    }

    #[test]
    fn test_female_specific_sites() {
        let set = skinfolds(&[("triceps", 15.0), ("suprailiac", 12.0), ("thigh", 20.0)]);

        let selection = select_skinfold_sites(Gender::Female, &set);
        assert_eq!(selection.protocol(), Some(SkinfoldProtocol::FemaleSpecific));
        assert_eq!(selection.sum(), Some(47.0));
    }

    #[test]
    fn test_male_sites_ignored_for_female() {
        let set = skinfolds(&[("chest", 10.0), ("abdomen", 15.0), ("thigh", 12.0)]);
        assert_eq!(
            select_skinfold_sites(Gender::Female, &set),
            SkinfoldSelection::None
        );
    }

    #[test]
    fn test_generic_fallback() {
        let set = skinfolds(&[
            ("triceps", 15.0),
            ("subscapular", 14.0),
            ("suprailiac", 12.0),
            ("chest", 9.0),
        ]);

        let selection = select_skinfold_sites(Gender::Male, &set);
        assert_eq!(selection.protocol(), Some(SkinfoldProtocol::Generic));
        assert_eq!(selection.sum(), Some(41.0));
    }

    #[test]
    fn test_incomplete_subsets_select_nothing() {
        let set = skinfolds(&[("triceps", 15.0), ("subscapular", 14.0)]);
        assert_eq!(select_skinfold_sites(Gender::Male, &set), SkinfoldSelection::None);
        assert_eq!(SkinfoldSelection::None.sum(), None);
    }

    #[test]
    fn test_male_density_and_siri() {
        let density = body_density(Gender::Male, 37.0, 30).unwrap();
        assert!((density - 1.073_260_5).abs() < 1e-9);

        let body_fat = siri_body_fat_percentage(density).unwrap();
        assert!((body_fat - 11.2).abs() < 1e-9);
    }

    #[test]
    fn test_female_density() {
        let density = body_density(Gender::Female, 47.0, 25).unwrap();
        assert!((density - 1.054_426_5).abs() < 1e-7);
        assert!((siri_body_fat_percentage(density).unwrap() - 19.4).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_density_rejected() {
        assert!(matches!(
            siri_body_fat_percentage(0.0),
            Err(ComputationError::DegenerateDensity { .. })
        ));
        assert!(siri_body_fat_percentage(f64::NAN).is_err());
    }

    #[test]
    fn test_fat_free_mass_metrics() {
        let ffm = fat_free_mass(80.0, 11.2);
        assert!((ffm - 71.04).abs() < 1e-9);
        assert!((fat_free_mass_index(ffm, 180.0).unwrap() - 21.93).abs() < 1e-9);
        assert!(fat_free_mass_index(ffm, 0.0).is_err());
    }
}
