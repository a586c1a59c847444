// ABOUTME: Classification of computed metrics into labelled bands with an optimal/warning/alert status
// ABOUTME: WHO BMI classes, waist ratio risk bands, body-fat categories and FFMI ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::physiological_constants::interpretation as bands;
use pierre_anthro_core::models::Gender;
use serde::Serialize;

/// Traffic-light status of a metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricStatus {
    /// Within the healthy or target band
    Optimal,
    /// Outside the target band, not yet a risk band
    Warning,
    /// Risk band
    Alert,
}

/// Band a metric falls in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Interpretation {
    /// Band name
    pub label: &'static str,
    /// Status of the band
    pub status: MetricStatus,
}

const fn band(label: &'static str, status: MetricStatus) -> Interpretation {
    Interpretation { label, status }
}

/// WHO adult BMI classification
#[must_use]
pub fn interpret_bmi(bmi: f64) -> Interpretation {
    let [severe, moderate, mild, normal, overweight, obesity_1, obesity_2] = bands::BMI_BOUNDS;
    if bmi < severe {
        band("Severe thinness", MetricStatus::Alert)
    } else if bmi < moderate {
        band("Moderate thinness", MetricStatus::Alert)
    } else if bmi < mild {
        band("Mild thinness", MetricStatus::Warning)
    } else if bmi < normal {
        band("Normal weight", MetricStatus::Optimal)
    } else if bmi < overweight {
        band("Overweight", MetricStatus::Warning)
    } else if bmi < obesity_1 {
        band("Obesity class I", MetricStatus::Alert)
    } else if bmi < obesity_2 {
        band("Obesity class II", MetricStatus::Alert)
    } else {
        band("Obesity class III", MetricStatus::Alert)
    }
}

fn risk_band(value: f64, (optimal, moderate): (f64, f64), optimal_label: &'static str) -> Interpretation {
    if value <= optimal {
        band(optimal_label, MetricStatus::Optimal)
    } else if value <= moderate {
        band("Moderate risk", MetricStatus::Warning)
    } else {
        band("High risk", MetricStatus::Alert)
    }
}

/// Cardiometabolic risk from waist-hip ratio
#[must_use]
pub fn interpret_waist_hip_ratio(gender: Gender, ratio: f64) -> Interpretation {
    let bounds = match gender {
        Gender::Male => bands::WHR_MALE,
        Gender::Female => bands::WHR_FEMALE,
    };
    risk_band(ratio, bounds, "Optimal")
}

/// Cardiometabolic risk from waist-height ratio
#[must_use]
pub fn interpret_waist_height_ratio(ratio: f64) -> Interpretation {
    risk_band(ratio, bands::WAIST_HEIGHT, "Healthy")
}

/// Body-fat category
#[must_use]
pub fn interpret_body_fat(gender: Gender, body_fat_percentage: f64) -> Interpretation {
    let [essential, athletic, fitness, acceptable] = match gender {
        Gender::Male => bands::BODY_FAT_MALE,
        Gender::Female => bands::BODY_FAT_FEMALE,
    };
    if body_fat_percentage < essential {
        band("Essential fat", MetricStatus::Warning)
    } else if body_fat_percentage <= athletic {
        band("Athletic", MetricStatus::Optimal)
    } else if body_fat_percentage <= fitness {
        band("Fitness", MetricStatus::Optimal)
    } else if body_fat_percentage <= acceptable {
        band("Acceptable", MetricStatus::Warning)
    } else {
        band("Elevated", MetricStatus::Alert)
    }
}

/// Lean-mass development from FFMI
#[must_use]
pub fn interpret_fat_free_mass_index(gender: Gender, ffmi: f64) -> Interpretation {
    let [low, moderate, optimal] = match gender {
        Gender::Male => bands::FFMI_MALE,
        Gender::Female => bands::FFMI_FEMALE,
    };
    if ffmi < low {
        band("Low", MetricStatus::Alert)
    } else if ffmi < moderate {
        band("Moderate", MetricStatus::Warning)
    } else if ffmi <= optimal {
        band("Optimal", MetricStatus::Optimal)
    } else {
        band("Very high", MetricStatus::Warning)
    }
}

/// Interpretation of every metric present in a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricInterpretations {
    /// BMI class
    pub bmi: Interpretation,
    /// Waist-hip ratio risk
    pub waist_hip_ratio: Interpretation,
    /// Waist-height ratio risk
    pub waist_height_ratio: Interpretation,
    /// Body-fat category, when composition was computed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_fat_percentage: Option<Interpretation>,
    /// FFMI band, when composition was computed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat_free_mass_index: Option<Interpretation>,
}
