// ABOUTME: Measurement record and typed input models for anthropometric calculations
// ABOUTME: Gender, SkinfoldSite, Skinfolds, MeasurementRecord and MeasurementInput definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Biological sex used by the sex-specific regression equations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    /// Male equations and thresholds
    #[serde(alias = "M", alias = "male")]
    Male,
    /// Female equations and thresholds
    #[serde(alias = "F", alias = "female")]
    Female,
}

impl Gender {
    /// Canonical upper-case label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "MALE",
            Self::Female => "FEMALE",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gender string that is neither male nor female
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown gender '{0}', expected M/MALE or F/FEMALE")]
pub struct UnknownGender(pub String);

impl FromStr for Gender {
    type Err = UnknownGender;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "M" | "MALE" => Ok(Self::Male),
            "F" | "FEMALE" => Ok(Self::Female),
            _ => Err(UnknownGender(s.to_owned())),
        }
    }
}

/// Standardized caliper measurement location
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SkinfoldSite {
    /// Posterior mid-line of the upper arm
    Triceps,
    /// Below the inferior angle of the scapula
    Subscapular,
    /// Above the iliac crest
    Suprailiac,
    /// Diagonal fold between axilla and nipple
    Chest,
    /// Vertical fold beside the umbilicus
    Abdomen,
    /// Anterior mid-line of the thigh
    Thigh,
}

impl SkinfoldSite {
    /// Every site in declaration order
    pub const ALL: [Self; 6] = [
        Self::Triceps,
        Self::Subscapular,
        Self::Suprailiac,
        Self::Chest,
        Self::Abdomen,
        Self::Thigh,
    ];

    /// Field name used on the wire
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Triceps => "triceps",
            Self::Subscapular => "subscapular",
            Self::Suprailiac => "suprailiac",
            Self::Chest => "chest",
            Self::Abdomen => "abdomen",
            Self::Thigh => "thigh",
        }
    }
}

impl fmt::Display for SkinfoldSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sparse set of skinfold thicknesses in millimetres
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Skinfolds {
    /// Triceps skinfold (mm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triceps: Option<f64>,
    /// Subscapular skinfold (mm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscapular: Option<f64>,
    /// Suprailiac skinfold (mm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suprailiac: Option<f64>,
    /// Chest skinfold (mm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chest: Option<f64>,
    /// Abdominal skinfold (mm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abdomen: Option<f64>,
    /// Thigh skinfold (mm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thigh: Option<f64>,
}

impl Skinfolds {
    /// Value measured at `site`, if any
    #[must_use]
    pub const fn get(&self, site: SkinfoldSite) -> Option<f64> {
        match site {
            SkinfoldSite::Triceps => self.triceps,
            SkinfoldSite::Subscapular => self.subscapular,
            SkinfoldSite::Suprailiac => self.suprailiac,
            SkinfoldSite::Chest => self.chest,
            SkinfoldSite::Abdomen => self.abdomen,
            SkinfoldSite::Thigh => self.thigh,
        }
    }

    /// Set the value measured at `site`
    pub fn set(&mut self, site: SkinfoldSite, value_mm: f64) {
        let slot = match site {
            SkinfoldSite::Triceps => &mut self.triceps,
            SkinfoldSite::Subscapular => &mut self.subscapular,
            SkinfoldSite::Suprailiac => &mut self.suprailiac,
            SkinfoldSite::Chest => &mut self.chest,
            SkinfoldSite::Abdomen => &mut self.abdomen,
            SkinfoldSite::Thigh => &mut self.thigh,
        };
        *slot = Some(value_mm);
    }

    /// Iterate over the sites that carry a value
    pub fn present(&self) -> impl Iterator<Item = (SkinfoldSite, f64)> + '_ {
        SkinfoldSite::ALL
            .into_iter()
            .filter_map(|site| self.get(site).map(|value| (site, value)))
    }

    /// True when no site carries a value
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.present().next().is_none()
    }
}

/// Measurement session as received from a client
///
/// Field names follow the public API (`weight` in kg, `height`, `waist` and
/// `hip` in cm, skinfolds in mm). Skinfold fields also accept the legacy
/// `<site>_fold` keys. A site and its legacy key are mutually exclusive:
/// sending both (`triceps` and `triceps_fold`) is a duplicate-field error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRecord {
    /// `M`/`MALE` or `F`/`FEMALE`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Age in years
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<f64>,
    /// Body mass in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Stature in centimetres
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Waist circumference in centimetres
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waist: Option<f64>,
    /// Hip circumference in centimetres
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hip: Option<f64>,
    /// Triceps skinfold (mm)
    #[serde(default, alias = "triceps_fold", skip_serializing_if = "Option::is_none")]
    pub triceps: Option<f64>,
    /// Subscapular skinfold (mm)
    #[serde(
        default,
        alias = "subscapular_fold",
        skip_serializing_if = "Option::is_none"
    )]
    pub subscapular: Option<f64>,
    /// Suprailiac skinfold (mm)
    #[serde(
        default,
        alias = "suprailiac_fold",
        skip_serializing_if = "Option::is_none"
    )]
    pub suprailiac: Option<f64>,
    /// Chest skinfold (mm)
    #[serde(default, alias = "chest_fold", skip_serializing_if = "Option::is_none")]
    pub chest: Option<f64>,
    /// Abdominal skinfold (mm)
    #[serde(default, alias = "abdomen_fold", skip_serializing_if = "Option::is_none")]
    pub abdomen: Option<f64>,
    /// Thigh skinfold (mm)
    #[serde(default, alias = "thigh_fold", skip_serializing_if = "Option::is_none")]
    pub thigh: Option<f64>,
}

impl MeasurementRecord {
    /// Record with every required field populated and no skinfolds
    #[must_use]
    pub fn new(gender: Gender, age: u32, weight: f64, height: f64, waist: f64, hip: f64) -> Self {
        Self {
            gender: Some(gender.as_str().to_owned()),
            age: Some(f64::from(age)),
            weight: Some(weight),
            height: Some(height),
            waist: Some(waist),
            hip: Some(hip),
            ..Self::default()
        }
    }

    /// Builder-style skinfold setter
    #[must_use]
    pub fn with_skinfold(mut self, site: SkinfoldSite, value_mm: f64) -> Self {
        let slot = match site {
            SkinfoldSite::Triceps => &mut self.triceps,
            SkinfoldSite::Subscapular => &mut self.subscapular,
            SkinfoldSite::Suprailiac => &mut self.suprailiac,
            SkinfoldSite::Chest => &mut self.chest,
            SkinfoldSite::Abdomen => &mut self.abdomen,
            SkinfoldSite::Thigh => &mut self.thigh,
        };
        *slot = Some(value_mm);
        self
    }

    /// Skinfold fields gathered into a [`Skinfolds`] set
    #[must_use]
    pub const fn skinfolds(&self) -> Skinfolds {
        Skinfolds {
            triceps: self.triceps,
            subscapular: self.subscapular,
            suprailiac: self.suprailiac,
            chest: self.chest,
            abdomen: self.abdomen,
            thigh: self.thigh,
        }
    }
}

/// Structural failure converting a record into a typed input
///
/// Range checks are the validator's job; this only covers values that cannot
/// be represented in [`MeasurementInput`] at all.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordConversionError {
    /// Required field absent
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    /// Gender string not recognised
    #[error(transparent)]
    UnknownGender(#[from] UnknownGender),
    /// Age is negative, fractional or not finite
    #[error("age must be a whole, non-negative number of years, got {0}")]
    InvalidAge(f64),
}

/// Typed measurement session consumed by the calculation engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasurementInput {
    /// Biological sex
    pub gender: Gender,
    /// Age in whole years
    pub age: u32,
    /// Body mass (kg)
    pub weight_kg: f64,
    /// Stature (cm)
    pub height_cm: f64,
    /// Waist circumference (cm)
    pub waist_cm: f64,
    /// Hip circumference (cm)
    pub hip_cm: f64,
    /// Optional skinfold thicknesses (mm)
    pub skinfolds: Skinfolds,
}

impl TryFrom<&MeasurementRecord> for MeasurementInput {
    type Error = RecordConversionError;

    fn try_from(record: &MeasurementRecord) -> Result<Self, Self::Error> {
        let gender = record
            .gender
            .as_deref()
            .ok_or(RecordConversionError::MissingField("gender"))?
            .parse::<Gender>()?;
        let age = record
            .age
            .ok_or(RecordConversionError::MissingField("age"))?;
        if !age.is_finite() || age < 0.0 || age.fract() != 0.0 || age > f64::from(u32::MAX) {
            return Err(RecordConversionError::InvalidAge(age));
        }

        Ok(Self {
            gender,
            age: age as u32,
            weight_kg: record
                .weight
                .ok_or(RecordConversionError::MissingField("weight"))?,
            height_cm: record
                .height
                .ok_or(RecordConversionError::MissingField("height"))?,
            waist_cm: record
                .waist
                .ok_or(RecordConversionError::MissingField("waist"))?,
            hip_cm: record.hip.ok_or(RecordConversionError::MissingField("hip"))?,
            skinfolds: record.skinfolds(),
        })
    }
}
