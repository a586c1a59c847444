// ABOUTME: Core data models for anthropometric measurements
// ABOUTME: Re-exports measurement records, typed inputs, gender and skinfold site types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Two views of one measurement session:
//!
//! - [`MeasurementRecord`]: the wire form. Every field is optional so that a
//!   missing value can be reported by the validator rather than rejected by
//!   the deserializer.
//! - [`MeasurementInput`]: the typed form the calculation engine consumes.

mod measurement;

pub use measurement::{
    Gender, MeasurementInput, MeasurementRecord, RecordConversionError, SkinfoldSite, Skinfolds,
    UnknownGender,
};
