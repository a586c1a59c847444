// ABOUTME: Core types and constants for the Pierre anthropometry service
// ABOUTME: Foundation crate with error handling, measurement models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Anthropometry Core
//!
//! Foundation crate providing shared types and constants for the Pierre
//! sports-anthropometry service. It changes infrequently so that the
//! calculation engine and the HTTP layer can compile incrementally.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Service names and API paths
//! - **models**: Measurement records, typed inputs and skinfold sites

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Measurement models (`Gender`, `MeasurementRecord`, `MeasurementInput`, skinfolds)
pub mod models;
