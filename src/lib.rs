// ABOUTME: Main library entry point for the HIVE health metrics engine
// ABOUTME: Pure mass index and metabolic rate computation with configuration and logging support
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # HIVE Metrics
//!
//! Computes a body mass index (shown as the Physical Proportionality Index) and a
//! basal metabolic rate (shown as the Basal Energy Expenditure) from four raw
//! inputs, and classifies the index into a qualitative band.
//!
//! ## Architecture
//!
//! - **Intelligence**: the pure computation core and the `MetricEngine` pipeline
//! - **Config**: formula coefficients, band thresholds, and display precision
//! - **Errors**: unified error codes for configuration and presentation failures
//! - **Logging**: structured `tracing` setup for the binaries
//!
//! ## Example Usage
//!
//! ```rust
//! use hive_metrics::intelligence::{evaluate, RawInputs};
//! use hive_metrics::models::Classification;
//!
//! let raw = RawInputs::from_fields("male", "30", "75", "175");
//! let assessment = evaluate(&raw);
//!
//! let report = assessment.report().expect("all fields are valid");
//! assert_eq!(report.classification, Classification::Optimal);
//! assert_eq!(report.metabolic_rate.value, 1724.0);
//! ```

/// Engine configuration management
pub mod config;

/// Error re-exports and conversions
pub mod errors;

/// Pure metric computation and the engine pipeline
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Application constants re-exported from `hive-core`
pub use hive_core::constants;

/// Core data models re-exported from `hive-core`
pub use hive_core::models;
