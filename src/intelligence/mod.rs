// ABOUTME: Intelligence module for body metric computation
// ABOUTME: Input validation, mass index and metabolic rate formulas, classification, and the engine pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Pure computation core. Callers gather raw field values, hand them to
//! [`MetricEngine::evaluate`] (or the individual operations), and render the
//! returned [`HealthMetric`](hive_core::models::HealthMetric) and
//! [`Classification`](hive_core::models::Classification) values.

/// Mass index, metabolic rate, classification, and display formatting
pub mod body_metrics;
/// Pipeline composing validation, calculation, and formatting
pub mod engine;
/// Raw input snapshots and validation
pub mod inputs;

pub use body_metrics::{
    calculate_mifflin_st_jeor, classify, classify_optional, classify_with, compute_mass_index,
    compute_metabolic_rate, compute_metabolic_rate_with, format_metric, mass_index_metric,
    metabolic_rate_metric, round_to,
};
pub use engine::{evaluate, Assessment, MetricEngine, MetricReport};
pub use inputs::{parse_field, validate, IncompleteInputs, InputField, RawInputs, ValidatedInputs};
