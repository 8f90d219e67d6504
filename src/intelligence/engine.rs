// ABOUTME: Metric engine pipeline from raw inputs to display-ready results
// ABOUTME: Validates a snapshot, then computes, classifies, and formats both metrics atomically
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Metric engine
//!
//! The presentation layer calls [`MetricEngine::evaluate`] on every input change:
//!
//! ```text
//! raw -> validate -> { mass index, metabolic rate } -> classify / format -> render
//! ```
//!
//! The engine holds only immutable configuration. An input record is either fully
//! valid, producing both metrics, or incomplete, producing none.

use super::body_metrics::{classify_with, mass_index_metric, metabolic_rate_metric};
use super::inputs::{validate, IncompleteInputs, RawInputs, ValidatedInputs};
use crate::config::EngineConfig;
use hive_core::models::{Classification, HealthMetric};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Display-ready results for a complete input record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricReport {
    /// Rounded mass index
    pub mass_index: HealthMetric,
    /// Band of the unrounded mass index
    pub classification: Classification,
    /// Rounded basal metabolic rate
    pub metabolic_rate: HealthMetric,
}

/// Outcome of evaluating one input snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Assessment {
    /// At least one numeric field was missing or invalid; nothing was computed
    Incomplete(IncompleteInputs),
    /// All fields were valid
    Computed(MetricReport),
}

impl Assessment {
    /// Whether both metrics were computed
    #[must_use]
    pub const fn is_computed(&self) -> bool {
        matches!(self, Self::Computed(_))
    }

    /// The computed report, if any
    #[must_use]
    pub const fn report(&self) -> Option<&MetricReport> {
        match self {
            Self::Computed(report) => Some(report),
            Self::Incomplete(_) => None,
        }
    }

    /// Classification to display; `AwaitingData` when incomplete
    #[must_use]
    pub const fn classification(&self) -> Classification {
        match self {
            Self::Computed(report) => report.classification,
            Self::Incomplete(_) => Classification::AwaitingData,
        }
    }
}

/// Stateless metric engine
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MetricEngine {
    config: EngineConfig,
}

impl MetricEngine {
    /// Create an engine with the given configuration
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Create an engine from the global configuration
    #[must_use]
    pub fn from_global() -> Self {
        Self::new(*EngineConfig::global())
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Evaluate one raw input snapshot
    #[must_use]
    pub fn evaluate(&self, raw: &RawInputs) -> Assessment {
        match validate(raw) {
            Ok(inputs) => Assessment::Computed(self.report(&inputs)),
            Err(incomplete) => Assessment::Incomplete(incomplete),
        }
    }

    /// Compute, classify, and format both metrics for a validated record
    #[must_use]
    pub fn report(&self, inputs: &ValidatedInputs) -> MetricReport {
        let mass_index = inputs.mass_index();
        let metabolic_rate = inputs.metabolic_rate(&self.config.bmr);
        let classification = classify_with(mass_index, &self.config.mass_index);

        debug!(
            mass_index,
            metabolic_rate,
            classification = ?classification,
            sex = %inputs.sex(),
            "Computed body metrics"
        );

        MetricReport {
            mass_index: mass_index_metric(mass_index, self.config.display.mass_index_decimals),
            classification,
            metabolic_rate: metabolic_rate_metric(
                metabolic_rate,
                self.config.display.metabolic_rate_decimals,
            ),
        }
    }
}

/// Evaluate a snapshot with the standard configuration
#[must_use]
pub fn evaluate(raw: &RawInputs) -> Assessment {
    MetricEngine::default().evaluate(raw)
}
