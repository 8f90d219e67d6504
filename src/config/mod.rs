// ABOUTME: Configuration module for the metric engine
// ABOUTME: Re-exports engine configuration types and the configuration error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module for the HIVE metric engine
//!
//! - **Intelligence**: formula coefficients, band thresholds, and display precision,
//!   loaded from defaults plus environment overrides

/// Metric engine configuration
pub mod intelligence_config;

pub use intelligence_config::{
    BmrConfig, ConfigError, DisplayPrecision, EngineConfig, MassIndexThresholds,
};
