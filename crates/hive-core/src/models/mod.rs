// ABOUTME: Core data models for the HIVE health metrics engine
// ABOUTME: Display-ready metrics, mass index classification bands, and sex categories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Mass index classification bands
pub mod classification;
/// Display-ready metric values
pub mod metric;
/// Biological sex categories used by the metabolic rate formula
pub mod sex;

pub use classification::Classification;
pub use metric::HealthMetric;
pub use sex::SexCategory;
