// ABOUTME: Algorithm tests for the Mifflin-St Jeor metabolic rate calculation
// ABOUTME: Covers both sex offsets, whole-number display rounding, and missing operands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use hive_metrics::config::BmrConfig;
use hive_metrics::intelligence::{
    compute_metabolic_rate, compute_metabolic_rate_with, metabolic_rate_metric,
};
use hive_metrics::models::SexCategory;

mod common;

#[test]
fn test_metabolic_rate_male_reference() {
    common::init_test_logging();

    // 10 * 75 + 6.25 * 175 - 5 * 30 + 5 = 1723.75
    let bmr = compute_metabolic_rate(Some(75.0), Some(175.0), Some(30.0), SexCategory::Male)
        .unwrap();
    assert!((bmr - 1723.75).abs() < f64::EPSILON);

    let metric = metabolic_rate_metric(bmr, 0);
    assert!((metric.value - 1724.0).abs() < f64::EPSILON);
    assert_eq!(metric.label, "Basal Energy Expenditure (BEE)");
    assert_eq!(metric.unit, "kcal/day");
}

#[test]
fn test_metabolic_rate_female_reference() {
    // 1723.75 - 5 - 161 = 1557.75
    let bmr = compute_metabolic_rate(Some(75.0), Some(175.0), Some(30.0), SexCategory::Female)
        .unwrap();
    assert!((bmr - 1557.75).abs() < f64::EPSILON);
    assert!((metabolic_rate_metric(bmr, 0).value - 1558.0).abs() < f64::EPSILON);
}

#[test]
fn test_metabolic_rate_half_rounds_up() {
    // 750 + 1087.5 - 150 + 5 = 1692.5
    let bmr = compute_metabolic_rate(Some(75.0), Some(174.0), Some(30.0), SexCategory::Male)
        .unwrap();
    assert!((bmr - 1692.5).abs() < f64::EPSILON);
    assert!((metabolic_rate_metric(bmr, 0).value - 1693.0).abs() < f64::EPSILON);
}

#[test]
fn test_metabolic_rate_large_athlete() {
    // 1000 + 1218.75 - 125 + 5 = 2098.75
    let bmr = compute_metabolic_rate(Some(100.0), Some(195.0), Some(25.0), SexCategory::Male)
        .unwrap();
    common::assert_close(bmr, 2098.75, 1e-9);
}

#[test]
fn test_metabolic_rate_missing_operands() {
    let sex = SexCategory::Female;
    assert_eq!(compute_metabolic_rate(None, Some(175.0), Some(30.0), sex), None);
    assert_eq!(compute_metabolic_rate(Some(75.0), None, Some(30.0), sex), None);
    assert_eq!(compute_metabolic_rate(Some(75.0), Some(175.0), None, sex), None);
    assert_eq!(
        compute_metabolic_rate(Some(75.0), Some(175.0), Some(-1.0), sex),
        None
    );
}

#[test]
fn test_metabolic_rate_zero_is_a_real_value() {
    // 10 + 6.25 * 4 - 5 * 8 + 5 = 0
    let bmr = compute_metabolic_rate(Some(1.0), Some(4.0), Some(8.0), SexCategory::Male);
    assert_eq!(bmr.map(f64::to_bits), Some(0.0_f64.to_bits()));
}

#[test]
fn test_metabolic_rate_custom_coefficients() {
    let config = BmrConfig {
        msj_female_constant: -150.0,
        ..BmrConfig::STANDARD
    };
    let bmr = compute_metabolic_rate_with(
        Some(75.0),
        Some(175.0),
        Some(30.0),
        SexCategory::Female,
        &config,
    )
    .unwrap();
    common::assert_close(bmr, 1568.75, 1e-9);
}
