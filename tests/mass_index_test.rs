// ABOUTME: Algorithm tests for the mass index calculation and its display rounding
// ABOUTME: Checks the formula over a grid of inputs and pins the two-decimal rounding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use hive_metrics::intelligence::{
    classify, compute_mass_index, evaluate, mass_index_metric, round_to, validate, RawInputs,
    ValidatedInputs,
};
use hive_metrics::models::{Classification, SexCategory};

mod common;

#[test]
fn test_mass_index_matches_formula_over_grid() {
    common::init_test_logging();

    for mass_kg in [0.5, 3.2, 45.0, 75.0, 120.25, 310.0] {
        for height_cm in [45.0, 99.9, 150.0, 175.0, 201.5] {
            let expected = mass_kg / (height_cm / 100.0_f64).powi(2);
            let actual = compute_mass_index(Some(mass_kg), Some(height_cm)).unwrap();
            common::assert_close(actual, expected, 1e-9);
        }
    }
}

#[test]
fn test_mass_index_reference_display() {
    let raw = compute_mass_index(Some(75.0), Some(175.0)).unwrap();
    common::assert_close(raw, 24.489_795_918_367_35, 1e-9);

    let metric = mass_index_metric(raw, 2);
    assert!((metric.value - 24.49).abs() < f64::EPSILON);
    assert_eq!(metric.label, "Physical Proportionality Index (PPI)");
    assert_eq!(metric.unit, "kg/m²");
    assert_eq!(classify(raw), Classification::Optimal);
}

#[test]
fn test_mass_index_rounding_is_pinned() {
    // 70 / 1.8^2 = 21.604938...
    let metric = mass_index_metric(compute_mass_index(Some(70.0), Some(180.0)).unwrap(), 2);
    assert!((metric.value - 21.6).abs() < f64::EPSILON);

    // 100.5 / 2.0^2 = 25.125 exactly; the tie is rounded away from zero
    let tie = compute_mass_index(Some(100.5), Some(200.0)).unwrap();
    assert_eq!(tie.to_bits(), 25.125_f64.to_bits());
    assert!((mass_index_metric(tie, 2).value - 25.13).abs() < f64::EPSILON);
    assert!((round_to(-tie, 2) + 25.13).abs() < f64::EPSILON);
}

#[test]
fn test_near_ties_round_on_the_stored_value() {
    common::init_test_logging();

    // mass / 4 is exact at 200 cm, so each quotient is the stored value of the
    // written decimal, which sits just below or exactly on the tie
    let cases = [
        (30.7, 7.67),
        (30.9, 7.72),
        (31.9, 7.97),
        (35.9, 8.97),
        (30.5, 7.63),
        (34.5, 8.63),
    ];
    for (mass_kg, expected) in cases {
        let raw = RawInputs::new(SexCategory::Male, Some(30.0), Some(mass_kg), Some(200.0));
        let report = evaluate(&raw).report().cloned().unwrap();
        assert!(
            (report.mass_index.value - expected).abs() < f64::EPSILON,
            "{mass_kg} kg displayed {} instead of {expected}",
            report.mass_index.value
        );
    }

    assert!((round_to(2.675, 2) - 2.67).abs() < f64::EPSILON);
}

#[test]
fn test_mass_index_absent_operands_not_computed() {
    assert_eq!(compute_mass_index(None, None), None);
    assert_eq!(compute_mass_index(Some(75.0), Some(0.0)), None);
    assert_eq!(compute_mass_index(Some(-75.0), Some(175.0)), None);
    assert_eq!(compute_mass_index(Some(f64::NAN), Some(175.0)), None);
}

#[test]
fn test_validated_inputs_mass_index_agrees_with_free_function() {
    let raw = RawInputs::new(SexCategory::Female, Some(41.0), Some(58.3), Some(162.0));
    let valid: ValidatedInputs = validate(&raw).unwrap();
    assert_eq!(
        valid.mass_index().to_bits(),
        compute_mass_index(Some(58.3), Some(162.0)).unwrap().to_bits()
    );
}
