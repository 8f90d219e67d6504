// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for hive-cli
// ABOUTME: Renders metric reports and the validation message as text

use hive_metrics::{
    constants::display::VALIDATION_MESSAGE,
    intelligence::{IncompleteInputs, MetricReport},
};

/// Display both metric cards
pub fn print_report(report: &MetricReport) {
    println!("{}", "=".repeat(60));
    println!(
        "{}: {} {}  [{}]",
        report.mass_index.label,
        report.mass_index.value,
        report.mass_index.unit,
        report.classification
    );
    println!("{}", report.metabolic_rate);
    println!("{}", "=".repeat(60));
}

/// Display the validation message and the rejected fields
pub fn print_incomplete(incomplete: &IncompleteInputs) {
    println!("{VALIDATION_MESSAGE}");
    for field in &incomplete.fields {
        println!("   - {field}");
    }
}
