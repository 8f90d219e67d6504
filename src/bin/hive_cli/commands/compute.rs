// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Compute command for hive-cli
// ABOUTME: Builds a raw snapshot from arguments, evaluates it, and renders the assessment

use super::OutputFormat;
use crate::helpers::display;
use hive_metrics::{
    errors::{incomplete_response, AppResult, ErrorCode},
    intelligence::{parse_field, Assessment, MetricEngine, RawInputs},
    models::SexCategory,
};
use std::process::ExitCode;

/// Evaluate the given raw field values and print the result
///
/// Fields that were not passed keep their preset value.
/// Incomplete inputs are rendered like any other result and exit with status 2.
pub fn run(
    engine: &MetricEngine,
    sex: SexCategory,
    age: Option<&str>,
    mass: Option<&str>,
    height: Option<&str>,
    format: OutputFormat,
) -> AppResult<ExitCode> {
    let preset = RawInputs::preset();
    let raw = RawInputs::new(
        sex,
        age.map_or(preset.age, parse_field),
        mass.map_or(preset.mass_kg, parse_field),
        height.map_or(preset.height_cm, parse_field),
    );

    let assessment = engine.evaluate(&raw);

    match (&assessment, format) {
        (Assessment::Computed(report), OutputFormat::Text) => display::print_report(report),
        (Assessment::Incomplete(incomplete), OutputFormat::Text) => {
            display::print_incomplete(incomplete);
        }
        (Assessment::Computed(_), OutputFormat::Json) => {
            println!("{}", serde_json::to_string_pretty(&assessment)?);
        }
        (Assessment::Incomplete(incomplete), OutputFormat::Json) => {
            println!(
                "{}",
                serde_json::to_string_pretty(&incomplete_response(incomplete))?
            );
        }
    }

    Ok(if assessment.is_computed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(u8::try_from(ErrorCode::MissingRequiredField.exit_code()).unwrap_or(2))
    })
}
