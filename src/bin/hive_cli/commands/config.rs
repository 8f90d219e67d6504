// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Config command for hive-cli
// ABOUTME: Prints the engine configuration after environment overrides

use hive_metrics::{errors::AppResult, intelligence::MetricEngine};
use std::process::ExitCode;

/// Print the engine's configuration as pretty JSON
pub fn run(engine: &MetricEngine) -> AppResult<ExitCode> {
    println!("{}", serde_json::to_string_pretty(engine.config())?);
    Ok(ExitCode::SUCCESS)
}
