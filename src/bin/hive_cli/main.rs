// ABOUTME: HIVE CLI - command-line presentation layer for the metric engine
// ABOUTME: Gathers raw field values from arguments and renders the engine's results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Compute both metrics
//! hive-cli compute --sex female --age 30 --mass 75 --height 175
//!
//! # Same, as JSON
//! hive-cli compute --age 30 --mass 75 --height 175 --format json
//!
//! # Show the effective engine configuration
//! hive-cli config
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use commands::OutputFormat;
use hive_metrics::{
    errors::AppResult, intelligence::MetricEngine, logging::LoggingConfig, models::SexCategory,
};
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Parser)]
#[command(
    name = "hive-cli",
    about = "HIVE health metrics CLI",
    long_about = "Computes the Physical Proportionality Index (mass index) and Basal Energy Expenditure (metabolic rate) from raw field values."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compute both metrics from raw field values; omitted fields keep the form preset
    Compute {
        /// Sex category (male or female)
        #[arg(long, default_value = "male")]
        sex: SexCategory,

        /// Age in years (omitted: 30)
        #[arg(long, allow_hyphen_values = true)]
        age: Option<String>,

        /// Body mass in kilograms (omitted: 75)
        #[arg(long, allow_hyphen_values = true)]
        mass: Option<String>,

        /// Height in centimeters (omitted: 175)
        #[arg(long, allow_hyphen_values = true)]
        height: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the effective engine configuration as JSON
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            error!(code = ?e.code, "{}", e.message);
            eprintln!("Error: {e}");
            ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(1))
        }
    }
}

fn run(command: Command) -> AppResult<ExitCode> {
    let engine = MetricEngine::from_global();
    info!("HIVE metric engine ready");

    match command {
        Command::Compute {
            sex,
            age,
            mass,
            height,
            format,
        } => commands::compute::run(
            &engine,
            sex,
            age.as_deref(),
            mass.as_deref(),
            height.as_deref(),
            format,
        ),
        Command::Config => commands::config::run(&engine),
    }
}
