// ABOUTME: Metric engine configuration for formula coefficients, band thresholds, and display precision
// ABOUTME: Defaults come from hive-core constants; environment variables can override them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Engine Configuration Module
//!
//! Provides validated configuration for the metric engine. Every value defaults to the
//! standard published constant, so an engine built from `EngineConfig::default()`
//! reproduces the reference formulas exactly.
//!
//! # Environment overrides
//!
//! ```bash
//! export HIVE_BMR_FEMALE_CONSTANT=-161
//! export HIVE_MASS_INDEX_OPTIMAL_UPPER=25
//! ```

use hive_core::constants::{display, mass_index, mifflin_st_jeor};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Thresholds or bounds are not in the required order
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

/// Mifflin-St Jeor coefficients
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Male constant (+5)
    pub msj_male_constant: f64,
    /// Female constant (-161)
    pub msj_female_constant: f64,
}

impl BmrConfig {
    /// Published coefficients
    pub const STANDARD: Self = Self {
        msj_weight_coef: mifflin_st_jeor::WEIGHT_COEF,
        msj_height_coef: mifflin_st_jeor::HEIGHT_COEF,
        msj_age_coef: mifflin_st_jeor::AGE_COEF,
        msj_male_constant: mifflin_st_jeor::MALE_CONSTANT,
        msj_female_constant: mifflin_st_jeor::FEMALE_CONSTANT,
    };
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Upper bounds (exclusive) of the mass index bands
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MassIndexThresholds {
    /// Below this is `Low` (18.5)
    pub low_upper: f64,
    /// Below this is `Optimal` (25.0)
    pub optimal_upper: f64,
    /// Below this is `Elevated`, at or above is `Critical` (30.0)
    pub elevated_upper: f64,
}

impl MassIndexThresholds {
    /// Standard adult bands
    pub const STANDARD: Self = Self {
        low_upper: mass_index::LOW_UPPER,
        optimal_upper: mass_index::OPTIMAL_UPPER,
        elevated_upper: mass_index::ELEVATED_UPPER,
    };
}

impl Default for MassIndexThresholds {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Decimal places used when rounding values for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayPrecision {
    /// Mass index decimals (2)
    pub mass_index_decimals: u8,
    /// Metabolic rate decimals (0)
    pub metabolic_rate_decimals: u8,
}

impl DisplayPrecision {
    /// Standard display precision
    pub const STANDARD: Self = Self {
        mass_index_decimals: display::MASS_INDEX_DECIMALS,
        metabolic_rate_decimals: display::METABOLIC_RATE_DECIMALS,
    };
}

impl Default for DisplayPrecision {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Complete metric engine configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Metabolic rate coefficients
    pub bmr: BmrConfig,
    /// Mass index band boundaries
    pub mass_index: MassIndexThresholds,
    /// Display rounding
    pub display: DisplayPrecision,
}

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

impl EngineConfig {
    /// Standard configuration
    pub const STANDARD: Self = Self {
        bmr: BmrConfig::STANDARD,
        mass_index: MassIndexThresholds::STANDARD,
        display: DisplayPrecision::STANDARD,
    };

    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                tracing::warn!("Failed to load engine config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from environment variables on top of the defaults
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable cannot be parsed or the resulting
    /// configuration fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a coefficient is non-finite, thresholds are not positive and
    /// strictly ascending, or a display precision exceeds the supported maximum
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bmr = &self.bmr;
        if ![
            bmr.msj_weight_coef,
            bmr.msj_height_coef,
            bmr.msj_age_coef,
            bmr.msj_male_constant,
            bmr.msj_female_constant,
        ]
        .iter()
        .all(|coef| coef.is_finite())
        {
            return Err(ConfigError::ValueOutOfRange(
                "Mifflin-St Jeor coefficients must be finite",
            ));
        }

        let bands = &self.mass_index;
        if !(bands.low_upper.is_finite() && bands.low_upper > 0.0) {
            return Err(ConfigError::InvalidRange(
                "low_upper must be a positive finite value",
            ));
        }
        if !(bands.low_upper < bands.optimal_upper && bands.optimal_upper < bands.elevated_upper)
            || !bands.elevated_upper.is_finite()
        {
            return Err(ConfigError::InvalidRange(
                "Mass index thresholds must be strictly ascending",
            ));
        }

        if self.display.mass_index_decimals > display::MAX_DECIMALS
            || self.display.metabolic_rate_decimals > display::MAX_DECIMALS
        {
            return Err(ConfigError::ValueOutOfRange(
                "Display precision must be at most 6 decimal places",
            ));
        }

        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        override_from_env("HIVE_BMR_WEIGHT_COEF", &mut self.bmr.msj_weight_coef)?;
        override_from_env("HIVE_BMR_HEIGHT_COEF", &mut self.bmr.msj_height_coef)?;
        override_from_env("HIVE_BMR_AGE_COEF", &mut self.bmr.msj_age_coef)?;
        override_from_env("HIVE_BMR_MALE_CONSTANT", &mut self.bmr.msj_male_constant)?;
        override_from_env("HIVE_BMR_FEMALE_CONSTANT", &mut self.bmr.msj_female_constant)?;

        override_from_env("HIVE_MASS_INDEX_LOW_UPPER", &mut self.mass_index.low_upper)?;
        override_from_env(
            "HIVE_MASS_INDEX_OPTIMAL_UPPER",
            &mut self.mass_index.optimal_upper,
        )?;
        override_from_env(
            "HIVE_MASS_INDEX_ELEVATED_UPPER",
            &mut self.mass_index.elevated_upper,
        )?;

        override_from_env(
            "HIVE_MASS_INDEX_DECIMALS",
            &mut self.display.mass_index_decimals,
        )?;
        override_from_env(
            "HIVE_METABOLIC_RATE_DECIMALS",
            &mut self.display.metabolic_rate_decimals,
        )?;

        Ok(self)
    }
}

/// Replace `target` with the parsed value of `name` when the variable is set
fn override_from_env<T: FromStr>(name: &'static str, target: &mut T) -> Result<(), ConfigError> {
    if let Ok(val) = env::var(name) {
        *target = val
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {name}: '{val}'")))?;
    }
    Ok(())
}
