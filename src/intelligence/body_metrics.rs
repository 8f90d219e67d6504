// ABOUTME: Body composition and energy expenditure calculations using published formulas
// ABOUTME: Mass index, Mifflin-St Jeor resting energy, band classification, and display formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Body Metrics Module
//!
//! Pure calculations behind the metric engine. Every function is a deterministic
//! function of its arguments; calling it again with the same inputs yields a
//! bit-identical result.
//!
//! "Not computed" is represented by `None`. A legacy caller holding the numeric `0`
//! sentinel can still pass it to [`classify`], which maps it to
//! [`Classification::AwaitingData`].
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - World Health Organization (2000). Obesity: preventing and managing the global epidemic.
//!   WHO Technical Report Series 894 (adult mass index bands).

use super::inputs::{is_positive_finite, ValidatedInputs};
use crate::config::{BmrConfig, MassIndexThresholds};
use hive_core::constants::{display, mass_index::CM_PER_METER};
use hive_core::models::{Classification, HealthMetric, SexCategory};

/// Mass index from validated operands
///
/// Formula: `mass_kg / (height_cm / 100)^2`
fn mass_index_unchecked(mass_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / CM_PER_METER;
    mass_kg / (height_m * height_m)
}

/// Calculate the mass index
///
/// Returns `None` when either operand is absent, zero, negative, or non-finite.
#[must_use]
pub fn compute_mass_index(mass_kg: Option<f64>, height_cm: Option<f64>) -> Option<f64> {
    let mass_kg = mass_kg.filter(|v| is_positive_finite(*v))?;
    let height_cm = height_cm.filter(|v| is_positive_finite(*v))?;
    Some(mass_index_unchecked(mass_kg, height_cm))
}

/// Calculate resting energy expenditure using the Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `mass_kg`) + (6.25 x `height_cm`) - (5 x age) + `sex_offset`
/// - Male: +5
/// - Female: -161
///
/// Operands are used as given; the result is not clamped, so extreme inputs can
/// produce zero or negative values.
#[must_use]
pub fn calculate_mifflin_st_jeor(
    mass_kg: f64,
    height_cm: f64,
    age: f64,
    sex: SexCategory,
    config: &BmrConfig,
) -> f64 {
    let weight_component = config.msj_weight_coef * mass_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * age;

    let sex_constant = match sex {
        SexCategory::Male => config.msj_male_constant,
        SexCategory::Female => config.msj_female_constant,
    };

    weight_component + height_component + age_component + sex_constant
}

/// Calculate the basal metabolic rate with the standard coefficients
///
/// Returns `None` if any of mass, height, or age is absent, zero, negative, or non-finite.
#[must_use]
pub fn compute_metabolic_rate(
    mass_kg: Option<f64>,
    height_cm: Option<f64>,
    age: Option<f64>,
    sex: SexCategory,
) -> Option<f64> {
    compute_metabolic_rate_with(mass_kg, height_cm, age, sex, &BmrConfig::STANDARD)
}

/// Calculate the basal metabolic rate with custom coefficients
#[must_use]
pub fn compute_metabolic_rate_with(
    mass_kg: Option<f64>,
    height_cm: Option<f64>,
    age: Option<f64>,
    sex: SexCategory,
    config: &BmrConfig,
) -> Option<f64> {
    let mass_kg = mass_kg.filter(|v| is_positive_finite(*v))?;
    let height_cm = height_cm.filter(|v| is_positive_finite(*v))?;
    let age = age.filter(|v| is_positive_finite(*v))?;
    Some(calculate_mifflin_st_jeor(
        mass_kg, height_cm, age, sex, config,
    ))
}

/// Classify a mass index against the standard bands
///
/// Rules are evaluated in order and the first match wins: exactly `0` (the legacy
/// "unset" sentinel) is `AwaitingData`, then `< 18.5` is `Low`, `< 25` is `Optimal`,
/// `< 30` is `Elevated`, and everything else is `Critical`.
///
/// Lower bounds are inclusive: exactly 18.5 is `Optimal`, 25 is `Elevated`, 30 is `Critical`.
/// Negative values and `-inf` fall into `Low`; `+inf` and NaN, which fail every
/// comparison, fall through to `Critical`.
#[must_use]
pub fn classify(mass_index: f64) -> Classification {
    classify_with(mass_index, &MassIndexThresholds::STANDARD)
}

/// Classify a mass index against custom bands
#[must_use]
pub fn classify_with(mass_index: f64, thresholds: &MassIndexThresholds) -> Classification {
    if mass_index == 0.0 {
        return Classification::AwaitingData;
    }

    if mass_index < thresholds.low_upper {
        Classification::Low
    } else if mass_index < thresholds.optimal_upper {
        Classification::Optimal
    } else if mass_index < thresholds.elevated_upper {
        Classification::Elevated
    } else {
        Classification::Critical
    }
}

/// Classify an optional mass index; `None` is `AwaitingData`
#[must_use]
pub fn classify_optional(mass_index: Option<f64>) -> Classification {
    mass_index.map_or(Classification::AwaitingData, classify)
}

/// Magnitudes at or above this are already integral and are returned unchanged
const FIXED_POINT_LIMIT: f64 = 1e21;

/// Round the exact binary value to `decimals` places, ties away from zero
///
/// The decision is made on the full decimal expansion of `value`, so a stored value
/// just below a tie (`2.675` is `2.67499999...`) rounds down, and only exact ties
/// such as `25.125` round away from zero. The result is the `f64` nearest to the
/// rounded decimal. Non-finite values are returned unchanged.
#[must_use]
pub fn round_to(value: f64, decimals: u8) -> f64 {
    if !value.is_finite() || value.abs() >= FIXED_POINT_LIMIT {
        return value;
    }

    let places = usize::from(decimals);
    let precision = exact_fraction_digits(value).max(places + 1);
    let expansion = format!("{:.*}", precision, value.abs());

    let Some((whole, fraction)) = expansion.split_once('.') else {
        return value;
    };
    let (kept, dropped) = fraction.split_at(places);
    let round_up = dropped.as_bytes().first().is_some_and(|digit| *digit >= b'5');

    let Ok(units) = format!("{whole}{kept}").parse::<u128>() else {
        return value;
    };
    let units = if round_up { units + 1 } else { units };

    format!("{units}e-{places}")
        .parse::<f64>()
        .map_or(value, |magnitude| magnitude.copysign(value))
}

/// Number of fraction digits in the exact decimal expansion of a finite `f64`
///
/// A value `m * 2^e` with `e < 0` has exactly `-e` digits after the point.
fn exact_fraction_digits(value: f64) -> usize {
    let biased = ((value.to_bits() >> 52) & 0x7ff) as u16;
    let exponent = if biased == 0 {
        -1074
    } else {
        i32::from(biased) - 1075
    };
    usize::try_from(-exponent).unwrap_or(0)
}

/// Wrap a value with its display label and unit
#[must_use]
pub fn format_metric(value: f64, label: &str, unit: &str) -> HealthMetric {
    HealthMetric::new(value, label, unit)
}

/// Display-ready mass index, rounded to `decimals` places
#[must_use]
pub fn mass_index_metric(value: f64, decimals: u8) -> HealthMetric {
    format_metric(
        round_to(value, decimals),
        display::MASS_INDEX_LABEL,
        display::MASS_INDEX_UNIT,
    )
}

/// Display-ready metabolic rate, rounded to `decimals` places
#[must_use]
pub fn metabolic_rate_metric(value: f64, decimals: u8) -> HealthMetric {
    format_metric(
        round_to(value, decimals),
        display::METABOLIC_RATE_LABEL,
        display::METABOLIC_RATE_UNIT,
    )
}

impl ValidatedInputs {
    /// Mass index of this record
    #[must_use]
    pub fn mass_index(&self) -> f64 {
        mass_index_unchecked(self.mass_kg(), self.height_cm())
    }

    /// Basal metabolic rate of this record
    #[must_use]
    pub fn metabolic_rate(&self, config: &BmrConfig) -> f64 {
        calculate_mifflin_st_jeor(
            self.mass_kg(),
            self.height_cm(),
            self.age(),
            self.sex(),
            config,
        )
    }
}
