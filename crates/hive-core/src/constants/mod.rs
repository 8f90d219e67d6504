// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Formula coefficients, classification thresholds, and display strings for health metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being kept in a single
//! flat namespace. Engine configuration defaults are built from these values.

/// Service identifiers used in structured logging
pub mod service_names {
    /// Service name reported by the CLI
    pub const HIVE_CLI: &str = "hive-cli";
}

/// Mifflin-St Jeor resting energy expenditure coefficients
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
pub mod mifflin_st_jeor {
    /// kcal per kilogram of body mass
    pub const WEIGHT_COEF: f64 = 10.0;
    /// kcal per centimeter of height
    pub const HEIGHT_COEF: f64 = 6.25;
    /// kcal per year of age (negative: expenditure declines with age)
    pub const AGE_COEF: f64 = -5.0;
    /// Sex-dependent constant for category A
    pub const MALE_CONSTANT: f64 = 5.0;
    /// Sex-dependent constant for category B
    pub const FEMALE_CONSTANT: f64 = -161.0;
}

/// Mass index band boundaries (lower bound of each band is inclusive)
pub mod mass_index {
    /// Values below this are `Low`
    pub const LOW_UPPER: f64 = 18.5;
    /// Values below this (and at least `LOW_UPPER`) are `Optimal`
    pub const OPTIMAL_UPPER: f64 = 25.0;
    /// Values below this (and at least `OPTIMAL_UPPER`) are `Elevated`; the rest are `Critical`
    pub const ELEVATED_UPPER: f64 = 30.0;
    /// Centimeters per meter, for converting height before squaring
    pub const CM_PER_METER: f64 = 100.0;
}

/// Display labels, units, and rounding precision
pub mod display {
    /// Label for the mass index metric
    pub const MASS_INDEX_LABEL: &str = "Physical Proportionality Index (PPI)";
    /// Unit for the mass index metric
    pub const MASS_INDEX_UNIT: &str = "kg/m²";
    /// Decimal places shown for the mass index
    pub const MASS_INDEX_DECIMALS: u8 = 2;

    /// Label for the metabolic rate metric
    pub const METABOLIC_RATE_LABEL: &str = "Basal Energy Expenditure (BEE)";
    /// Unit for the metabolic rate metric
    pub const METABOLIC_RATE_UNIT: &str = "kcal/day";
    /// Decimal places shown for the metabolic rate
    pub const METABOLIC_RATE_DECIMALS: u8 = 0;

    /// Largest precision accepted by configuration
    pub const MAX_DECIMALS: u8 = 6;

    /// Message shown by presentation layers when inputs are incomplete
    pub const VALIDATION_MESSAGE: &str =
        "Validation Error: Required parameters are missing or invalid.";
}

/// Values an input form starts with before the user edits anything
pub mod presets {
    /// Age in years
    pub const AGE: f64 = 30.0;
    /// Body mass in kilograms
    pub const MASS_KG: f64 = 75.0;
    /// Height in centimeters
    pub const HEIGHT_CM: f64 = 175.0;
}
