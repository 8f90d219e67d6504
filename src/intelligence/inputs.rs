// ABOUTME: Raw form inputs and their validation into a complete, strictly positive record
// ABOUTME: Incomplete inputs are a regular outcome naming every rejected field
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Input validation
//!
//! The presentation layer hands over whatever the user typed. Every numeric field
//! must be present, finite, and strictly positive; anything else marks the field as
//! rejected. Rejected values are never clamped or defaulted, and a record with any
//! rejected field is treated as incomplete as a whole.

use hive_core::constants::presets;
use hive_core::models::SexCategory;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Snapshot of the four input fields as entered
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RawInputs {
    /// Selected sex category (always present)
    pub sex: SexCategory,
    /// Age in years
    pub age: Option<f64>,
    /// Body mass in kilograms
    pub mass_kg: Option<f64>,
    /// Height in centimeters
    pub height_cm: Option<f64>,
}

impl RawInputs {
    /// Build a snapshot from already-numeric field values
    #[must_use]
    pub const fn new(
        sex: SexCategory,
        age: Option<f64>,
        mass_kg: Option<f64>,
        height_cm: Option<f64>,
    ) -> Self {
        Self {
            sex,
            age,
            mass_kg,
            height_cm,
        }
    }

    /// Snapshot a freshly opened form starts with: male, 30 years, 75 kg, 175 cm
    #[must_use]
    pub const fn preset() -> Self {
        Self::new(
            SexCategory::Male,
            Some(presets::AGE),
            Some(presets::MASS_KG),
            Some(presets::HEIGHT_CM),
        )
    }

    /// Build a snapshot from raw text fields
    ///
    /// The sex field is parsed leniently; numeric fields go through [`parse_field`].
    #[must_use]
    pub fn from_fields(sex: &str, age: &str, mass_kg: &str, height_cm: &str) -> Self {
        Self {
            sex: SexCategory::from_str_lossy(sex),
            age: parse_field(age),
            mass_kg: parse_field(mass_kg),
            height_cm: parse_field(height_cm),
        }
    }
}

/// Numeric input fields that can be rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    /// Age in years
    Age,
    /// Body mass in kilograms
    MassKg,
    /// Height in centimeters
    HeightCm,
}

impl InputField {
    /// Field name as used in serialized output
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::MassKg => "mass_kg",
            Self::HeightCm => "height_cm",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input record with at least one missing or invalid numeric field
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("required parameters are missing or invalid: {}", join_fields(.fields))]
pub struct IncompleteInputs {
    /// Rejected fields, in age, mass, height order
    pub fields: Vec<InputField>,
}

impl IncompleteInputs {
    /// Whether the given field was rejected
    #[must_use]
    pub fn contains(&self, field: InputField) -> bool {
        self.fields.contains(&field)
    }
}

fn join_fields(fields: &[InputField]) -> String {
    fields
        .iter()
        .map(InputField::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Fully present input record; every numeric field is finite and > 0
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValidatedInputs {
    sex: SexCategory,
    age: f64,
    mass_kg: f64,
    height_cm: f64,
}

impl ValidatedInputs {
    /// Selected sex category
    #[must_use]
    pub const fn sex(&self) -> SexCategory {
        self.sex
    }

    /// Age in years
    #[must_use]
    pub const fn age(&self) -> f64 {
        self.age
    }

    /// Body mass in kilograms
    #[must_use]
    pub const fn mass_kg(&self) -> f64 {
        self.mass_kg
    }

    /// Height in centimeters
    #[must_use]
    pub const fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

/// Whether a value is usable as a measurement
#[must_use]
pub fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Parse one raw text field
///
/// Returns `None` on parse failure, non-finite values, zero, or negatives.
#[must_use]
pub fn parse_field(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| is_positive_finite(*value))
}

/// Validate a raw snapshot
///
/// # Errors
///
/// Returns [`IncompleteInputs`] listing every numeric field that is absent,
/// non-finite, zero, or negative.
pub fn validate(raw: &RawInputs) -> Result<ValidatedInputs, IncompleteInputs> {
    let accepted = |value: Option<f64>| value.filter(|v| is_positive_finite(*v));

    let age = accepted(raw.age);
    let mass_kg = accepted(raw.mass_kg);
    let height_cm = accepted(raw.height_cm);

    if let (Some(age), Some(mass_kg), Some(height_cm)) = (age, mass_kg, height_cm) {
        return Ok(ValidatedInputs {
            sex: raw.sex,
            age,
            mass_kg,
            height_cm,
        });
    }

    let fields: Vec<InputField> = [
        (InputField::Age, age),
        (InputField::MassKg, mass_kg),
        (InputField::HeightCm, height_cm),
    ]
    .into_iter()
    .filter_map(|(field, value)| value.is_none().then_some(field))
    .collect();

    debug!(rejected = %join_fields(&fields), "Input snapshot incomplete");
    Err(IncompleteInputs { fields })
}
