// ABOUTME: Biological sex category selecting the metabolic rate offset
// ABOUTME: Two-valued enum with lenient form parsing and strict parsing for CLI input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sex category for the Mifflin-St Jeor offset
///
/// Exactly two categories exist. A form selection always yields one of them,
/// so the category never makes an input record incomplete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SexCategory {
    /// Category A (+5 kcal offset)
    #[default]
    Male,
    /// Category B (-161 kcal offset)
    Female,
}

impl SexCategory {
    /// Parse a form value, falling back to the default category for anything unrecognized
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    /// Canonical lowercase name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl FromStr for SexCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "a" => Ok(Self::Male),
            "female" | "f" | "b" => Ok(Self::Female),
            other => Err(AppError::invalid_input(format!(
                "unknown sex category '{other}', expected 'male' or 'female'"
            ))),
        }
    }
}

impl fmt::Display for SexCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_strict_parse() {
        assert_eq!("male".parse::<SexCategory>().unwrap(), SexCategory::Male);
        assert_eq!(" Female ".parse::<SexCategory>().unwrap(), SexCategory::Female);
        assert_eq!("B".parse::<SexCategory>().unwrap(), SexCategory::Female);

        let err = "other".parse::<SexCategory>().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_lossy_parse_defaults_to_male() {
        assert_eq!(SexCategory::from_str_lossy("female"), SexCategory::Female);
        assert_eq!(SexCategory::from_str_lossy(""), SexCategory::Male);
        assert_eq!(SexCategory::from_str_lossy("unknown"), SexCategory::Male);
    }

    #[test]
    fn test_display_round_trips() {
        for sex in [SexCategory::Male, SexCategory::Female] {
            assert_eq!(sex.to_string().parse::<SexCategory>().unwrap(), sex);
        }
    }
}
