// ABOUTME: Qualitative bands for the mass index plus the awaiting-data state
// ABOUTME: Ordered enum with the display labels shown next to the computed index
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Mass index classification
///
/// Variants are declared in ascending order so that `Ord` follows the bands.
/// `AwaitingData` sorts first and is used whenever no index has been computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// No index computed yet
    AwaitingData,
    /// Below 18.5
    Low,
    /// 18.5 up to (not including) 25
    Optimal,
    /// 25 up to (not including) 30
    Elevated,
    /// 30 and above
    Critical,
}

impl Classification {
    /// Display label for the band
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::AwaitingData => "Awaiting Data",
            Self::Low => "Low Mass Index",
            Self::Optimal => "Optimal Index",
            Self::Elevated => "Elevated Index",
            Self::Critical => "Critical Mass Index",
        }
    }

    /// Whether this is a real band rather than the awaiting-data state
    #[must_use]
    pub const fn has_data(&self) -> bool {
        !matches!(self, Self::AwaitingData)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands_are_ordered() {
        assert!(Classification::AwaitingData < Classification::Low);
        assert!(Classification::Low < Classification::Optimal);
        assert!(Classification::Optimal < Classification::Elevated);
        assert!(Classification::Elevated < Classification::Critical);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Classification::AwaitingData.to_string(), "Awaiting Data");
        assert_eq!(Classification::Critical.label(), "Critical Mass Index");
        assert!(!Classification::AwaitingData.has_data());
        assert!(Classification::Low.has_data());
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&Classification::AwaitingData).unwrap();
        assert_eq!(json, "\"awaiting_data\"");
    }
}
