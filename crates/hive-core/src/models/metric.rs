// ABOUTME: Display-ready health metric value with label and unit
// ABOUTME: Produced once per computed metric and handed to presentation layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// A computed value with the fixed human-readable label and unit it is shown with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthMetric {
    /// Rounded display value
    pub value: f64,
    /// Human-readable label
    pub label: String,
    /// Unit string
    pub unit: String,
}

impl HealthMetric {
    /// Create a metric from its parts
    pub fn new(value: f64, label: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            unit: unit.into(),
        }
    }
}

impl fmt::Display for HealthMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} {}", self.label, self.value, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_shortest_value_form() {
        let metric = HealthMetric::new(1724.0, "Basal Energy Expenditure (BEE)", "kcal/day");
        assert_eq!(
            metric.to_string(),
            "Basal Energy Expenditure (BEE): 1724 kcal/day"
        );
    }

    #[test]
    fn test_serializes_value_label_unit() {
        let metric = HealthMetric::new(24.49, "PPI", "kg/m²");
        let json = serde_json::to_value(&metric).unwrap();
        assert_eq!(json["value"], 24.49);
        assert_eq!(json["label"], "PPI");
        assert_eq!(json["unit"], "kg/m²");
    }
}
