// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The fixed validation-range table.
//!
//! Ranges are process-wide immutable constants, loaded once and never
//! reconfigured. Both boundaries are inclusive: a value exactly equal to
//! `min` or `max` is valid.

use crate::types::ScenarioField;
use serde::Serialize;

/// An inclusive `[min, max]` range for one numeric scenario field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldRange {
    /// Inclusive lower bound.
    pub min: f64,
    /// Inclusive upper bound.
    pub max: f64,
}

impl FieldRange {
    /// Creates a new range.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Checks whether a value lies within the range (boundaries inclusive).
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Acceptable developer head counts.
pub const DEVELOPER_COUNT_RANGE: FieldRange = FieldRange::new(1.0, 50_000.0);

/// Acceptable fully loaded annual costs per developer, in currency units.
pub const ANNUAL_COST_PER_DEVELOPER_RANGE: FieldRange = FieldRange::new(50_000.0, 300_000.0);

/// Acceptable CTS-SW improvement values, in percentage points.
pub const CTS_SW_IMPROVEMENT_PERCENT_RANGE: FieldRange = FieldRange::new(0.1, 50.0);

/// Acceptable one-time solution costs, in currency units.
pub const SOLUTION_COST_RANGE: FieldRange = FieldRange::new(1_000.0, 100_000_000.0);

/// Acceptable software-driven revenue percentages.
pub const REVENUE_PERCENTAGE_RANGE: FieldRange = FieldRange::new(0.0, 100.0);

/// Lookup into the fixed range table.
pub struct ValidationRanges;

impl ValidationRanges {
    /// Returns the range for a validated field, or `None` for the synthetic
    /// `General` key, which has no numeric bounds.
    #[must_use]
    pub const fn for_field(field: ScenarioField) -> Option<FieldRange> {
        match field {
            ScenarioField::DeveloperCount => Some(DEVELOPER_COUNT_RANGE),
            ScenarioField::AnnualCostPerDeveloper => Some(ANNUAL_COST_PER_DEVELOPER_RANGE),
            ScenarioField::CtsSwImprovementPercent => Some(CTS_SW_IMPROVEMENT_PERCENT_RANGE),
            ScenarioField::SolutionCost => Some(SOLUTION_COST_RANGE),
            ScenarioField::RevenuePercentage => Some(REVENUE_PERCENTAGE_RANGE),
            ScenarioField::General => None,
        }
    }
}
