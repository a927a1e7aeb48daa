// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Input validation for calculation scenarios.
//!
//! Validation never fails hard: every function in this module returns data
//! describing invalidity, and an empty [`ValidationErrors`] means the
//! scenario is acceptable. Turning a non-empty result into an error is the
//! calculation engine's job, at the moment a result is requested.
//!
//! Cross-field heuristics share the same error mapping as hard range
//! violations and therefore block calculation exactly like them. That
//! conflation is part of the published contract, not an accident.

use crate::error::DomainError;
use crate::ranges::{
    ANNUAL_COST_PER_DEVELOPER_RANGE, CTS_SW_IMPROVEMENT_PERCENT_RANGE, DEVELOPER_COUNT_RANGE,
    REVENUE_PERCENTAGE_RANGE, SOLUTION_COST_RANGE,
};
use crate::types::{BusinessType, Scenario, ScenarioField};
use std::collections::BTreeMap;

/// Solution cost above this fraction of total annual developer cost is
/// flagged as a disproportionately large investment.
pub const COST_RATIO_HIGH: f64 = 0.5;

/// Solution cost below this fraction of total annual developer cost makes a
/// large claimed improvement suspect.
pub const COST_RATIO_NEGLIGIBLE: f64 = 0.005;

/// Claimed improvement (percentage points) above which a negligible
/// investment is flagged as unrealistic.
pub const SUSPECT_IMPROVEMENT_PERCENT: f64 = 15.0;

/// Head count below which a large solution cost is flagged.
pub const SMALL_TEAM_DEVELOPER_COUNT: f64 = 10.0;

/// Solution cost above which a small team is flagged.
pub const SMALL_TEAM_COST_CEILING: f64 = 500_000.0;

/// Aggregated validation messages, at most one per field.
///
/// Keys are ordered by [`ScenarioField`] declaration order, so aggregation
/// (and the joined message the calculator raises) is deterministic.
/// An absent key means that field is currently valid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors {
    errors: BTreeMap<ScenarioField, String>,
}

impl ValidationErrors {
    /// Creates an empty mapping.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }

    /// Records a message for a field, replacing any earlier message for the
    /// same field.
    pub fn insert(&mut self, field: ScenarioField, message: String) {
        self.errors.insert(field, message);
    }

    /// Returns the message for a field, if any.
    #[must_use]
    pub fn get(&self, field: ScenarioField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Returns `true` when no field has a message.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of flagged fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterates field/message pairs in field declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (ScenarioField, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    /// Returns all messages in field declaration order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.errors.values().cloned().collect()
    }

    /// Joins all messages into a single string, in field declaration order.
    #[must_use]
    pub fn joined_messages(&self) -> String {
        self.messages().join("; ")
    }

    /// Returns the mapping keyed by the string field keys callers use
    /// (`developerCount`, ..., `general`).
    #[must_use]
    pub fn to_field_map(&self) -> BTreeMap<String, String> {
        self.errors
            .iter()
            .map(|(field, msg)| (field.as_str().to_string(), msg.clone()))
            .collect()
    }
}

/// Validates a scenario's catalog name.
///
/// Bookkeeping fields are opaque to the calculation engine, so this check
/// lives apart from [`validate_scenario`] and is enforced at the boundary
/// where scenarios are created or renamed.
///
/// # Errors
///
/// Returns an error if the name is empty or whitespace-only.
pub fn validate_scenario_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidScenarioName(String::from(
            "name cannot be empty",
        )));
    }
    Ok(())
}

/// Validates a single field value in isolation.
///
/// This is the hook for real-time (per-keystroke) validation: it applies
/// only the per-field rules and never the cross-field heuristics.
///
/// `business_type` matters only for [`ScenarioField::RevenuePercentage`],
/// which is validated for tech companies and ignored entirely for
/// traditional businesses. The synthetic `General` key has no per-field
/// rules and always validates.
///
/// # Arguments
///
/// * `field` - The field being validated
/// * `value` - The current value, `None` when the input is empty
/// * `business_type` - The business type of the scenario being edited
///
/// # Returns
///
/// A human-readable message if the value is invalid, `None` otherwise.
#[must_use]
pub fn validate_field(
    field: ScenarioField,
    value: Option<f64>,
    business_type: BusinessType,
) -> Option<String> {
    match field {
        ScenarioField::DeveloperCount => validate_developer_count(value),
        ScenarioField::AnnualCostPerDeveloper => validate_annual_cost_per_developer(value),
        ScenarioField::CtsSwImprovementPercent => validate_cts_sw_improvement(value),
        ScenarioField::SolutionCost => validate_solution_cost(value),
        ScenarioField::RevenuePercentage => validate_revenue_percentage(value, business_type),
        ScenarioField::General => None,
    }
}

/// Validates a full scenario: all per-field rules, then the cross-field
/// heuristics, aggregated into one mapping.
///
/// Cross-field messages land in the same mapping and may replace a
/// per-field message for the same key. All three heuristics can fire in a
/// single call; there is no precedence among them.
#[must_use]
pub fn validate_scenario(scenario: &Scenario) -> ValidationErrors {
    let mut errors: ValidationErrors = ValidationErrors::new();

    let per_field: [(ScenarioField, Option<f64>); 4] = [
        (ScenarioField::DeveloperCount, Some(scenario.developer_count)),
        (
            ScenarioField::AnnualCostPerDeveloper,
            Some(scenario.annual_cost_per_developer),
        ),
        (
            ScenarioField::CtsSwImprovementPercent,
            Some(scenario.cts_sw_improvement_percent),
        ),
        (ScenarioField::SolutionCost, Some(scenario.solution_cost)),
    ];

    for (field, value) in per_field {
        if let Some(message) = validate_field(field, value, scenario.business_type) {
            errors.insert(field, message);
        }
    }

    // Rule: revenue percentage is validated only for tech companies.
    if let Some(message) = validate_field(
        ScenarioField::RevenuePercentage,
        scenario.revenue_percentage,
        scenario.business_type,
    ) {
        errors.insert(ScenarioField::RevenuePercentage, message);
    }

    apply_cross_field_heuristics(scenario, &mut errors);

    errors
}

/// Applies the three realism heuristics on top of the per-field results.
///
/// Comparisons against NaN are false, so a scenario whose inputs already
/// failed the finite-number check simply does not trigger heuristics built
/// on those inputs.
fn apply_cross_field_heuristics(scenario: &Scenario, errors: &mut ValidationErrors) {
    let total_developer_cost: f64 = scenario.developer_count * scenario.annual_cost_per_developer;
    let cost_ratio: f64 = scenario.solution_cost / total_developer_cost;

    // Rule: investment larger than half the annual developer cost is suspect.
    if cost_ratio > COST_RATIO_HIGH {
        errors.insert(
            ScenarioField::SolutionCost,
            String::from(
                "Solution cost is more than half of total annual developer cost; \
                 verify this investment is sized correctly",
            ),
        );
    }

    // Rule: a negligible investment rarely produces a double-digit improvement.
    if cost_ratio < COST_RATIO_NEGLIGIBLE
        && scenario.cts_sw_improvement_percent > SUSPECT_IMPROVEMENT_PERCENT
    {
        errors.insert(
            ScenarioField::CtsSwImprovementPercent,
            String::from(
                "An improvement above 15% is unlikely for an investment this small \
                 relative to total developer cost",
            ),
        );
    }

    // Rule: small teams rarely justify very large investments.
    if scenario.developer_count < SMALL_TEAM_DEVELOPER_COUNT
        && scenario.solution_cost > SMALL_TEAM_COST_CEILING
    {
        errors.insert(
            ScenarioField::General,
            String::from(
                "Solution cost above $500,000 is unusually high for a team of \
                 fewer than 10 developers",
            ),
        );
    }
}

/// Returns the shared "required" message for a field.
fn required_message(field: ScenarioField) -> String {
    format!("{} is required and must be a number", field.display_name())
}

fn validate_developer_count(value: Option<f64>) -> Option<String> {
    let count: f64 = match value {
        Some(v) if v.is_finite() => v,
        _ => return Some(required_message(ScenarioField::DeveloperCount)),
    };

    // Rule: head counts are whole numbers.
    if count.fract() != 0.0 {
        return Some(String::from("Developer count must be a whole number"));
    }

    if count < DEVELOPER_COUNT_RANGE.min {
        return Some(String::from("Developer count must be at least 1"));
    }
    if count > DEVELOPER_COUNT_RANGE.max {
        return Some(String::from(
            "Developer count cannot exceed 50,000 (larger than the biggest \
             known engineering organizations)",
        ));
    }

    None
}

fn validate_annual_cost_per_developer(value: Option<f64>) -> Option<String> {
    let cost: f64 = match value {
        Some(v) if v.is_finite() => v,
        _ => return Some(required_message(ScenarioField::AnnualCostPerDeveloper)),
    };

    if cost <= 0.0 {
        return Some(String::from(
            "Annual cost per developer must be greater than zero",
        ));
    }
    if cost < ANNUAL_COST_PER_DEVELOPER_RANGE.min {
        return Some(String::from(
            "Annual cost per developer must be at least $50,000 (fully loaded \
             cost includes salary, benefits, tooling, and overhead)",
        ));
    }
    if cost > ANNUAL_COST_PER_DEVELOPER_RANGE.max {
        return Some(String::from(
            "Annual cost per developer cannot exceed $300,000 (well above \
             typical fully loaded senior engineer costs)",
        ));
    }

    None
}

fn validate_cts_sw_improvement(value: Option<f64>) -> Option<String> {
    let percent: f64 = match value {
        Some(v) if v.is_finite() => v,
        _ => return Some(required_message(ScenarioField::CtsSwImprovementPercent)),
    };

    if percent <= 0.0 {
        return Some(String::from(
            "CTS-SW improvement percentage must be greater than zero",
        ));
    }
    if percent < CTS_SW_IMPROVEMENT_PERCENT_RANGE.min {
        return Some(String::from(
            "CTS-SW improvement percentage must be at least 0.1% to be measurable",
        ));
    }
    if percent > CTS_SW_IMPROVEMENT_PERCENT_RANGE.max {
        return Some(String::from(
            "CTS-SW improvement percentage cannot exceed 50% (the best case \
             documented in cost-to-serve-software research)",
        ));
    }

    None
}

fn validate_solution_cost(value: Option<f64>) -> Option<String> {
    let cost: f64 = match value {
        Some(v) if v.is_finite() => v,
        _ => return Some(required_message(ScenarioField::SolutionCost)),
    };

    if cost <= 0.0 {
        return Some(String::from("Solution cost must be greater than zero"));
    }
    if cost < SOLUTION_COST_RANGE.min {
        return Some(String::from(
            "Solution cost must be at least $1,000 (smaller investments are \
             below the scope of this model)",
        ));
    }
    if cost > SOLUTION_COST_RANGE.max {
        return Some(String::from(
            "Solution cost cannot exceed $100,000,000 (beyond the largest \
             known developer-experience programs)",
        ));
    }

    None
}

fn validate_revenue_percentage(
    value: Option<f64>,
    business_type: BusinessType,
) -> Option<String> {
    // Rule: the field is meaningful only for tech companies. Traditional
    // scenarios validate regardless of what, if anything, is present.
    if business_type == BusinessType::Traditional {
        return None;
    }

    let percent: f64 = match value {
        Some(v) if v.is_finite() => v,
        _ => return Some(required_message(ScenarioField::RevenuePercentage)),
    };

    if percent < REVENUE_PERCENTAGE_RANGE.min {
        return Some(String::from("Revenue percentage cannot be negative"));
    }
    if percent > REVENUE_PERCENTAGE_RANGE.max {
        return Some(String::from("Revenue percentage cannot exceed 100"));
    }

    None
}
