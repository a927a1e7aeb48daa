// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// A single step of a calculation walkthrough.
///
/// Each step records the formula in symbolic form, the same formula with the
/// scenario's concrete values substituted in, the numeric result, and a plain
/// prose explanation of what the number means. The sequence of steps fully
/// describes, in order, how the final figures were derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationStep {
    /// One-based position of this step within the walkthrough.
    pub step: u32,
    /// Short label for what this step computes.
    pub description: String,
    /// The formula in symbolic form.
    pub formula: String,
    /// The formula with concrete values substituted in.
    pub calculation: String,
    /// The numeric result of this step.
    pub result: f64,
    /// Prose explanation of what the result means.
    pub explanation: String,
}

/// Reserved figures that accompany the headline numbers.
///
/// All fields are currently fixed at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SupportingMetrics {
    /// Months to recover the solution cost. Fixed at zero.
    pub payback_period_months: f64,
    /// Value projected over a five year horizon. Fixed at zero.
    pub five_year_value: f64,
    /// Cost avoided per developer. Fixed at zero.
    pub cost_per_developer_saved: f64,
}

/// The full outcome of a calculation: headline figures, supporting
/// metrics, and the ordered step-by-step walkthrough that produced them.
///
/// The three `Option` fields are populated if and only if the scenario's
/// business type is tech.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResults {
    /// Identifier of the stored scenario this result was computed for, when
    /// the scenario has been persisted.
    pub scenario_id: Option<i64>,
    /// Total annual developer cost for the organization.
    pub total_developer_cost: f64,
    /// Annual cost avoided through the cost-to-serve improvement.
    pub cost_avoidance: f64,
    /// Cost avoidance expressed as a multiple of the solution cost.
    pub roi_multiple: f64,
    /// Return on investment as a percentage, net of the investment itself.
    pub roi_percentage: f64,
    /// Margin improvement attributed to the revenue share of development.
    pub gross_margin_improvement: Option<f64>,
    /// Profit impact of the margin improvement.
    pub profit_impact: Option<f64>,
    /// Profit impact as a percentage of the estimated current profit.
    pub profit_boost_percentage: Option<f64>,
    /// Reserved figures that accompany the headline numbers.
    pub supporting_metrics: SupportingMetrics,
    /// Ordered walkthrough of how the figures were produced.
    pub calculation_steps: Vec<CalculationStep>,
}
