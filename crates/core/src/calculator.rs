// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use dx_roi_domain::{BusinessType, Scenario, ValidationErrors, validate_scenario};

use crate::error::CoreError;
use crate::format::{format_currency, format_number, format_percent};
use crate::results::{CalculationResults, CalculationStep, SupportingMetrics};

/// Assumed profit margin for tech companies without published figures.
///
/// Used to estimate current annual profit from total developer cost when
/// computing the profit boost percentage.
pub const BASELINE_PROFIT_MARGIN: f64 = 0.10;

/// Runs the calculation pipeline selected by the scenario's business type.
///
/// # Arguments
///
/// * `scenario` - The scenario to calculate.
///
/// # Returns
///
/// The calculation results for the matching pipeline.
///
/// # Errors
///
/// Returns `CoreError::InvalidScenario` when validation fails, or
/// `CoreError::MissingRevenuePercentage` when a tech scenario has no
/// revenue percentage.
pub fn calculate(scenario: &Scenario) -> Result<CalculationResults, CoreError> {
    match scenario.business_type {
        BusinessType::Traditional => calculate_traditional_business(scenario),
        BusinessType::Tech => calculate_tech_company(scenario),
    }
}

/// Calculates ROI for a traditional business.
///
/// Produces three ordered steps: total developer cost, annual cost
/// avoidance, and the ROI multiple. The ROI percentage is reported
/// alongside the multiple rather than as its own step.
///
/// # Arguments
///
/// * `scenario` - The scenario to calculate.
///
/// # Returns
///
/// The calculation results with exactly three steps.
///
/// # Errors
///
/// Returns `CoreError::InvalidScenario` when the scenario fails
/// validation; no partial results are produced.
pub fn calculate_traditional_business(
    scenario: &Scenario,
) -> Result<CalculationResults, CoreError> {
    let errors: ValidationErrors = validate_scenario(scenario);
    if !errors.is_empty() {
        return Err(CoreError::InvalidScenario { errors });
    }

    let total_developer_cost: f64 = scenario.developer_count * scenario.annual_cost_per_developer;
    let cost_avoidance: f64 = total_developer_cost * (scenario.cts_sw_improvement_percent / 100.0);
    let roi_multiple: f64 = cost_avoidance / scenario.solution_cost;
    let roi_percentage: f64 = (roi_multiple - 1.0) * 100.0;

    let calculation_steps: Vec<CalculationStep> = vec![
        CalculationStep {
            step: 1,
            description: String::from("Total annual developer cost"),
            formula: String::from("developerCount × annualCostPerDeveloper"),
            calculation: format!(
                "{} × {} = {}",
                format_number(scenario.developer_count),
                format_currency(scenario.annual_cost_per_developer),
                format_currency(total_developer_cost)
            ),
            result: total_developer_cost,
            explanation: String::from(
                "What the organization spends on its developers every year.",
            ),
        },
        CalculationStep {
            step: 2,
            description: String::from("Annual cost avoidance"),
            formula: String::from("totalDeveloperCost × (ctsSwImprovementPercent / 100)"),
            calculation: format!(
                "{} × {} = {}",
                format_currency(total_developer_cost),
                format_percent(scenario.cts_sw_improvement_percent),
                format_currency(cost_avoidance)
            ),
            result: cost_avoidance,
            explanation: String::from(
                "Developer cost recovered each year by reducing the cost to serve software.",
            ),
        },
        CalculationStep {
            step: 3,
            description: String::from("Return on investment"),
            formula: String::from("costAvoidance / solutionCost"),
            calculation: format!(
                "{} / {} = {}x ({} ROI)",
                format_currency(cost_avoidance),
                format_currency(scenario.solution_cost),
                format_number(roi_multiple),
                format_percent(roi_percentage)
            ),
            result: roi_multiple,
            explanation: String::from(
                "Every dollar invested in the solution returns this many dollars in avoided cost.",
            ),
        },
    ];

    Ok(CalculationResults {
        scenario_id: scenario.scenario_id,
        total_developer_cost,
        cost_avoidance,
        roi_multiple,
        roi_percentage,
        gross_margin_improvement: None,
        profit_impact: None,
        profit_boost_percentage: None,
        supporting_metrics: SupportingMetrics::default(),
        calculation_steps,
    })
}

/// Calculates ROI for a tech company.
///
/// Runs the full traditional pipeline first, then adds gross margin
/// improvement, profit impact, and profit boost percentage as steps four
/// through six.
///
/// # Arguments
///
/// * `scenario` - The scenario to calculate.
///
/// # Returns
///
/// The calculation results with exactly six steps.
///
/// # Errors
///
/// Returns `CoreError::MissingRevenuePercentage` when the scenario has no
/// revenue percentage, and `CoreError::InvalidScenario` when validation
/// fails. The revenue precondition is checked before validation runs.
pub fn calculate_tech_company(scenario: &Scenario) -> Result<CalculationResults, CoreError> {
    let Some(revenue_percentage) = scenario.revenue_percentage else {
        return Err(CoreError::MissingRevenuePercentage);
    };

    let mut results: CalculationResults = calculate_traditional_business(scenario)?;

    let gross_margin_improvement: f64 = results.cost_avoidance * (revenue_percentage / 100.0);
    let profit_impact: f64 = gross_margin_improvement;
    let estimated_current_profit: f64 = results.total_developer_cost * BASELINE_PROFIT_MARGIN;
    let profit_boost_percentage: f64 = if estimated_current_profit > 0.0 {
        (profit_impact / estimated_current_profit) * 100.0
    } else {
        0.0
    };

    results.calculation_steps.push(CalculationStep {
        step: 4,
        description: String::from("Gross margin improvement"),
        formula: String::from("costAvoidance × (revenuePercentage / 100)"),
        calculation: format!(
            "{} × {} = {}",
            format_currency(results.cost_avoidance),
            format_percent(revenue_percentage),
            format_currency(gross_margin_improvement)
        ),
        result: gross_margin_improvement,
        explanation: String::from(
            "The share of cost avoidance that flows through development-driven revenue.",
        ),
    });
    results.calculation_steps.push(CalculationStep {
        step: 5,
        description: String::from("Profit impact"),
        formula: String::from("grossMarginImprovement"),
        calculation: format!(
            "{} = {}",
            format_currency(gross_margin_improvement),
            format_currency(profit_impact)
        ),
        result: profit_impact,
        explanation: String::from(
            "Margin gains are assumed to flow entirely to profit.",
        ),
    });
    results.calculation_steps.push(CalculationStep {
        step: 6,
        description: String::from("Profit boost"),
        formula: String::from("(profitImpact / estimatedCurrentProfit) × 100"),
        calculation: format!(
            "({} / {}) × 100 = {}",
            format_currency(profit_impact),
            format_currency(estimated_current_profit),
            format_percent(profit_boost_percentage)
        ),
        result: profit_boost_percentage,
        explanation: String::from(
            "Profit impact relative to an assumed 10% baseline profit margin.",
        ),
    });

    results.gross_margin_improvement = Some(gross_margin_improvement);
    results.profit_impact = Some(profit_impact);
    results.profit_boost_percentage = Some(profit_boost_percentage);

    Ok(results)
}
