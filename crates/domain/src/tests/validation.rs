// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    BusinessType, DomainError, Scenario, ScenarioField, ValidationErrors, validate_field,
    validate_scenario, validate_scenario_name,
};

fn make_traditional() -> Scenario {
    Scenario::new(
        String::from("Bank modernization"),
        String::new(),
        None,
        BusinessType::Traditional,
        1000.0,
        130_000.0,
        15.0,
        2_000_000.0,
        None,
        String::from("2026-01-01T00:00:00Z"),
        String::from("2026-01-01T00:00:00Z"),
    )
}

fn make_tech() -> Scenario {
    Scenario::new(
        String::from("SaaS platform"),
        String::new(),
        None,
        BusinessType::Tech,
        400.0,
        150_000.0,
        15.0,
        1_000_000.0,
        Some(60.0),
        String::from("2026-01-01T00:00:00Z"),
        String::from("2026-01-01T00:00:00Z"),
    )
}

#[test]
fn test_valid_traditional_scenario_has_no_errors() {
    let errors: ValidationErrors = validate_scenario(&make_traditional());
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
}

#[test]
fn test_valid_tech_scenario_has_no_errors() {
    let errors: ValidationErrors = validate_scenario(&make_tech());
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
}

#[test]
fn test_range_boundaries_are_inclusive() {
    let cases: [(ScenarioField, f64, f64); 5] = [
        (ScenarioField::DeveloperCount, 1.0, 50_000.0),
        (ScenarioField::AnnualCostPerDeveloper, 50_000.0, 300_000.0),
        (ScenarioField::CtsSwImprovementPercent, 0.1, 50.0),
        (ScenarioField::SolutionCost, 1_000.0, 100_000_000.0),
        (ScenarioField::RevenuePercentage, 0.0, 100.0),
    ];

    for (field, min, max) in cases {
        assert_eq!(
            validate_field(field, Some(min), BusinessType::Tech),
            None,
            "{field} should accept its minimum"
        );
        assert_eq!(
            validate_field(field, Some(max), BusinessType::Tech),
            None,
            "{field} should accept its maximum"
        );
    }
}

#[test]
fn test_values_just_outside_range_are_rejected() {
    assert!(
        validate_field(
            ScenarioField::DeveloperCount,
            Some(50_001.0),
            BusinessType::Traditional
        )
        .is_some()
    );
    assert!(
        validate_field(
            ScenarioField::AnnualCostPerDeveloper,
            Some(49_999.99),
            BusinessType::Traditional
        )
        .is_some()
    );
    assert!(
        validate_field(
            ScenarioField::AnnualCostPerDeveloper,
            Some(300_000.01),
            BusinessType::Traditional
        )
        .is_some()
    );
    assert!(
        validate_field(
            ScenarioField::CtsSwImprovementPercent,
            Some(0.05),
            BusinessType::Traditional
        )
        .is_some()
    );
    assert!(
        validate_field(
            ScenarioField::CtsSwImprovementPercent,
            Some(50.1),
            BusinessType::Traditional
        )
        .is_some()
    );
    assert!(
        validate_field(
            ScenarioField::SolutionCost,
            Some(999.99),
            BusinessType::Traditional
        )
        .is_some()
    );
    assert!(
        validate_field(
            ScenarioField::SolutionCost,
            Some(100_000_001.0),
            BusinessType::Traditional
        )
        .is_some()
    );
    assert!(
        validate_field(
            ScenarioField::RevenuePercentage,
            Some(-0.1),
            BusinessType::Tech
        )
        .is_some()
    );
    assert!(
        validate_field(
            ScenarioField::RevenuePercentage,
            Some(100.1),
            BusinessType::Tech
        )
        .is_some()
    );
}

#[test]
fn test_non_finite_values_take_the_required_path() {
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        for field in [
            ScenarioField::DeveloperCount,
            ScenarioField::AnnualCostPerDeveloper,
            ScenarioField::CtsSwImprovementPercent,
            ScenarioField::SolutionCost,
            ScenarioField::RevenuePercentage,
        ] {
            let message: String =
                validate_field(field, Some(bad), BusinessType::Tech).unwrap();
            assert!(
                message.contains("is required and must be a number"),
                "{field} with {bad} produced: {message}"
            );
        }
    }
}

#[test]
fn test_nan_inputs_never_fire_heuristics() {
    // NaN comparisons are false, so the per-field required message stands.
    let mut scenario: Scenario = make_traditional();
    scenario.solution_cost = f64::NAN;

    let errors: ValidationErrors = validate_scenario(&scenario);
    assert_eq!(
        errors.get(ScenarioField::SolutionCost).unwrap(),
        "Solution cost is required and must be a number"
    );
}

#[test]
fn test_infinite_solution_cost_fires_cost_ratio_heuristic() {
    // An infinite input exceeds the cost-ratio threshold, and the heuristic
    // message replaces the required-field message for the shared key.
    let mut scenario: Scenario = make_traditional();
    scenario.solution_cost = f64::INFINITY;

    let errors: ValidationErrors = validate_scenario(&scenario);
    assert!(
        errors
            .get(ScenarioField::SolutionCost)
            .unwrap()
            .contains("more than half of total annual developer cost")
    );
}

#[test]
fn test_missing_value_takes_the_required_path() {
    let message: String =
        validate_field(ScenarioField::DeveloperCount, None, BusinessType::Traditional).unwrap();
    assert_eq!(message, "Developer count is required and must be a number");
}

#[test]
fn test_developer_count_must_be_whole() {
    let message: String = validate_field(
        ScenarioField::DeveloperCount,
        Some(10.5),
        BusinessType::Traditional,
    )
    .unwrap();
    assert_eq!(message, "Developer count must be a whole number");
}

#[test]
fn test_non_positive_values_report_greater_than_zero_before_range() {
    let message: String = validate_field(
        ScenarioField::AnnualCostPerDeveloper,
        Some(-50.0),
        BusinessType::Traditional,
    )
    .unwrap();
    assert!(message.contains("greater than zero"), "got: {message}");

    let message: String = validate_field(
        ScenarioField::CtsSwImprovementPercent,
        Some(0.0),
        BusinessType::Traditional,
    )
    .unwrap();
    assert!(message.contains("greater than zero"), "got: {message}");

    let message: String = validate_field(
        ScenarioField::SolutionCost,
        Some(-1_000.0),
        BusinessType::Traditional,
    )
    .unwrap();
    assert!(message.contains("greater than zero"), "got: {message}");
}

#[test]
fn test_revenue_percentage_zero_is_valid_for_tech() {
    assert_eq!(
        validate_field(ScenarioField::RevenuePercentage, Some(0.0), BusinessType::Tech),
        None
    );
}

#[test]
fn test_revenue_percentage_ignored_for_traditional() {
    // Absent, non-finite, and out-of-range values all validate for a
    // traditional business: the field is not meaningful there.
    for value in [None, Some(f64::NAN), Some(-40.0), Some(250.0)] {
        assert_eq!(
            validate_field(
                ScenarioField::RevenuePercentage,
                value,
                BusinessType::Traditional
            ),
            None
        );
    }
}

#[test]
fn test_missing_revenue_percentage_flagged_for_tech_scenario() {
    let mut scenario: Scenario = make_tech();
    scenario.revenue_percentage = None;

    let errors: ValidationErrors = validate_scenario(&scenario);
    assert_eq!(
        errors.get(ScenarioField::RevenuePercentage),
        Some("Revenue percentage is required and must be a number")
    );
}

#[test]
fn test_general_field_always_validates() {
    assert_eq!(
        validate_field(ScenarioField::General, None, BusinessType::Tech),
        None
    );
    assert_eq!(
        validate_field(ScenarioField::General, Some(f64::NAN), BusinessType::Tech),
        None
    );
}

#[test]
fn test_high_cost_ratio_flags_solution_cost() {
    // total = 10 * 100,000 = 1,000,000; ratio = 600,000 / 1,000,000 = 0.6
    let mut scenario: Scenario = make_traditional();
    scenario.developer_count = 10.0;
    scenario.annual_cost_per_developer = 100_000.0;
    scenario.solution_cost = 600_000.0;

    let errors: ValidationErrors = validate_scenario(&scenario);
    let message: &str = errors.get(ScenarioField::SolutionCost).unwrap();
    assert!(
        message.contains("more than half"),
        "expected the cost-ratio warning, got: {message}"
    );
    // The heuristic fires even though 600,000 is well within the range.
    assert_eq!(errors.len(), 1);
}

#[test]
fn test_negligible_cost_ratio_flags_large_improvement() {
    // total = 10,000 * 100,000 = 1e9; ratio = 1,000,000 / 1e9 = 0.001
    let mut scenario: Scenario = make_traditional();
    scenario.developer_count = 10_000.0;
    scenario.annual_cost_per_developer = 100_000.0;
    scenario.solution_cost = 1_000_000.0;
    scenario.cts_sw_improvement_percent = 20.0;

    let errors: ValidationErrors = validate_scenario(&scenario);
    assert!(errors.get(ScenarioField::CtsSwImprovementPercent).is_some());
    assert_eq!(errors.len(), 1);
}

#[test]
fn test_negligible_ratio_without_large_improvement_is_fine() {
    let mut scenario: Scenario = make_traditional();
    scenario.developer_count = 10_000.0;
    scenario.annual_cost_per_developer = 100_000.0;
    scenario.solution_cost = 1_000_000.0;
    scenario.cts_sw_improvement_percent = 10.0;

    let errors: ValidationErrors = validate_scenario(&scenario);
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
}

#[test]
fn test_small_team_with_large_cost_sets_general_key() {
    let mut scenario: Scenario = make_traditional();
    scenario.developer_count = 5.0;
    scenario.annual_cost_per_developer = 100_000.0;
    scenario.solution_cost = 600_000.0;

    let errors: ValidationErrors = validate_scenario(&scenario);
    assert!(errors.get(ScenarioField::General).is_some());
    // ratio = 600,000 / 500,000 = 1.2 > 0.5: both heuristics fire together.
    assert!(errors.get(ScenarioField::SolutionCost).is_some());
    assert_eq!(errors.len(), 2);
}

#[test]
fn test_cross_field_message_replaces_per_field_message() {
    // Out of range AND a huge ratio: the heuristic runs after the range
    // check and owns the final message for the key.
    let mut scenario: Scenario = make_traditional();
    scenario.developer_count = 100.0;
    scenario.annual_cost_per_developer = 50_000.0;
    scenario.solution_cost = 100_000_001.0;

    let errors: ValidationErrors = validate_scenario(&scenario);
    let message: &str = errors.get(ScenarioField::SolutionCost).unwrap();
    assert!(message.contains("more than half"), "got: {message}");
}

#[test]
fn test_validate_field_does_not_run_cross_field_checks() {
    // The same value that trips the ratio heuristic in a full scenario is
    // clean when validated in isolation.
    assert_eq!(
        validate_field(
            ScenarioField::SolutionCost,
            Some(600_000.0),
            BusinessType::Traditional
        ),
        None
    );
}

#[test]
fn test_joined_messages_follow_field_declaration_order() {
    let mut scenario: Scenario = make_traditional();
    scenario.developer_count = 0.0;
    scenario.solution_cost = 500.0;

    let errors: ValidationErrors = validate_scenario(&scenario);
    let joined: String = errors.joined_messages();
    let developer_pos: usize = joined.find("Developer count").unwrap();
    let solution_pos: usize = joined.find("Solution cost").unwrap();
    assert!(developer_pos < solution_pos);
    assert!(joined.contains("; "));
}

#[test]
fn test_to_field_map_uses_string_keys() {
    let mut scenario: Scenario = make_traditional();
    scenario.developer_count = 0.0;

    let errors: ValidationErrors = validate_scenario(&scenario);
    let map = errors.to_field_map();
    assert!(map.contains_key("developerCount"));
}

#[test]
fn test_scenario_name_must_not_be_blank() {
    assert!(validate_scenario_name("Bank modernization").is_ok());

    let result: Result<(), DomainError> = validate_scenario_name("   ");
    assert!(matches!(
        result.unwrap_err(),
        DomainError::InvalidScenarioName(_)
    ));
}

#[test]
fn test_validation_is_deterministic() {
    let mut scenario: Scenario = make_traditional();
    scenario.developer_count = 5.0;
    scenario.annual_cost_per_developer = 100_000.0;
    scenario.solution_cost = 600_000.0;

    let first: ValidationErrors = validate_scenario(&scenario);
    let second: ValidationErrors = validate_scenario(&scenario);
    assert_eq!(first, second);
}
