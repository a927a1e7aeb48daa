// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use dx_roi_persistence::ScenarioCatalog;

use crate::error::ApiError;
use crate::handlers::{create_scenario, validate_field_value, validate_scenario_fields};
use crate::request_response::{
    CreateScenarioRequest, CreateScenarioResponse, ValidateFieldRequest, ValidateFieldResponse,
    ValidateScenarioResponse,
};
use crate::tests::helpers::{bank_request, open_catalog};

#[test]
fn test_validate_field_in_range_value() {
    let request: ValidateFieldRequest = ValidateFieldRequest {
        field: String::from("developerCount"),
        value: Some(100.0),
        business_type: String::from("traditional"),
    };

    let response: ValidateFieldResponse =
        validate_field_value(&request).expect("validation should run");
    assert!(response.message.is_none());
}

#[test]
fn test_validate_field_out_of_range_value() {
    let request: ValidateFieldRequest = ValidateFieldRequest {
        field: String::from("annualCostPerDeveloper"),
        value: Some(10_000.0),
        business_type: String::from("traditional"),
    };

    let response: ValidateFieldResponse =
        validate_field_value(&request).expect("validation should run");
    assert!(response.message.is_some());
}

#[test]
fn test_validate_field_empty_value() {
    let request: ValidateFieldRequest = ValidateFieldRequest {
        field: String::from("solutionCost"),
        value: None,
        business_type: String::from("traditional"),
    };

    let response: ValidateFieldResponse =
        validate_field_value(&request).expect("validation should run");
    assert!(response.message.is_some());
}

#[test]
fn test_validate_field_revenue_ignored_for_traditional() {
    let request: ValidateFieldRequest = ValidateFieldRequest {
        field: String::from("revenuePercentage"),
        value: None,
        business_type: String::from("traditional"),
    };

    let response: ValidateFieldResponse =
        validate_field_value(&request).expect("validation should run");
    assert!(response.message.is_none());
}

#[test]
fn test_validate_field_rejects_unknown_field_key() {
    let request: ValidateFieldRequest = ValidateFieldRequest {
        field: String::from("headcount"),
        value: Some(10.0),
        business_type: String::from("traditional"),
    };

    let error: ApiError = validate_field_value(&request).expect_err("validation should fail");
    assert!(matches!(error, ApiError::InvalidInput { ref field, .. } if field == "field"));
}

#[test]
fn test_validate_stored_scenario_reports_field_map() {
    let mut catalog: ScenarioCatalog = open_catalog();

    let mut request: CreateScenarioRequest = bank_request();
    request.developer_count = 10.5;
    request.solution_cost = 500.0;
    let created: CreateScenarioResponse =
        create_scenario(&mut catalog, &request).expect("create should succeed");

    let response: ValidateScenarioResponse =
        validate_scenario_fields(&mut catalog, created.scenario_id)
            .expect("validation should run");
    assert!(response.errors.contains_key("developerCount"));
    assert!(response.errors.contains_key("solutionCost"));
}

#[test]
fn test_validate_stored_valid_scenario_is_clean() {
    let mut catalog: ScenarioCatalog = open_catalog();

    let created: CreateScenarioResponse =
        create_scenario(&mut catalog, &bank_request()).expect("create should succeed");

    let response: ValidateScenarioResponse =
        validate_scenario_fields(&mut catalog, created.scenario_id)
            .expect("validation should run");
    assert!(response.errors.is_empty());
}
