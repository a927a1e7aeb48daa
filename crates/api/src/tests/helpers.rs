// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use dx_roi_persistence::ScenarioCatalog;

use crate::request_response::{CreateScenarioRequest, UpdateScenarioRequest};

pub fn open_catalog() -> ScenarioCatalog {
    ScenarioCatalog::open_in_memory().expect("in-memory catalog should open")
}

pub fn bank_request() -> CreateScenarioRequest {
    CreateScenarioRequest {
        name: String::from("Large bank"),
        notes: String::from("Retail bank"),
        organization_size: Some(String::from("enterprise")),
        business_type: String::from("traditional"),
        developer_count: 1_000.0,
        annual_cost_per_developer: 130_000.0,
        cts_sw_improvement_percent: 15.0,
        solution_cost: 2_000_000.0,
        revenue_percentage: None,
    }
}

pub fn saas_request() -> CreateScenarioRequest {
    CreateScenarioRequest {
        name: String::from("SaaS platform"),
        notes: String::new(),
        organization_size: Some(String::from("large")),
        business_type: String::from("tech"),
        developer_count: 400.0,
        annual_cost_per_developer: 150_000.0,
        cts_sw_improvement_percent: 15.0,
        solution_cost: 1_000_000.0,
        revenue_percentage: Some(60.0),
    }
}

pub fn update_request_from(
    scenario_id: i64,
    request: &CreateScenarioRequest,
) -> UpdateScenarioRequest {
    UpdateScenarioRequest {
        scenario_id,
        name: request.name.clone(),
        notes: request.notes.clone(),
        organization_size: request.organization_size.clone(),
        business_type: request.business_type.clone(),
        developer_count: request.developer_count,
        annual_cost_per_developer: request.annual_cost_per_developer,
        cts_sw_improvement_percent: request.cts_sw_improvement_percent,
        solution_cost: request.solution_cost,
        revenue_percentage: request.revenue_percentage,
    }
}
