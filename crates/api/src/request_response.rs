// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use dx_roi_domain::Scenario;
use serde::{Deserialize, Serialize};

/// API request to create a new scenario in the catalog.
///
/// Enum-valued fields are carried as strings and parsed at the boundary;
/// this DTO is distinct from domain types and represents the API contract.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateScenarioRequest {
    /// The scenario name. Must not be blank.
    pub name: String,
    /// Free-form notes.
    pub notes: String,
    /// Organization size bucket, if known (e.g., `"startup"`, `"large"`).
    pub organization_size: Option<String>,
    /// The business type, `"traditional"` or `"tech"`.
    pub business_type: String,
    /// Number of developers in the organization.
    pub developer_count: f64,
    /// Fully loaded annual cost per developer, in dollars.
    pub annual_cost_per_developer: f64,
    /// Expected cost-to-serve improvement, in percentage points.
    pub cts_sw_improvement_percent: f64,
    /// Annual cost of the proposed solution, in dollars.
    pub solution_cost: f64,
    /// Share of revenue driven by development, tech scenarios only.
    pub revenue_percentage: Option<f64>,
}

/// API response for a successful scenario creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateScenarioResponse {
    /// The identifier assigned by the catalog.
    pub scenario_id: i64,
    /// The scenario name.
    pub name: String,
    /// A success message.
    pub message: String,
}

/// A stored scenario as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInfo {
    /// The catalog identifier.
    pub scenario_id: i64,
    /// The scenario name.
    pub name: String,
    /// Free-form notes.
    pub notes: String,
    /// Organization size bucket, if set.
    pub organization_size: Option<String>,
    /// The business type, `"traditional"` or `"tech"`.
    pub business_type: String,
    /// Number of developers in the organization.
    pub developer_count: f64,
    /// Fully loaded annual cost per developer, in dollars.
    pub annual_cost_per_developer: f64,
    /// Expected cost-to-serve improvement, in percentage points.
    pub cts_sw_improvement_percent: f64,
    /// Annual cost of the proposed solution, in dollars.
    pub solution_cost: f64,
    /// Share of revenue driven by development, tech scenarios only.
    pub revenue_percentage: Option<f64>,
    /// When the scenario was created, RFC 3339.
    pub created_at: String,
    /// When the scenario was last updated, RFC 3339.
    pub updated_at: String,
}

impl ScenarioInfo {
    /// Builds the DTO from a stored domain scenario.
    ///
    /// The scenario must carry a `scenario_id`; unsaved scenarios have no
    /// API representation.
    #[must_use]
    pub fn from_scenario(scenario: &Scenario) -> Option<Self> {
        let scenario_id: i64 = scenario.scenario_id?;
        Some(Self {
            scenario_id,
            name: scenario.name.clone(),
            notes: scenario.notes.clone(),
            organization_size: scenario
                .organization_size
                .map(|size| String::from(size.as_str())),
            business_type: String::from(scenario.business_type.as_str()),
            developer_count: scenario.developer_count,
            annual_cost_per_developer: scenario.annual_cost_per_developer,
            cts_sw_improvement_percent: scenario.cts_sw_improvement_percent,
            solution_cost: scenario.solution_cost,
            revenue_percentage: scenario.revenue_percentage,
            created_at: scenario.created_at.clone(),
            updated_at: scenario.updated_at.clone(),
        })
    }
}

/// API response listing all stored scenarios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListScenariosResponse {
    /// The stored scenarios, ordered by identifier.
    pub scenarios: Vec<ScenarioInfo>,
}

/// API request to update a stored scenario.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpdateScenarioRequest {
    /// Identifier of the scenario to update.
    pub scenario_id: i64,
    /// The new scenario name. Must not be blank.
    pub name: String,
    /// Free-form notes.
    pub notes: String,
    /// Organization size bucket, if known.
    pub organization_size: Option<String>,
    /// The business type, `"traditional"` or `"tech"`.
    pub business_type: String,
    /// Number of developers in the organization.
    pub developer_count: f64,
    /// Fully loaded annual cost per developer, in dollars.
    pub annual_cost_per_developer: f64,
    /// Expected cost-to-serve improvement, in percentage points.
    pub cts_sw_improvement_percent: f64,
    /// Annual cost of the proposed solution, in dollars.
    pub solution_cost: f64,
    /// Share of revenue driven by development, tech scenarios only.
    pub revenue_percentage: Option<f64>,
}

/// API response for a successful scenario update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateScenarioResponse {
    /// The identifier of the updated scenario.
    pub scenario_id: i64,
    /// A success message.
    pub message: String,
}

/// API response for a successful scenario deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteScenarioResponse {
    /// The identifier of the deleted scenario.
    pub scenario_id: i64,
    /// A success message.
    pub message: String,
}

/// API request to validate a single field value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ValidateFieldRequest {
    /// The field key (e.g., `"developerCount"`).
    pub field: String,
    /// The value to validate, or `None` when the input is empty.
    pub value: Option<f64>,
    /// The current business type, `"traditional"` or `"tech"`.
    pub business_type: String,
}

/// API response for a single-field validation check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateFieldResponse {
    /// The validation message, or `None` when the value is acceptable.
    pub message: Option<String>,
}

/// API response for a full-scenario validation check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateScenarioResponse {
    /// Field key to message, empty when the scenario is valid.
    pub errors: std::collections::BTreeMap<String, String>,
}

/// A built-in example scenario as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetInfo {
    /// The preset name.
    pub name: String,
    /// Free-form notes describing the preset.
    pub notes: String,
    /// The business type, `"traditional"` or `"tech"`.
    pub business_type: String,
    /// Number of developers in the organization.
    pub developer_count: f64,
    /// Fully loaded annual cost per developer, in dollars.
    pub annual_cost_per_developer: f64,
    /// Expected cost-to-serve improvement, in percentage points.
    pub cts_sw_improvement_percent: f64,
    /// Annual cost of the proposed solution, in dollars.
    pub solution_cost: f64,
    /// Share of revenue driven by development, tech presets only.
    pub revenue_percentage: Option<f64>,
}

/// API response listing the built-in example scenarios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListPresetsResponse {
    /// The built-in example scenarios.
    pub presets: Vec<PresetInfo>,
}
