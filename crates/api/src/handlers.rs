// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for catalog and calculation operations.

use std::str::FromStr;

use dx_roi::{CalculationResults, calculate, preset_by_name, preset_scenarios};
use dx_roi_domain::{
    BusinessType, OrganizationSize, Scenario, ScenarioField, ValidationErrors, validate_field,
    validate_scenario, validate_scenario_name,
};
use dx_roi_persistence::ScenarioCatalog;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::info;

use crate::error::{ApiError, translate_core_error, translate_persistence_error};
use crate::request_response::{
    CreateScenarioRequest, CreateScenarioResponse, DeleteScenarioResponse, ListPresetsResponse,
    ListScenariosResponse, PresetInfo, ScenarioInfo, UpdateScenarioRequest,
    UpdateScenarioResponse, ValidateFieldRequest, ValidateFieldResponse, ValidateScenarioResponse,
};

/// Returns the current UTC time as an RFC 3339 string.
fn now_rfc3339() -> Result<String, ApiError> {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|err| ApiError::Internal {
            message: format!("Failed to format timestamp: {err}"),
        })
}

/// Parses a business type string from a request.
fn parse_business_type(value: &str) -> Result<BusinessType, ApiError> {
    BusinessType::from_str(value).map_err(|err| ApiError::InvalidInput {
        field: String::from("businessType"),
        message: err.to_string(),
    })
}

/// Parses an optional organization size string from a request.
fn parse_organization_size(
    value: Option<&String>,
) -> Result<Option<OrganizationSize>, ApiError> {
    match value {
        Some(raw) => OrganizationSize::from_str(raw)
            .map(Some)
            .map_err(|err| ApiError::InvalidInput {
                field: String::from("organizationSize"),
                message: err.to_string(),
            }),
        None => Ok(None),
    }
}

/// Converts a stored scenario into its API representation.
fn scenario_info(scenario: &Scenario) -> Result<ScenarioInfo, ApiError> {
    ScenarioInfo::from_scenario(scenario).ok_or_else(|| ApiError::Internal {
        message: String::from("Stored scenario has no identifier"),
    })
}

/// Creates a new scenario in the catalog.
///
/// The scenario is stored as given; input values are not range-validated
/// here. Validation gates calculation, not storage, so drafts with
/// out-of-range values can be saved and corrected later. The name must not
/// be blank and enum-valued fields must parse.
///
/// # Arguments
///
/// * `catalog` - The scenario catalog.
/// * `request` - The creation request.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the name is blank or an enum field
/// does not parse, or an internal error if the insert fails.
pub fn create_scenario(
    catalog: &mut ScenarioCatalog,
    request: &CreateScenarioRequest,
) -> Result<CreateScenarioResponse, ApiError> {
    validate_scenario_name(&request.name).map_err(|err| ApiError::InvalidInput {
        field: String::from("name"),
        message: err.to_string(),
    })?;
    let business_type: BusinessType = parse_business_type(&request.business_type)?;
    let organization_size: Option<OrganizationSize> =
        parse_organization_size(request.organization_size.as_ref())?;
    let now: String = now_rfc3339()?;

    let scenario: Scenario = Scenario::new(
        request.name.clone(),
        request.notes.clone(),
        organization_size,
        business_type,
        request.developer_count,
        request.annual_cost_per_developer,
        request.cts_sw_improvement_percent,
        request.solution_cost,
        request.revenue_percentage,
        now.clone(),
        now,
    );

    let scenario_id: i64 = catalog
        .insert(&scenario)
        .map_err(translate_persistence_error)?;
    info!(scenario_id, name = %request.name, "Created scenario");

    Ok(CreateScenarioResponse {
        scenario_id,
        name: request.name.clone(),
        message: format!("Scenario '{}' created", request.name),
    })
}

/// Fetches a stored scenario.
///
/// # Arguments
///
/// * `catalog` - The scenario catalog.
/// * `scenario_id` - Identifier of the scenario to fetch.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if no scenario with that identifier
/// exists.
pub fn get_scenario(
    catalog: &mut ScenarioCatalog,
    scenario_id: i64,
) -> Result<ScenarioInfo, ApiError> {
    let scenario: Scenario = catalog
        .get(scenario_id)
        .map_err(translate_persistence_error)?;
    scenario_info(&scenario)
}

/// Lists all stored scenarios.
///
/// # Arguments
///
/// * `catalog` - The scenario catalog.
///
/// # Errors
///
/// Returns an internal error if the catalog cannot be read.
pub fn list_scenarios(catalog: &mut ScenarioCatalog) -> Result<ListScenariosResponse, ApiError> {
    let scenarios: Vec<Scenario> = catalog.list().map_err(translate_persistence_error)?;
    let infos: Vec<ScenarioInfo> = scenarios
        .iter()
        .map(scenario_info)
        .collect::<Result<Vec<ScenarioInfo>, ApiError>>()?;

    Ok(ListScenariosResponse { scenarios: infos })
}

/// Updates a stored scenario.
///
/// The original creation timestamp is preserved; the update timestamp is
/// set to now.
///
/// # Arguments
///
/// * `catalog` - The scenario catalog.
/// * `request` - The update request.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if no scenario with that identifier
/// exists, or `ApiError::InvalidInput` if the name is blank or an enum
/// field does not parse.
pub fn update_scenario(
    catalog: &mut ScenarioCatalog,
    request: &UpdateScenarioRequest,
) -> Result<UpdateScenarioResponse, ApiError> {
    let existing: Scenario = catalog
        .get(request.scenario_id)
        .map_err(translate_persistence_error)?;
    validate_scenario_name(&request.name).map_err(|err| ApiError::InvalidInput {
        field: String::from("name"),
        message: err.to_string(),
    })?;
    let business_type: BusinessType = parse_business_type(&request.business_type)?;
    let organization_size: Option<OrganizationSize> =
        parse_organization_size(request.organization_size.as_ref())?;
    let now: String = now_rfc3339()?;

    let scenario: Scenario = Scenario::with_id(
        request.scenario_id,
        request.name.clone(),
        request.notes.clone(),
        organization_size,
        business_type,
        request.developer_count,
        request.annual_cost_per_developer,
        request.cts_sw_improvement_percent,
        request.solution_cost,
        request.revenue_percentage,
        existing.created_at,
        now,
    );

    catalog
        .update(&scenario)
        .map_err(translate_persistence_error)?;
    info!(scenario_id = request.scenario_id, "Updated scenario");

    Ok(UpdateScenarioResponse {
        scenario_id: request.scenario_id,
        message: format!("Scenario '{}' updated", request.name),
    })
}

/// Deletes a stored scenario.
///
/// # Arguments
///
/// * `catalog` - The scenario catalog.
/// * `scenario_id` - Identifier of the scenario to delete.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if no scenario with that identifier
/// exists.
pub fn delete_scenario(
    catalog: &mut ScenarioCatalog,
    scenario_id: i64,
) -> Result<DeleteScenarioResponse, ApiError> {
    catalog
        .delete(scenario_id)
        .map_err(translate_persistence_error)?;
    info!(scenario_id, "Deleted scenario");

    Ok(DeleteScenarioResponse {
        scenario_id,
        message: format!("Scenario {scenario_id} deleted"),
    })
}

/// Runs the calculation pipeline for a stored scenario.
///
/// # Arguments
///
/// * `catalog` - The scenario catalog.
/// * `scenario_id` - Identifier of the scenario to calculate.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if no scenario with that identifier
/// exists, `ApiError::ValidationFailed` if the scenario fails validation,
/// or `ApiError::InvalidInput` for a tech scenario with no revenue
/// percentage.
pub fn calculate_scenario(
    catalog: &mut ScenarioCatalog,
    scenario_id: i64,
) -> Result<CalculationResults, ApiError> {
    let scenario: Scenario = catalog
        .get(scenario_id)
        .map_err(translate_persistence_error)?;
    calculate(&scenario).map_err(translate_core_error)
}

/// Runs the calculation pipeline for a built-in example scenario.
///
/// # Arguments
///
/// * `name` - The preset name, matched case-insensitively.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if no preset has that name.
pub fn calculate_preset(name: &str) -> Result<CalculationResults, ApiError> {
    let preset: Scenario = preset_by_name(name).ok_or_else(|| ApiError::ResourceNotFound {
        resource_type: String::from("Preset"),
        message: format!("No preset named '{name}'"),
    })?;
    calculate(&preset).map_err(translate_core_error)
}

/// Validates a single field value in isolation.
///
/// Cross-field checks are not run; this mirrors on-input validation.
///
/// # Arguments
///
/// * `request` - The field, value, and current business type.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the field key or business type does
/// not parse.
pub fn validate_field_value(
    request: &ValidateFieldRequest,
) -> Result<ValidateFieldResponse, ApiError> {
    let field: ScenarioField =
        ScenarioField::from_str(&request.field).map_err(|err| ApiError::InvalidInput {
            field: String::from("field"),
            message: err.to_string(),
        })?;
    let business_type: BusinessType = parse_business_type(&request.business_type)?;

    Ok(ValidateFieldResponse {
        message: validate_field(field, request.value, business_type),
    })
}

/// Runs full validation for a stored scenario without calculating it.
///
/// # Arguments
///
/// * `catalog` - The scenario catalog.
/// * `scenario_id` - Identifier of the scenario to validate.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if no scenario with that identifier
/// exists.
pub fn validate_scenario_fields(
    catalog: &mut ScenarioCatalog,
    scenario_id: i64,
) -> Result<ValidateScenarioResponse, ApiError> {
    let scenario: Scenario = catalog
        .get(scenario_id)
        .map_err(translate_persistence_error)?;
    let errors: ValidationErrors = validate_scenario(&scenario);

    Ok(ValidateScenarioResponse {
        errors: errors.to_field_map(),
    })
}

/// Lists the built-in example scenarios.
#[must_use]
pub fn list_presets() -> ListPresetsResponse {
    let presets: Vec<PresetInfo> = preset_scenarios()
        .iter()
        .map(|preset| PresetInfo {
            name: preset.name.clone(),
            notes: preset.notes.clone(),
            business_type: String::from(preset.business_type.as_str()),
            developer_count: preset.developer_count,
            annual_cost_per_developer: preset.annual_cost_per_developer,
            cts_sw_improvement_percent: preset.cts_sw_improvement_percent,
            solution_cost: preset.solution_cost,
            revenue_percentage: preset.revenue_percentage,
        })
        .collect();

    ListPresetsResponse { presets }
}
