// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use dx_roi_domain::{BusinessType, OrganizationSize, Scenario};

use crate::diesel_schema::scenarios;
use crate::error::PersistenceError;

/// A scenario row as read from the database.
#[derive(Debug, Clone, Queryable)]
pub struct ScenarioRow {
    pub scenario_id: i64,
    pub name: String,
    pub notes: String,
    pub organization_size: Option<String>,
    pub business_type: String,
    pub developer_count: f64,
    pub annual_cost_per_developer: f64,
    pub cts_sw_improvement_percent: f64,
    pub solution_cost: f64,
    pub revenue_percentage: Option<f64>,
    pub created_at: String,
    pub updated_at: String,
}

impl ScenarioRow {
    /// Converts this row into a domain `Scenario`.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::InvalidStoredValue` if the stored business
    /// type or organization size is not a recognized enum value.
    pub fn into_scenario(self) -> Result<Scenario, PersistenceError> {
        let business_type: BusinessType = self
            .business_type
            .parse()
            .map_err(|err: dx_roi_domain::DomainError| {
                PersistenceError::InvalidStoredValue(err.to_string())
            })?;
        let organization_size: Option<OrganizationSize> = match self.organization_size {
            Some(value) => Some(value.parse().map_err(
                |err: dx_roi_domain::DomainError| {
                    PersistenceError::InvalidStoredValue(err.to_string())
                },
            )?),
            None => None,
        };

        Ok(Scenario::with_id(
            self.scenario_id,
            self.name,
            self.notes,
            organization_size,
            business_type,
            self.developer_count,
            self.annual_cost_per_developer,
            self.cts_sw_improvement_percent,
            self.solution_cost,
            self.revenue_percentage,
            self.created_at,
            self.updated_at,
        ))
    }
}

/// A scenario row to be inserted, without a `scenario_id`.
///
/// The database assigns the identifier.
#[derive(Debug, Insertable)]
#[diesel(table_name = scenarios)]
pub struct NewScenarioRow<'a> {
    pub name: &'a str,
    pub notes: &'a str,
    pub organization_size: Option<&'a str>,
    pub business_type: &'a str,
    pub developer_count: f64,
    pub annual_cost_per_developer: f64,
    pub cts_sw_improvement_percent: f64,
    pub solution_cost: f64,
    pub revenue_percentage: Option<f64>,
    pub created_at: &'a str,
    pub updated_at: &'a str,
}

impl<'a> NewScenarioRow<'a> {
    /// Builds an insertable row from a domain `Scenario`, ignoring any
    /// `scenario_id` it may carry.
    #[must_use]
    pub fn from_scenario(scenario: &'a Scenario) -> Self {
        Self {
            name: &scenario.name,
            notes: &scenario.notes,
            organization_size: scenario.organization_size.map(|size| size.as_str()),
            business_type: scenario.business_type.as_str(),
            developer_count: scenario.developer_count,
            annual_cost_per_developer: scenario.annual_cost_per_developer,
            cts_sw_improvement_percent: scenario.cts_sw_improvement_percent,
            solution_cost: scenario.solution_cost,
            revenue_percentage: scenario.revenue_percentage,
            created_at: &scenario.created_at,
            updated_at: &scenario.updated_at,
        }
    }
}
