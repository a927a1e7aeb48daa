// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Scenario catalog mutations.
//!
//! All mutations use Diesel DSL against the `scenarios` table.

use diesel::prelude::*;
use diesel::SqliteConnection;
use dx_roi_domain::Scenario;
use tracing::debug;

use crate::data_models::NewScenarioRow;
use crate::diesel_schema::scenarios;
use crate::error::PersistenceError;
use crate::sqlite::get_last_insert_rowid;

/// Inserts a scenario and returns the identifier the database assigned.
///
/// Any `scenario_id` already on the scenario is ignored.
///
/// # Arguments
///
/// * `conn` - The database connection.
/// * `scenario` - The scenario to insert.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_scenario(
    conn: &mut SqliteConnection,
    scenario: &Scenario,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(scenarios::table)
        .values(NewScenarioRow::from_scenario(scenario))
        .execute(conn)?;

    let scenario_id: i64 = get_last_insert_rowid(conn)?;
    debug!(scenario_id, name = %scenario.name, "Inserted scenario");
    Ok(scenario_id)
}

/// Updates a stored scenario in place.
///
/// # Arguments
///
/// * `conn` - The database connection.
/// * `scenario` - The scenario to update; must carry a `scenario_id`.
///
/// # Errors
///
/// Returns `PersistenceError::MissingScenarioId` if the scenario has no
/// `scenario_id`, and `PersistenceError::ScenarioNotFound` if no row with
/// that identifier exists.
pub fn update_scenario(
    conn: &mut SqliteConnection,
    scenario: &Scenario,
) -> Result<(), PersistenceError> {
    let scenario_id: i64 = scenario
        .scenario_id
        .ok_or(PersistenceError::MissingScenarioId)?;

    let updated: usize = diesel::update(scenarios::table.find(scenario_id))
        .set((
            scenarios::name.eq(&scenario.name),
            scenarios::notes.eq(&scenario.notes),
            scenarios::organization_size.eq(scenario.organization_size.map(|size| size.as_str())),
            scenarios::business_type.eq(scenario.business_type.as_str()),
            scenarios::developer_count.eq(scenario.developer_count),
            scenarios::annual_cost_per_developer.eq(scenario.annual_cost_per_developer),
            scenarios::cts_sw_improvement_percent.eq(scenario.cts_sw_improvement_percent),
            scenarios::solution_cost.eq(scenario.solution_cost),
            scenarios::revenue_percentage.eq(scenario.revenue_percentage),
            scenarios::created_at.eq(&scenario.created_at),
            scenarios::updated_at.eq(&scenario.updated_at),
        ))
        .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::ScenarioNotFound(scenario_id));
    }

    debug!(scenario_id, "Updated scenario");
    Ok(())
}

/// Deletes a stored scenario.
///
/// # Arguments
///
/// * `conn` - The database connection.
/// * `scenario_id` - Identifier of the scenario to delete.
///
/// # Errors
///
/// Returns `PersistenceError::ScenarioNotFound` if no row with that
/// identifier exists.
pub fn delete_scenario(
    conn: &mut SqliteConnection,
    scenario_id: i64,
) -> Result<(), PersistenceError> {
    let deleted: usize = diesel::delete(scenarios::table.find(scenario_id)).execute(conn)?;

    if deleted == 0 {
        return Err(PersistenceError::ScenarioNotFound(scenario_id));
    }

    debug!(scenario_id, "Deleted scenario");
    Ok(())
}
