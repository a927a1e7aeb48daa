// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Scenario catalog queries.
//!
//! All queries use Diesel DSL against the `scenarios` table.

use diesel::prelude::*;
use diesel::SqliteConnection;
use dx_roi_domain::Scenario;

use crate::data_models::ScenarioRow;
use crate::diesel_schema::scenarios;
use crate::error::PersistenceError;

/// Fetches a stored scenario by identifier.
///
/// # Arguments
///
/// * `conn` - The database connection.
/// * `scenario_id` - Identifier of the scenario to fetch.
///
/// # Errors
///
/// Returns `PersistenceError::ScenarioNotFound` if no row with that
/// identifier exists, or `PersistenceError::InvalidStoredValue` if a stored
/// enum column cannot be converted back to a domain value.
pub fn get_scenario(
    conn: &mut SqliteConnection,
    scenario_id: i64,
) -> Result<Scenario, PersistenceError> {
    let row: ScenarioRow = scenarios::table
        .find(scenario_id)
        .first::<ScenarioRow>(conn)
        .optional()?
        .ok_or(PersistenceError::ScenarioNotFound(scenario_id))?;

    row.into_scenario()
}

/// Lists all stored scenarios, ordered by identifier.
///
/// # Arguments
///
/// * `conn` - The database connection.
///
/// # Errors
///
/// Returns an error if the query fails or a stored enum column cannot be
/// converted back to a domain value.
pub fn list_scenarios(conn: &mut SqliteConnection) -> Result<Vec<Scenario>, PersistenceError> {
    let rows: Vec<ScenarioRow> = scenarios::table
        .order(scenarios::scenario_id.asc())
        .load::<ScenarioRow>(conn)?;

    rows.into_iter().map(ScenarioRow::into_scenario).collect()
}
