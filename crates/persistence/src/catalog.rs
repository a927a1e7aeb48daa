// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use dx_roi_domain::Scenario;

use crate::error::PersistenceError;
use crate::{mutations, queries, sqlite};

/// The scenario catalog: an owned connection plus the CRUD operations.
///
/// Opening a catalog creates the schema if it does not exist yet.
pub struct ScenarioCatalog {
    conn: SqliteConnection,
}

impl ScenarioCatalog {
    /// Opens a catalog backed by a database file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the `SQLite` database file.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established or the
    /// schema cannot be created.
    pub fn open(path: &str) -> Result<Self, PersistenceError> {
        Ok(Self {
            conn: sqlite::connect_file(path)?,
        })
    }

    /// Opens a catalog backed by a private in-memory database.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established or the
    /// schema cannot be created.
    pub fn open_in_memory() -> Result<Self, PersistenceError> {
        Ok(Self {
            conn: sqlite::connect_in_memory()?,
        })
    }

    /// Inserts a scenario and returns the identifier the database assigned.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert(&mut self, scenario: &Scenario) -> Result<i64, PersistenceError> {
        mutations::insert_scenario(&mut self.conn, scenario)
    }

    /// Fetches a stored scenario by identifier.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::ScenarioNotFound` if no scenario with that
    /// identifier exists.
    pub fn get(&mut self, scenario_id: i64) -> Result<Scenario, PersistenceError> {
        queries::get_scenario(&mut self.conn, scenario_id)
    }

    /// Lists all stored scenarios, ordered by identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list(&mut self) -> Result<Vec<Scenario>, PersistenceError> {
        queries::list_scenarios(&mut self.conn)
    }

    /// Updates a stored scenario in place.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::MissingScenarioId` if the scenario has no
    /// `scenario_id`, and `PersistenceError::ScenarioNotFound` if no
    /// scenario with that identifier exists.
    pub fn update(&mut self, scenario: &Scenario) -> Result<(), PersistenceError> {
        mutations::update_scenario(&mut self.conn, scenario)
    }

    /// Deletes a stored scenario.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::ScenarioNotFound` if no scenario with that
    /// identifier exists.
    pub fn delete(&mut self, scenario_id: i64) -> Result<(), PersistenceError> {
        mutations::delete_scenario(&mut self.conn, scenario_id)
    }
}
