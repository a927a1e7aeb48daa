// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `SQLite`-specific connection utilities.
//!
//! This module is limited to connection initialization, schema creation,
//! and `SQLite`-specific workarounds (e.g., `last_insert_rowid()`). Domain
//! queries and mutations live in the `queries` and `mutations` modules and
//! use Diesel DSL only.

use diesel::connection::SimpleConnection;
use diesel::dsl::sql;
use diesel::sql_types::BigInt;
use diesel::{Connection, RunQueryDsl, SqliteConnection};
use tracing::info;

use crate::error::PersistenceError;

/// Schema for the scenario catalog.
///
/// Created with `IF NOT EXISTS` so opening an existing database is a no-op.
const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS scenarios (
    scenario_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    notes TEXT NOT NULL DEFAULT '',
    organization_size TEXT,
    business_type TEXT NOT NULL,
    developer_count DOUBLE NOT NULL,
    annual_cost_per_developer DOUBLE NOT NULL,
    cts_sw_improvement_percent DOUBLE NOT NULL,
    solution_cost DOUBLE NOT NULL,
    revenue_percentage DOUBLE,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
";

/// Opens a connection to a database file and prepares the schema.
///
/// # Arguments
///
/// * `path` - Path to the `SQLite` database file.
///
/// # Errors
///
/// Returns an error if the connection cannot be established or the schema
/// cannot be created.
pub fn connect_file(path: &str) -> Result<SqliteConnection, PersistenceError> {
    let mut conn: SqliteConnection = SqliteConnection::establish(path)?;
    initialize_schema(&mut conn)?;
    info!(path, "Opened scenario database");
    Ok(conn)
}

/// Opens an in-memory database and prepares the schema.
///
/// The database is private to the returned connection and is discarded when
/// the connection is dropped. Used for tests.
///
/// # Errors
///
/// Returns an error if the connection cannot be established or the schema
/// cannot be created.
pub fn connect_in_memory() -> Result<SqliteConnection, PersistenceError> {
    let mut conn: SqliteConnection = SqliteConnection::establish(":memory:")?;
    initialize_schema(&mut conn)?;
    Ok(conn)
}

/// Creates the schema if missing.
///
/// # Arguments
///
/// * `conn` - The database connection.
///
/// # Errors
///
/// Returns `PersistenceError::InitializationError` if the statements fail.
pub fn initialize_schema(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    conn.batch_execute(SCHEMA_SQL)
        .map_err(|err| PersistenceError::InitializationError(err.to_string()))?;
    Ok(())
}

/// Helper function to get the last inserted row ID.
///
/// `SQLite` doesn't support `RETURNING` clauses in all contexts,
/// so we must query `last_insert_rowid()`.
///
/// This is a justified use of raw SQL as Diesel has no direct API for this.
///
/// # Arguments
///
/// * `conn` - The database connection.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_last_insert_rowid(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    Ok(diesel::select(sql::<BigInt>("last_insert_rowid()")).get_result(conn)?)
}
