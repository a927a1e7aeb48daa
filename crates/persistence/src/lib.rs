// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the DX ROI Calculator.
//!
//! This crate stores the scenario catalog in a local `SQLite` database via
//! Diesel. The database holds a single `scenarios` table; the schema is
//! created on first connection and connections are opened either against a
//! file or in memory (for tests).
//!
//! Stored scenarios are persisted exactly as given. Validation is a domain
//! concern and calculation is a core concern; this crate never inspects
//! field values beyond converting them to and from rows.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod catalog;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod sqlite;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use catalog::ScenarioCatalog;
pub use error::PersistenceError;
pub use mutations::{delete_scenario, insert_scenario, update_scenario};
pub use queries::{get_scenario, list_scenarios};
pub use sqlite::{connect_file, connect_in_memory, get_last_insert_rowid, initialize_schema};
