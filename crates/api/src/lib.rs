// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the DX ROI Calculator.
//!
//! Handlers in this crate sit between callers (the CLI, or any future
//! frontend) and the domain, core, and persistence crates. They translate
//! request DTOs into domain values, attach timestamps, drive the catalog
//! and the calculation engine, and translate lower-level errors into the
//! API contract.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use error::{ApiError, translate_core_error, translate_persistence_error};
pub use handlers::{
    calculate_preset, calculate_scenario, create_scenario, delete_scenario, get_scenario,
    list_presets, list_scenarios, update_scenario, validate_field_value, validate_scenario_fields,
};
pub use request_response::{
    CreateScenarioRequest, CreateScenarioResponse, DeleteScenarioResponse, ListPresetsResponse,
    ListScenariosResponse, PresetInfo, ScenarioInfo, UpdateScenarioRequest,
    UpdateScenarioResponse, ValidateFieldRequest, ValidateFieldResponse, ValidateScenarioResponse,
};
