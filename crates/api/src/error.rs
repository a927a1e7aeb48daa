// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use dx_roi::CoreError;
use dx_roi_persistence::PersistenceError;
use thiserror::Error;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    #[error("Invalid input for '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// The scenario failed validation.
    #[error("Scenario validation failed: {message}")]
    ValidationFailed {
        /// The joined validation messages.
        message: String,
    },
    /// A requested resource was not found.
    #[error("{resource_type} not found: {message}")]
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    #[error("Internal error: {message}")]
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

/// Translates a core calculation error into an API error.
#[must_use]
pub fn translate_core_error(error: CoreError) -> ApiError {
    match error {
        CoreError::InvalidScenario { errors } => ApiError::ValidationFailed {
            message: errors.joined_messages(),
        },
        CoreError::MissingRevenuePercentage => ApiError::InvalidInput {
            field: String::from("revenuePercentage"),
            message: error.to_string(),
        },
    }
}

/// Translates a persistence error into an API error.
#[must_use]
pub fn translate_persistence_error(error: PersistenceError) -> ApiError {
    match error {
        PersistenceError::ScenarioNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Scenario"),
            message: format!("No scenario with id {id}"),
        },
        _ => ApiError::Internal {
            message: error.to_string(),
        },
    }
}
