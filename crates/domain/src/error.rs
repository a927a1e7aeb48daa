// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while constructing or parsing domain values.
///
/// Numeric input problems are deliberately NOT represented here: the
/// validator reports those as data (see [`crate::ValidationErrors`]) rather
/// than as hard errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The business type string is not recognized.
    InvalidBusinessType(String),
    /// The organization size string is not recognized.
    InvalidOrganizationSize(String),
    /// The scenario field key is not recognized.
    InvalidFieldKey(String),
    /// The scenario name is empty or invalid.
    InvalidScenarioName(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBusinessType(value) => {
                write!(
                    f,
                    "Invalid business type: '{value}'. Must be 'traditional' or 'tech'"
                )
            }
            Self::InvalidOrganizationSize(value) => {
                write!(f, "Invalid organization size: '{value}'")
            }
            Self::InvalidFieldKey(value) => {
                write!(f, "Unknown scenario field: '{value}'")
            }
            Self::InvalidScenarioName(msg) => write!(f, "Invalid scenario name: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}
