// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use dx_roi_domain::ValidationErrors;

/// Errors that can occur when a calculation is requested.
///
/// Validation itself never fails; the engine is the sole component that
/// turns a non-empty validation mapping into a hard error, at the moment a
/// result is requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The scenario failed validation. Carries the full mapping so callers
    /// can surface per-field messages; `Display` joins them.
    InvalidScenario {
        /// The aggregated validation messages.
        errors: ValidationErrors,
    },
    /// A tech-company calculation was requested without a revenue
    /// percentage. Checked explicitly by the engine, on top of the
    /// validator's own required-field rule.
    MissingRevenuePercentage,
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidScenario { errors } => {
                write!(f, "Scenario validation failed: {}", errors.joined_messages())
            }
            Self::MissingRevenuePercentage => {
                write!(f, "Revenue percentage is required for tech company calculations")
            }
        }
    }
}

impl std::error::Error for CoreError {}
