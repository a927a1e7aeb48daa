// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod error;
mod ranges;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use error::DomainError;
pub use ranges::{
    ANNUAL_COST_PER_DEVELOPER_RANGE, CTS_SW_IMPROVEMENT_PERCENT_RANGE, DEVELOPER_COUNT_RANGE,
    FieldRange, REVENUE_PERCENTAGE_RANGE, SOLUTION_COST_RANGE, ValidationRanges,
};
pub use types::{BusinessType, OrganizationSize, Scenario, ScenarioField};
pub use validation::{
    COST_RATIO_HIGH, COST_RATIO_NEGLIGIBLE, SMALL_TEAM_COST_CEILING, SMALL_TEAM_DEVELOPER_COUNT,
    SUSPECT_IMPROVEMENT_PERCENT, ValidationErrors, validate_field, validate_scenario,
    validate_scenario_name,
};
