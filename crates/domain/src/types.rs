// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Selects which formula pipeline the calculation engine applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BusinessType {
    /// Software supports, but is not, the primary revenue-generating product.
    #[default]
    Traditional,
    /// Software development directly drives a defined percentage of revenue.
    Tech,
}

impl FromStr for BusinessType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "traditional" => Ok(Self::Traditional),
            "tech" => Ok(Self::Tech),
            _ => Err(DomainError::InvalidBusinessType(s.to_string())),
        }
    }
}

impl std::fmt::Display for BusinessType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl BusinessType {
    /// Converts this business type to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Traditional => "traditional",
            Self::Tech => "tech",
        }
    }
}

/// Coarse organization size bucket.
///
/// Bookkeeping only: carried on scenarios for display and cataloguing, never
/// read by the validator or the calculation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrganizationSize {
    /// Fewer than 50 employees.
    Startup,
    /// 50 to 500 employees.
    Small,
    /// 500 to 5,000 employees.
    Medium,
    /// 5,000 to 50,000 employees.
    Large,
    /// More than 50,000 employees.
    Enterprise,
}

impl FromStr for OrganizationSize {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "startup" => Ok(Self::Startup),
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            "enterprise" => Ok(Self::Enterprise),
            _ => Err(DomainError::InvalidOrganizationSize(s.to_string())),
        }
    }
}

impl std::fmt::Display for OrganizationSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl OrganizationSize {
    /// Converts this organization size to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Startup => "startup",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Enterprise => "enterprise",
        }
    }
}

/// Identifies a validated scenario input field.
///
/// The `Ord` derive follows declaration order, which fixes the order in
/// which aggregated validation messages are reported. `General` is the
/// synthetic key used by cross-field heuristics that do not belong to a
/// single input.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ScenarioField {
    /// Number of developers in the organization.
    DeveloperCount,
    /// Fully loaded annual cost per developer.
    AnnualCostPerDeveloper,
    /// Expected CTS-SW improvement, in percentage points.
    CtsSwImprovementPercent,
    /// One-time cost of the developer-experience investment.
    SolutionCost,
    /// Percentage of revenue driven by software (tech companies only).
    RevenuePercentage,
    /// Synthetic key for cross-field warnings.
    General,
}

impl FromStr for ScenarioField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "developerCount" => Ok(Self::DeveloperCount),
            "annualCostPerDeveloper" => Ok(Self::AnnualCostPerDeveloper),
            "ctsSwImprovementPercent" => Ok(Self::CtsSwImprovementPercent),
            "solutionCost" => Ok(Self::SolutionCost),
            "revenuePercentage" => Ok(Self::RevenuePercentage),
            "general" => Ok(Self::General),
            _ => Err(DomainError::InvalidFieldKey(s.to_string())),
        }
    }
}

impl std::fmt::Display for ScenarioField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ScenarioField {
    /// Returns the field key as consumed and produced by callers (forms,
    /// storage, exports).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DeveloperCount => "developerCount",
            Self::AnnualCostPerDeveloper => "annualCostPerDeveloper",
            Self::CtsSwImprovementPercent => "ctsSwImprovementPercent",
            Self::SolutionCost => "solutionCost",
            Self::RevenuePercentage => "revenuePercentage",
            Self::General => "general",
        }
    }

    /// Returns the human-readable field name used in validation messages.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::DeveloperCount => "Developer count",
            Self::AnnualCostPerDeveloper => "Annual cost per developer",
            Self::CtsSwImprovementPercent => "CTS-SW improvement percentage",
            Self::SolutionCost => "Solution cost",
            Self::RevenuePercentage => "Revenue percentage",
            Self::General => "General",
        }
    }
}

/// A named set of calculation inputs.
///
/// A `Scenario` is an immutable value for the duration of one calculation;
/// the validator and the calculation engine never mutate it. `scenario_id`
/// is the canonical identifier assigned by the persistence layer; `None`
/// indicates the scenario has not been persisted yet.
///
/// Numeric inputs are `f64` on purpose: values arrive from forms and stored
/// catalogs, and the validation contract must be able to report non-finite
/// and non-integer values instead of rejecting them at construction time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Canonical identifier assigned by the persistence layer.
    pub scenario_id: Option<i64>,
    /// Display name for the catalog.
    pub name: String,
    /// Free-form notes. Opaque to the calculation engine.
    pub notes: String,
    /// Organization size bucket. Opaque to the calculation engine.
    pub organization_size: Option<OrganizationSize>,
    /// Selects the formula pipeline.
    pub business_type: BusinessType,
    /// Number of developers. Must be a whole number within range.
    pub developer_count: f64,
    /// Fully loaded annual cost per developer, in currency units.
    pub annual_cost_per_developer: f64,
    /// Expected CTS-SW improvement, in percentage points (0-100 scale).
    pub cts_sw_improvement_percent: f64,
    /// One-time solution cost, in currency units.
    pub solution_cost: f64,
    /// Percentage of revenue driven by software.
    /// Meaningful iff `business_type` is [`BusinessType::Tech`].
    pub revenue_percentage: Option<f64>,
    /// Creation timestamp (RFC 3339). Opaque to the calculation engine.
    pub created_at: String,
    /// Last-update timestamp (RFC 3339). Opaque to the calculation engine.
    pub updated_at: String,
}

impl Scenario {
    /// Creates a new `Scenario` without a persisted `scenario_id`.
    ///
    /// The `scenario_id` will be assigned by the persistence layer upon
    /// first save.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        name: String,
        notes: String,
        organization_size: Option<OrganizationSize>,
        business_type: BusinessType,
        developer_count: f64,
        annual_cost_per_developer: f64,
        cts_sw_improvement_percent: f64,
        solution_cost: f64,
        revenue_percentage: Option<f64>,
        created_at: String,
        updated_at: String,
    ) -> Self {
        Self {
            scenario_id: None,
            name,
            notes,
            organization_size,
            business_type,
            developer_count,
            annual_cost_per_developer,
            cts_sw_improvement_percent,
            solution_cost,
            revenue_percentage,
            created_at,
            updated_at,
        }
    }

    /// Creates a `Scenario` with an existing `scenario_id` (from persistence).
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn with_id(
        scenario_id: i64,
        name: String,
        notes: String,
        organization_size: Option<OrganizationSize>,
        business_type: BusinessType,
        developer_count: f64,
        annual_cost_per_developer: f64,
        cts_sw_improvement_percent: f64,
        solution_cost: f64,
        revenue_percentage: Option<f64>,
        created_at: String,
        updated_at: String,
    ) -> Self {
        Self {
            scenario_id: Some(scenario_id),
            name,
            notes,
            organization_size,
            business_type,
            developer_count,
            annual_cost_per_developer,
            cts_sw_improvement_percent,
            solution_cost,
            revenue_percentage,
            created_at,
            updated_at,
        }
    }
}
