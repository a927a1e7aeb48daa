// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use dx_roi_domain::{BusinessType, OrganizationSize, Scenario};

/// Returns the built-in example scenarios.
///
/// Each preset is a fully valid scenario that can be calculated as-is or
/// used as a starting point for a stored scenario. None of them carry a
/// persisted identifier.
#[must_use]
pub fn preset_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new(
            String::from("Large bank"),
            String::from("Retail bank with a large in-house engineering organization."),
            Some(OrganizationSize::Enterprise),
            BusinessType::Traditional,
            1_000.0,
            130_000.0,
            15.0,
            2_000_000.0,
            None,
            String::new(),
            String::new(),
        ),
        Scenario::new(
            String::from("SaaS platform"),
            String::from("Product company where development drives most of the revenue."),
            Some(OrganizationSize::Large),
            BusinessType::Tech,
            400.0,
            150_000.0,
            15.0,
            1_000_000.0,
            Some(60.0),
            String::new(),
            String::new(),
        ),
        Scenario::new(
            String::from("Growth startup"),
            String::from("Small engineering team evaluating its first platform investment."),
            Some(OrganizationSize::Startup),
            BusinessType::Tech,
            40.0,
            120_000.0,
            10.0,
            50_000.0,
            Some(80.0),
            String::new(),
            String::new(),
        ),
    ]
}

/// Looks up a preset scenario by name, case-insensitively.
///
/// # Arguments
///
/// * `name` - The preset name to look up.
///
/// # Returns
///
/// The matching preset, or `None` when no preset has that name.
#[must_use]
pub fn preset_by_name(name: &str) -> Option<Scenario> {
    preset_scenarios()
        .into_iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name))
}
