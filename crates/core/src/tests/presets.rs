// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use dx_roi_domain::{BusinessType, Scenario, validate_scenario};

use crate::calculator::calculate;
use crate::presets::{preset_by_name, preset_scenarios};

#[test]
fn test_presets_are_all_valid() {
    let presets: Vec<Scenario> = preset_scenarios();
    assert_eq!(presets.len(), 3);

    for preset in &presets {
        let errors = validate_scenario(preset);
        assert!(
            errors.is_empty(),
            "preset '{}' failed validation: {}",
            preset.name,
            errors.joined_messages()
        );
        assert!(preset.scenario_id.is_none());
    }
}

#[test]
fn test_presets_are_calculable() {
    for preset in preset_scenarios() {
        let results = calculate(&preset).expect("preset should calculate");
        let expected_steps: usize = match preset.business_type {
            BusinessType::Traditional => 3,
            BusinessType::Tech => 6,
        };
        assert_eq!(results.calculation_steps.len(), expected_steps);
    }
}

#[test]
fn test_preset_by_name_is_case_insensitive() {
    assert!(preset_by_name("Large bank").is_some());
    assert!(preset_by_name("large BANK").is_some());
    assert!(preset_by_name("saas platform").is_some());
}

#[test]
fn test_preset_by_name_unknown_returns_none() {
    assert!(preset_by_name("no such preset").is_none());
}
