// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_invalid_business_type_display() {
    let error: DomainError = DomainError::InvalidBusinessType(String::from("coop"));
    assert_eq!(
        error.to_string(),
        "Invalid business type: 'coop'. Must be 'traditional' or 'tech'"
    );
}

#[test]
fn test_invalid_organization_size_display() {
    let error: DomainError = DomainError::InvalidOrganizationSize(String::from("huge"));
    assert_eq!(error.to_string(), "Invalid organization size: 'huge'");
}

#[test]
fn test_invalid_field_key_display() {
    let error: DomainError = DomainError::InvalidFieldKey(String::from("velocity"));
    assert_eq!(error.to_string(), "Unknown scenario field: 'velocity'");
}

#[test]
fn test_invalid_scenario_name_display() {
    let error: DomainError = DomainError::InvalidScenarioName(String::from("name cannot be empty"));
    assert_eq!(
        error.to_string(),
        "Invalid scenario name: name cannot be empty"
    );
}
