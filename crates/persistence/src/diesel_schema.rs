// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

diesel::table! {
    scenarios (scenario_id) {
        scenario_id -> BigInt,
        name -> Text,
        notes -> Text,
        organization_size -> Nullable<Text>,
        business_type -> Text,
        developer_count -> Double,
        annual_cost_per_developer -> Double,
        cts_sw_improvement_percent -> Double,
        solution_cost -> Double,
        revenue_percentage -> Nullable<Double>,
        created_at -> Text,
        updated_at -> Text,
    }
}
