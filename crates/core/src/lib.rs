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

mod calculator;
mod error;
mod format;
mod presets;
mod results;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use calculator::{
    BASELINE_PROFIT_MARGIN, calculate, calculate_tech_company, calculate_traditional_business,
};
pub use error::CoreError;
pub use format::{format_currency, format_number, format_percent};
pub use presets::{preset_by_name, preset_scenarios};
pub use results::{CalculationResults, CalculationStep, SupportingMetrics};
