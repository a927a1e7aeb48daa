// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Command-line interface for the DX ROI Calculator.
//!
//! Manages the local scenario catalog and runs the calculation engine,
//! printing either a human-readable breakdown or JSON.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::Result;
use color_eyre::eyre::eyre;
use dx_roi::{CalculationResults, format_currency, format_number, format_percent};
use dx_roi_api::{
    CreateScenarioRequest, ListPresetsResponse, ListScenariosResponse, ScenarioInfo,
    UpdateScenarioRequest, ValidateFieldRequest, ValidateFieldResponse, ValidateScenarioResponse,
    calculate_preset, calculate_scenario, create_scenario, delete_scenario, get_scenario,
    list_presets, list_scenarios, update_scenario, validate_field_value, validate_scenario_fields,
};
use dx_roi_persistence::ScenarioCatalog;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    match args.run() {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(1);
        }
    }
    Ok(())
}

/// DX ROI Calculator - developer experience investment modeling
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Path to the `SQLite` database file.
    #[arg(short, long, default_value = "dx-roi.sqlite3")]
    database: String,

    /// Print results as JSON instead of human-readable text.
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    fn run(self) -> Result<()> {
        self.command.run(&self.database, self.json)
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Add a scenario to the catalog
    Add {
        /// The scenario name
        name: String,
        /// Free-form notes
        #[arg(long, default_value = "")]
        notes: String,
        /// Organization size (startup, small, medium, large, enterprise)
        #[arg(long)]
        organization_size: Option<String>,
        /// Business type (traditional or tech)
        #[arg(long, default_value = "traditional")]
        business_type: String,
        /// Number of developers
        #[arg(long)]
        developers: f64,
        /// Fully loaded annual cost per developer, in dollars
        #[arg(long)]
        cost_per_developer: f64,
        /// Expected cost-to-serve improvement, in percentage points
        #[arg(long)]
        improvement_percent: f64,
        /// Annual solution cost, in dollars
        #[arg(long)]
        solution_cost: f64,
        /// Share of revenue driven by development (tech only)
        #[arg(long)]
        revenue_percentage: Option<f64>,
    },
    /// List all stored scenarios
    List,
    /// Show a stored scenario
    Show {
        /// The scenario identifier
        id: i64,
    },
    /// Update a stored scenario; omitted options keep their current value
    Update {
        /// The scenario identifier
        id: i64,
        /// The scenario name
        #[arg(long)]
        name: Option<String>,
        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
        /// Organization size (startup, small, medium, large, enterprise)
        #[arg(long)]
        organization_size: Option<String>,
        /// Business type (traditional or tech)
        #[arg(long)]
        business_type: Option<String>,
        /// Number of developers
        #[arg(long)]
        developers: Option<f64>,
        /// Fully loaded annual cost per developer, in dollars
        #[arg(long)]
        cost_per_developer: Option<f64>,
        /// Expected cost-to-serve improvement, in percentage points
        #[arg(long)]
        improvement_percent: Option<f64>,
        /// Annual solution cost, in dollars
        #[arg(long)]
        solution_cost: Option<f64>,
        /// Share of revenue driven by development (tech only)
        #[arg(long)]
        revenue_percentage: Option<f64>,
    },
    /// Delete a stored scenario
    Delete {
        /// The scenario identifier
        id: i64,
    },
    /// Calculate ROI for a stored scenario or a preset
    Calculate {
        /// The scenario identifier
        #[arg(long, conflicts_with = "preset")]
        id: Option<i64>,
        /// A preset name (see `presets`)
        #[arg(long)]
        preset: Option<String>,
    },
    /// List the built-in example scenarios
    Presets,
    /// Validate a stored scenario, or a single field value
    Check {
        /// The scenario identifier to validate in full
        #[arg(long, conflicts_with_all = ["field", "value"])]
        id: Option<i64>,
        /// A single field key to validate (e.g. developerCount)
        #[arg(long)]
        field: Option<String>,
        /// The value for the field; omit to simulate empty input
        #[arg(long)]
        value: Option<f64>,
        /// Business type the field is validated under
        #[arg(long, default_value = "traditional")]
        business_type: String,
    },
}

impl Command {
    #[allow(clippy::too_many_lines)]
    fn run(self, database: &str, json: bool) -> Result<()> {
        match self {
            Self::Add {
                name,
                notes,
                organization_size,
                business_type,
                developers,
                cost_per_developer,
                improvement_percent,
                solution_cost,
                revenue_percentage,
            } => {
                let mut catalog: ScenarioCatalog = ScenarioCatalog::open(database)?;
                let request: CreateScenarioRequest = CreateScenarioRequest {
                    name,
                    notes,
                    organization_size,
                    business_type,
                    developer_count: developers,
                    annual_cost_per_developer: cost_per_developer,
                    cts_sw_improvement_percent: improvement_percent,
                    solution_cost,
                    revenue_percentage,
                };
                let response = create_scenario(&mut catalog, &request)?;
                if json {
                    println!("{}", serde_json::to_string_pretty(&response)?);
                } else {
                    println!("{} (id {})", response.message, response.scenario_id);
                }
                Ok(())
            }
            Self::List => {
                let mut catalog: ScenarioCatalog = ScenarioCatalog::open(database)?;
                let response: ListScenariosResponse = list_scenarios(&mut catalog)?;
                if json {
                    println!("{}", serde_json::to_string_pretty(&response)?);
                } else if response.scenarios.is_empty() {
                    println!("No stored scenarios");
                } else {
                    for scenario in &response.scenarios {
                        println!(
                            "{:>4}  {:<30} {:<12} {} developers",
                            scenario.scenario_id,
                            scenario.name,
                            scenario.business_type,
                            format_number(scenario.developer_count)
                        );
                    }
                }
                Ok(())
            }
            Self::Show { id } => {
                let mut catalog: ScenarioCatalog = ScenarioCatalog::open(database)?;
                let scenario: ScenarioInfo = get_scenario(&mut catalog, id)?;
                if json {
                    println!("{}", serde_json::to_string_pretty(&scenario)?);
                } else {
                    print_scenario(&scenario);
                }
                Ok(())
            }
            Self::Update {
                id,
                name,
                notes,
                organization_size,
                business_type,
                developers,
                cost_per_developer,
                improvement_percent,
                solution_cost,
                revenue_percentage,
            } => {
                let mut catalog: ScenarioCatalog = ScenarioCatalog::open(database)?;
                let existing: ScenarioInfo = get_scenario(&mut catalog, id)?;
                let request: UpdateScenarioRequest = UpdateScenarioRequest {
                    scenario_id: id,
                    name: name.unwrap_or(existing.name),
                    notes: notes.unwrap_or(existing.notes),
                    organization_size: organization_size.or(existing.organization_size),
                    business_type: business_type.unwrap_or(existing.business_type),
                    developer_count: developers.unwrap_or(existing.developer_count),
                    annual_cost_per_developer: cost_per_developer
                        .unwrap_or(existing.annual_cost_per_developer),
                    cts_sw_improvement_percent: improvement_percent
                        .unwrap_or(existing.cts_sw_improvement_percent),
                    solution_cost: solution_cost.unwrap_or(existing.solution_cost),
                    revenue_percentage: revenue_percentage.or(existing.revenue_percentage),
                };
                let response = update_scenario(&mut catalog, &request)?;
                if json {
                    println!("{}", serde_json::to_string_pretty(&response)?);
                } else {
                    println!("{}", response.message);
                }
                Ok(())
            }
            Self::Delete { id } => {
                let mut catalog: ScenarioCatalog = ScenarioCatalog::open(database)?;
                let response = delete_scenario(&mut catalog, id)?;
                if json {
                    println!("{}", serde_json::to_string_pretty(&response)?);
                } else {
                    println!("{}", response.message);
                }
                Ok(())
            }
            Self::Calculate { id, preset } => {
                let results: CalculationResults = match (id, preset) {
                    (Some(id), None) => {
                        let mut catalog: ScenarioCatalog = ScenarioCatalog::open(database)?;
                        calculate_scenario(&mut catalog, id)?
                    }
                    (None, Some(name)) => calculate_preset(&name)?,
                    _ => return Err(eyre!("Provide exactly one of --id or --preset")),
                };
                if json {
                    println!("{}", serde_json::to_string_pretty(&results)?);
                } else {
                    print_results(&results);
                }
                Ok(())
            }
            Self::Presets => {
                let response: ListPresetsResponse = list_presets();
                if json {
                    println!("{}", serde_json::to_string_pretty(&response)?);
                } else {
                    for preset in &response.presets {
                        println!("{:<16} {:<12} {}", preset.name, preset.business_type, preset.notes);
                    }
                }
                Ok(())
            }
            Self::Check {
                id,
                field,
                value,
                business_type,
            } => match (id, field) {
                (Some(id), None) => {
                    let mut catalog: ScenarioCatalog = ScenarioCatalog::open(database)?;
                    let response: ValidateScenarioResponse =
                        validate_scenario_fields(&mut catalog, id)?;
                    if json {
                        println!("{}", serde_json::to_string_pretty(&response)?);
                    } else if response.errors.is_empty() {
                        println!("Scenario {id} is valid");
                    } else {
                        for (key, message) in &response.errors {
                            println!("{key}: {message}");
                        }
                    }
                    Ok(())
                }
                (None, Some(field)) => {
                    let request: ValidateFieldRequest = ValidateFieldRequest {
                        field,
                        value,
                        business_type,
                    };
                    let response: ValidateFieldResponse = validate_field_value(&request)?;
                    if json {
                        println!("{}", serde_json::to_string_pretty(&response)?);
                    } else {
                        match &response.message {
                            Some(message) => println!("{message}"),
                            None => println!("OK"),
                        }
                    }
                    Ok(())
                }
                _ => Err(eyre!("Provide exactly one of --id or --field")),
            },
        }
    }
}

fn print_scenario(scenario: &ScenarioInfo) {
    println!("Scenario {}: {}", scenario.scenario_id, scenario.name);
    if !scenario.notes.is_empty() {
        println!("  {}", scenario.notes);
    }
    println!("  Business type:        {}", scenario.business_type);
    if let Some(size) = &scenario.organization_size {
        println!("  Organization size:    {size}");
    }
    println!(
        "  Developers:           {}",
        format_number(scenario.developer_count)
    );
    println!(
        "  Cost per developer:   {}",
        format_currency(scenario.annual_cost_per_developer)
    );
    println!(
        "  CTS-SW improvement:   {}",
        format_percent(scenario.cts_sw_improvement_percent)
    );
    println!(
        "  Solution cost:        {}",
        format_currency(scenario.solution_cost)
    );
    if let Some(revenue) = scenario.revenue_percentage {
        println!("  Revenue percentage:   {}", format_percent(revenue));
    }
    println!("  Created:              {}", scenario.created_at);
    println!("  Updated:              {}", scenario.updated_at);
}

fn print_results(results: &CalculationResults) {
    for step in &results.calculation_steps {
        println!("Step {}: {}", step.step, step.description);
        println!("  {}", step.formula);
        println!("  {}", step.calculation);
        println!("  {}", step.explanation);
        println!();
    }
    println!(
        "Total developer cost:  {}",
        format_currency(results.total_developer_cost)
    );
    println!(
        "Cost avoidance:        {}",
        format_currency(results.cost_avoidance)
    );
    println!(
        "ROI:                   {}x ({})",
        format_number(results.roi_multiple),
        format_percent(results.roi_percentage)
    );
    if let Some(margin) = results.gross_margin_improvement {
        println!("Gross margin gain:     {}", format_currency(margin));
    }
    if let Some(impact) = results.profit_impact {
        println!("Profit impact:         {}", format_currency(impact));
    }
    if let Some(boost) = results.profit_boost_percentage {
        println!("Profit boost:          {}", format_percent(boost));
    }
}
