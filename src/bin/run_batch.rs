//! Evaluate every scenario in a CSV file
//!
//! Usage: run_batch <scenarios.csv> [output.csv]
//!
//! Input columns: Scenario, MonthlyAudits, AuditUnitCost, MonthlyFrauds,
//! MonthlyFraudCost, AuditReductionPct, FraudReductionPct, UpfrontInvestment.
//! Writes one summary row per scenario (default: batch_output.csv).

use anyhow::{bail, Context, Result};
use business_case::{inputs::load_scenarios, report, CalculatorConfig, ScenarioRunner};
use std::env;
use std::fs::File;
use std::time::Instant;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let Some(input_path) = args.next() else {
        bail!("usage: run_batch <scenarios.csv> [output.csv]");
    };
    let output_path = args.next().unwrap_or_else(|| "batch_output.csv".to_string());

    let start = Instant::now();
    let scenarios = load_scenarios(&input_path)
        .with_context(|| format!("Failed to load scenarios from {}", input_path))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let config = CalculatorConfig::from_env();
    config.validate().context("Invalid configuration")?;
    let runner = ScenarioRunner::with_config(config);

    let run_start = Instant::now();
    let outcomes = runner.run_batch(&scenarios);
    println!("Evaluated in {:?}", run_start.elapsed());

    let file = File::create(&output_path)
        .with_context(|| format!("Failed to create {}", output_path))?;
    report::write_outcomes_csv(&outcomes, file)?;
    println!("Output written to {}", output_path);

    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    let no_payback = outcomes
        .iter()
        .filter_map(|o| o.result.as_ref().ok())
        .filter(|r| !r.savings.has_payback())
        .count();

    println!("\nBatch Summary:");
    println!("  Scenarios:        {}", outcomes.len());
    println!("  Invalid inputs:   {}", failed);
    println!("  Never pays back:  {}", no_payback);
    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}
