//! Business Case Calculator CLI
//!
//! Evaluates one fraud-prevention business case and prints the results.
//! Unset flags fall back to the configured defaults (see `config`).

use anyhow::{Context, Result};
use business_case::{
    report::{render_text, write_projection_csv, ReportEnvelope},
    BusinessCaseInputs, CalculatorConfig, ScenarioRunner,
};
use clap::Parser;
use std::fs::File;
use std::path::PathBuf;

/// Fraud prevention business case: savings, payback and ROI projection
#[derive(Parser, Debug)]
#[command(name = "business_case", version, about)]
struct Args {
    /// Manual audits performed per month
    #[arg(long)]
    monthly_audits: Option<f64>,

    /// Average cost per manual audit (USD)
    #[arg(long)]
    audit_unit_cost: Option<f64>,

    /// Fraud cases detected per month
    #[arg(long)]
    monthly_frauds: Option<f64>,

    /// Total monthly cost of fraud (USD)
    #[arg(long)]
    monthly_fraud_cost: Option<f64>,

    /// Expected reduction in manual audits (%, 0-100)
    #[arg(long)]
    audit_reduction_pct: Option<f64>,

    /// Expected reduction in fraud (%, 0-100)
    #[arg(long)]
    fraud_reduction_pct: Option<f64>,

    /// Estimated implementation cost (USD)
    #[arg(long)]
    upfront_investment: Option<f64>,

    /// Months to project
    #[arg(long)]
    horizon_months: Option<u32>,

    /// Print the full report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Write the monthly projection to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

impl Args {
    fn inputs(&self, defaults: &BusinessCaseInputs) -> BusinessCaseInputs {
        BusinessCaseInputs::from_percentages(
            self.monthly_audits.unwrap_or(defaults.monthly_audits),
            self.audit_unit_cost.unwrap_or(defaults.audit_unit_cost),
            self.monthly_frauds.unwrap_or(defaults.monthly_frauds),
            self.monthly_fraud_cost.unwrap_or(defaults.monthly_fraud_cost),
            self.audit_reduction_pct.unwrap_or_else(|| defaults.audit_reduction_pct()),
            self.fraud_reduction_pct.unwrap_or_else(|| defaults.fraud_reduction_pct()),
            self.upfront_investment.unwrap_or(defaults.upfront_investment),
        )
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = CalculatorConfig::from_env();
    if let Some(horizon) = args.horizon_months {
        config.horizon_months = horizon;
    }
    config.validate().context("Invalid configuration")?;

    let inputs = args.inputs(&config.default_inputs);
    let runner = ScenarioRunner::with_config(config);
    let report = runner.run(&inputs).context("Could not evaluate business case")?;

    if let (Some(path), Some(projection)) = (&args.csv, &report.projection) {
        let file = File::create(path)
            .with_context(|| format!("Unable to create {}", path.display()))?;
        write_projection_csv(projection, file)?;
        log::info!("Projection written to {}", path.display());
    } else if let Some(path) = &args.csv {
        log::warn!("No projection generated; {} not written", path.display());
    }

    if args.json {
        println!("{}", ReportEnvelope::new(report).to_json()?);
    } else {
        print!("{}", render_text(&report));
    }

    Ok(())
}
