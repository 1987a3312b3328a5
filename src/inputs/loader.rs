//! Load named scenarios from a CSV file

use super::BusinessCaseInputs;
use crate::error::CalculatorResult;
use csv::Reader;
use std::path::Path;

/// A named set of inputs, one per CSV row
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub name: String,
    pub inputs: BusinessCaseInputs,
}

/// Raw CSV row. Reduction columns are 0-100 percentages, as on the input form.
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Scenario")]
    scenario: String,
    #[serde(rename = "MonthlyAudits")]
    monthly_audits: f64,
    #[serde(rename = "AuditUnitCost")]
    audit_unit_cost: f64,
    #[serde(rename = "MonthlyFrauds")]
    monthly_frauds: f64,
    #[serde(rename = "MonthlyFraudCost")]
    monthly_fraud_cost: f64,
    #[serde(rename = "AuditReductionPct")]
    audit_reduction_pct: f64,
    #[serde(rename = "FraudReductionPct")]
    fraud_reduction_pct: f64,
    #[serde(rename = "UpfrontInvestment")]
    upfront_investment: f64,
}

impl CsvRow {
    fn into_scenario(self) -> Scenario {
        Scenario {
            name: self.scenario,
            inputs: BusinessCaseInputs::from_percentages(
                self.monthly_audits,
                self.audit_unit_cost,
                self.monthly_frauds,
                self.monthly_fraud_cost,
                self.audit_reduction_pct,
                self.fraud_reduction_pct,
                self.upfront_investment,
            ),
        }
    }
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> CalculatorResult<Vec<Scenario>> {
    let reader = Reader::from_path(path)?;
    collect_scenarios(reader)
}

/// Load scenarios from any reader (e.g., string buffer, request body)
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R) -> CalculatorResult<Vec<Scenario>> {
    collect_scenarios(Reader::from_reader(reader))
}

fn collect_scenarios<R: std::io::Read>(mut reader: Reader<R>) -> CalculatorResult<Vec<Scenario>> {
    let mut scenarios = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.into_scenario());
    }

    log::debug!("Loaded {} scenarios", scenarios.len());
    Ok(scenarios)
}
