//! Scenario runner: validates inputs, computes savings and, when there is
//! something to project, the ROI projection.
//!
//! Conditions that make part of the result meaningless (no savings, zero
//! investment) are reported as [`CalculationWarning`]s on the report rather
//! than as errors.

use crate::config::CalculatorConfig;
use crate::error::CalculatorResult;
use crate::inputs::{BusinessCaseInputs, Scenario};
use crate::projection::{generate_projection, Projection};
use crate::savings::{compute_savings, SavingsResult};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-fatal conditions detected while evaluating a business case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalculationWarning {
    /// Total monthly savings are zero or negative: payback is infinite and
    /// no projection was generated
    ZeroOrNegativeSavings,
    /// Investment is zero: cumulative ROI percentage is undefined
    ZeroInvestmentDivision,
}

impl fmt::Display for CalculationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculationWarning::ZeroOrNegativeSavings => write!(
                f,
                "Total monthly savings are not positive; the investment is never recovered"
            ),
            CalculationWarning::ZeroInvestmentDivision => write!(
                f,
                "Upfront investment is zero; cumulative ROI percentage is undefined"
            ),
        }
    }
}

/// Everything produced by one evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessCaseReport {
    pub inputs: BusinessCaseInputs,
    pub savings: SavingsResult,

    /// Absent when savings are not positive
    pub projection: Option<Projection>,

    pub warnings: Vec<CalculationWarning>,
}

impl BusinessCaseReport {
    pub fn has_warning(&self, warning: CalculationWarning) -> bool {
        self.warnings.contains(&warning)
    }
}

/// Outcome of one named scenario in a batch
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioOutcome {
    pub name: String,
    pub result: Result<BusinessCaseReport, String>,
}

/// Evaluates business cases against a fixed configuration
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let report = runner.run(&BusinessCaseInputs::default())?;
/// println!("{}", report.savings.total_savings);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    config: CalculatorConfig,
}

impl ScenarioRunner {
    /// Create runner with the built-in configuration
    pub fn new() -> Self {
        Self {
            config: CalculatorConfig::default(),
        }
    }

    /// Create runner with an explicit configuration
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Evaluate a single business case
    pub fn run(&self, inputs: &BusinessCaseInputs) -> CalculatorResult<BusinessCaseReport> {
        inputs.validate()?;
        log::debug!("Evaluating business case: {:?}", inputs);

        let savings = compute_savings(inputs);
        let mut warnings = Vec::new();

        let projection = if savings.total_savings > 0.0 {
            let projection = generate_projection(
                savings.total_savings,
                inputs.upfront_investment,
                self.config.horizon_months,
            );
            if !projection.roi_defined {
                warnings.push(CalculationWarning::ZeroInvestmentDivision);
            }
            Some(projection)
        } else {
            warnings.push(CalculationWarning::ZeroOrNegativeSavings);
            None
        };

        for warning in &warnings {
            log::warn!("{}", warning);
        }

        log::info!(
            "Monthly savings {:.2}, payback {:.2} months",
            savings.total_savings,
            savings.payback_months
        );

        Ok(BusinessCaseReport {
            inputs: *inputs,
            savings,
            projection,
            warnings,
        })
    }

    /// Evaluate many scenarios in parallel. Output order matches input order;
    /// an invalid scenario is reported in its outcome and does not stop the
    /// others.
    pub fn run_batch(&self, scenarios: &[Scenario]) -> Vec<ScenarioOutcome> {
        scenarios
            .par_iter()
            .map(|scenario| ScenarioOutcome {
                name: scenario.name.clone(),
                result: self.run(&scenario.inputs).map_err(|e| e.to_string()),
            })
            .collect()
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}
