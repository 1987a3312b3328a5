//! Run configuration: projection horizon and default form inputs
//!
//! Every value can be overridden through environment variables:
//!   BUSINESS_CASE_HORIZON_MONTHS, BUSINESS_CASE_MONTHLY_AUDITS,
//!   BUSINESS_CASE_AUDIT_UNIT_COST, BUSINESS_CASE_MONTHLY_FRAUDS,
//!   BUSINESS_CASE_MONTHLY_FRAUD_COST, BUSINESS_CASE_AUDIT_REDUCTION_PCT,
//!   BUSINESS_CASE_FRAUD_REDUCTION_PCT, BUSINESS_CASE_UPFRONT_INVESTMENT
//! Values that fail to parse fall back to the built-in default.

use crate::error::{CalculatorError, CalculatorResult};
use crate::inputs::BusinessCaseInputs;
use crate::projection::DEFAULT_HORIZON_MONTHS;
use std::env;
use std::str::FromStr;

/// Configuration for a calculator run
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorConfig {
    /// Number of months to project
    pub horizon_months: u32,

    /// Inputs used when the caller does not supply a value
    pub default_inputs: BusinessCaseInputs,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            horizon_months: DEFAULT_HORIZON_MONTHS,
            default_inputs: BusinessCaseInputs::default(),
        }
    }
}

impl CalculatorConfig {
    /// Built-in defaults with environment overrides applied
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`CalculatorConfig::from_env`] but reads from an arbitrary source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = Self::default();
        let d = base.default_inputs;

        let audit_reduction_pct = parse_or(&lookup, "BUSINESS_CASE_AUDIT_REDUCTION_PCT", d.audit_reduction_pct());
        let fraud_reduction_pct = parse_or(&lookup, "BUSINESS_CASE_FRAUD_REDUCTION_PCT", d.fraud_reduction_pct());

        Self {
            horizon_months: parse_or(&lookup, "BUSINESS_CASE_HORIZON_MONTHS", base.horizon_months),
            default_inputs: BusinessCaseInputs::from_percentages(
                parse_or(&lookup, "BUSINESS_CASE_MONTHLY_AUDITS", d.monthly_audits),
                parse_or(&lookup, "BUSINESS_CASE_AUDIT_UNIT_COST", d.audit_unit_cost),
                parse_or(&lookup, "BUSINESS_CASE_MONTHLY_FRAUDS", d.monthly_frauds),
                parse_or(&lookup, "BUSINESS_CASE_MONTHLY_FRAUD_COST", d.monthly_fraud_cost),
                audit_reduction_pct,
                fraud_reduction_pct,
                parse_or(&lookup, "BUSINESS_CASE_UPFRONT_INVESTMENT", d.upfront_investment),
            ),
        }
    }

    /// Horizon must cover at least one month. Default inputs are checked
    /// only when a run actually uses them.
    pub fn validate(&self) -> CalculatorResult<()> {
        if self.horizon_months == 0 {
            return Err(CalculatorError::InvalidConfig(
                "horizon_months must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                log::warn!("Ignoring unparseable {}={:?}, using default", key, raw);
                default
            }
        },
        None => default,
    }
}
