//! Business case input values as collected by the input form

use crate::error::{CalculatorError, CalculatorResult};
use serde::{Deserialize, Serialize};

/// Operational inputs for one business case evaluation.
///
/// Reduction ratios are fractions in [0, 1]. Use
/// [`BusinessCaseInputs::from_percentages`] when the source collects 0-100
/// percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BusinessCaseInputs {
    /// Manual audits performed per month
    pub monthly_audits: f64,

    /// Cost per manual audit
    pub audit_unit_cost: f64,

    /// Detected fraud cases per month
    pub monthly_frauds: f64,

    /// Total monetary cost of fraud per month
    pub monthly_fraud_cost: f64,

    /// Expected audit-volume reduction (0 = none, 1 = all audits removed)
    pub audit_reduction_ratio: f64,

    /// Expected fraud reduction (0 = none, 1 = all fraud removed)
    pub fraud_reduction_ratio: f64,

    /// One-time implementation cost
    pub upfront_investment: f64,
}

impl Default for BusinessCaseInputs {
    fn default() -> Self {
        Self {
            monthly_audits: 20_000.0,
            audit_unit_cost: 250.0,
            monthly_frauds: 100.0,
            monthly_fraud_cost: 20_000.0,
            audit_reduction_ratio: 0.50,
            fraud_reduction_ratio: 0.40,
            upfront_investment: 500_000.0,
        }
    }
}

impl BusinessCaseInputs {
    /// Build inputs from reduction percentages expressed on a 0-100 scale.
    ///
    /// No validation happens here; out-of-range percentages show up as
    /// out-of-range ratios in [`BusinessCaseInputs::validate`].
    pub fn from_percentages(
        monthly_audits: f64,
        audit_unit_cost: f64,
        monthly_frauds: f64,
        monthly_fraud_cost: f64,
        audit_reduction_pct: f64,
        fraud_reduction_pct: f64,
        upfront_investment: f64,
    ) -> Self {
        Self {
            monthly_audits,
            audit_unit_cost,
            monthly_frauds,
            monthly_fraud_cost,
            audit_reduction_ratio: audit_reduction_pct / 100.0,
            fraud_reduction_ratio: fraud_reduction_pct / 100.0,
            upfront_investment,
        }
    }

    /// Audit reduction on a 0-100 scale
    pub fn audit_reduction_pct(&self) -> f64 {
        self.audit_reduction_ratio * 100.0
    }

    /// Fraud reduction on a 0-100 scale
    pub fn fraud_reduction_pct(&self) -> f64 {
        self.fraud_reduction_ratio * 100.0
    }

    /// Reject negative or non-finite amounts and ratios outside [0, 1].
    ///
    /// Reports the first offending field in declaration order.
    pub fn validate(&self) -> CalculatorResult<()> {
        let amounts = [
            ("monthly_audits", self.monthly_audits),
            ("audit_unit_cost", self.audit_unit_cost),
            ("monthly_frauds", self.monthly_frauds),
            ("monthly_fraud_cost", self.monthly_fraud_cost),
        ];
        for (field, value) in amounts {
            check_non_negative(field, value)?;
        }

        for (field, value) in [
            ("audit_reduction_ratio", self.audit_reduction_ratio),
            ("fraud_reduction_ratio", self.fraud_reduction_ratio),
        ] {
            check_non_negative(field, value)?;
            if value > 1.0 {
                return Err(CalculatorError::InvalidInput {
                    field,
                    value,
                    reason: "reduction ratio must not exceed 1 (100%)",
                });
            }
        }

        check_non_negative("upfront_investment", self.upfront_investment)
    }
}

fn check_non_negative(field: &'static str, value: f64) -> CalculatorResult<()> {
    if !value.is_finite() {
        return Err(CalculatorError::InvalidInput {
            field,
            value,
            reason: "must be a finite number",
        });
    }
    if value < 0.0 {
        return Err(CalculatorError::InvalidInput {
            field,
            value,
            reason: "must not be negative",
        });
    }
    Ok(())
}
