//! Monthly savings and payback calculation

use crate::inputs::BusinessCaseInputs;
use serde::{Deserialize, Serialize};

/// Derived monthly cost and savings figures for one set of inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavingsResult {
    // Audits
    pub current_audit_cost: f64,
    pub reduced_audits: f64,
    pub reduced_audit_cost: f64,

    // Fraud
    pub reduced_frauds: f64,
    pub reduced_fraud_cost: f64,

    // Savings (per month)
    pub audit_savings: f64,
    pub fraud_savings: f64,
    pub total_savings: f64,

    /// Months to recover the investment. `f64::INFINITY` when there are no
    /// savings; serialized as `null`.
    #[serde(with = "payback_serde")]
    pub payback_months: f64,
}

/// Maps the infinite payback to `null` and back
mod payback_serde {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_some(value)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}

impl SavingsResult {
    /// Whether the investment is ever recovered
    pub fn has_payback(&self) -> bool {
        self.payback_months.is_finite()
    }
}

/// Compute monthly savings and payback period.
///
/// Inputs are expected to have passed [`BusinessCaseInputs::validate`]; the
/// function itself never fails. Zero or negative total savings yield an
/// infinite payback rather than an error.
pub fn compute_savings(inputs: &BusinessCaseInputs) -> SavingsResult {
    let current_audit_cost = inputs.monthly_audits * inputs.audit_unit_cost;
    let reduced_audits = inputs.monthly_audits * (1.0 - inputs.audit_reduction_ratio);
    let reduced_audit_cost = reduced_audits * inputs.audit_unit_cost;
    let reduced_frauds = inputs.monthly_frauds * (1.0 - inputs.fraud_reduction_ratio);
    let reduced_fraud_cost = inputs.monthly_fraud_cost * (1.0 - inputs.fraud_reduction_ratio);

    let audit_savings = current_audit_cost - reduced_audit_cost;
    let fraud_savings = inputs.monthly_fraud_cost - reduced_fraud_cost;
    let total_savings = audit_savings + fraud_savings;

    let payback_months = if total_savings > 0.0 {
        inputs.upfront_investment / total_savings
    } else {
        f64::INFINITY
    };

    SavingsResult {
        current_audit_cost,
        reduced_audits,
        reduced_audit_cost,
        reduced_frauds,
        reduced_fraud_cost,
        audit_savings,
        fraud_savings,
        total_savings,
        payback_months,
    }
}
