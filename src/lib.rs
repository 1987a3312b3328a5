//! Business Case Calculator - savings, payback and ROI projection for fraud prevention
//!
//! This library provides:
//! - Monthly savings from reduced manual audits and fraud losses
//! - Payback period of the upfront investment
//! - Straight-line cumulative savings and ROI projection (36 months by default)
//! - Batch evaluation of named scenarios
//! - Text, CSV, chart-data and JSON presentation of results

pub mod config;
pub mod error;
pub mod inputs;
pub mod projection;
pub mod report;
pub mod savings;
pub mod scenario;

// Re-export commonly used types
pub use config::CalculatorConfig;
pub use error::{CalculatorError, CalculatorResult};
pub use inputs::{BusinessCaseInputs, Scenario};
pub use projection::{generate_projection, Projection, ProjectionRow, DEFAULT_HORIZON_MONTHS};
pub use savings::{compute_savings, SavingsResult};
pub use scenario::{BusinessCaseReport, CalculationWarning, ScenarioRunner};
