//! Projection output structures

use serde::{Deserialize, Serialize};

/// A single month of the cumulative savings projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRow {
    /// Projection month (1-indexed)
    pub month: u32,

    pub cumulative_savings: f64,

    /// `None` when the ROI is undefined (zero investment)
    pub cumulative_roi_pct: Option<f64>,
}

/// Complete projection over the horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub horizon_months: u32,

    /// Monthly savings the projection was built from
    pub monthly_savings: f64,

    /// Investment held constant across every month
    pub upfront_investment: f64,

    /// False when the investment is zero and no row carries an ROI
    pub roi_defined: bool,

    pub rows: Vec<ProjectionRow>,
}

impl Projection {
    /// First month whose cumulative savings cover the investment
    pub fn break_even_month(&self) -> Option<u32> {
        self.rows
            .iter()
            .find(|row| row.cumulative_savings >= self.upfront_investment)
            .map(|row| row.month)
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let last = self.rows.last();

        ProjectionSummary {
            total_months: self.rows.len() as u32,
            final_cumulative_savings: last.map(|r| r.cumulative_savings).unwrap_or(0.0),
            final_roi_pct: last.and_then(|r| r.cumulative_roi_pct),
            break_even_month: self.break_even_month(),
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub total_months: u32,
    pub final_cumulative_savings: f64,
    pub final_roi_pct: Option<f64>,
    pub break_even_month: Option<u32>,
}
