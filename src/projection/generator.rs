//! Straight-line cumulative savings and ROI projection

use super::rows::{Projection, ProjectionRow};

/// Projection length used by the calculator (three years)
pub const DEFAULT_HORIZON_MONTHS: u32 = 36;

/// Expand a monthly savings figure into a cumulative projection.
///
/// Savings accumulate linearly and the investment is not discounted or
/// amortized. With a zero investment the ROI is undefined: every row gets
/// `cumulative_roi_pct = None` and `roi_defined` is false.
pub fn generate_projection(
    total_savings: f64,
    upfront_investment: f64,
    horizon_months: u32,
) -> Projection {
    let roi_defined = upfront_investment != 0.0;

    let rows = (1..=horizon_months)
        .map(|month| {
            let cumulative_savings = total_savings * month as f64;
            let cumulative_roi_pct = roi_defined
                .then(|| (cumulative_savings - upfront_investment) / upfront_investment * 100.0);

            ProjectionRow {
                month,
                cumulative_savings,
                cumulative_roi_pct,
            }
        })
        .collect();

    Projection {
        horizon_months,
        monthly_savings: total_savings,
        upfront_investment,
        roi_defined,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_projection() {
        let projection = generate_projection(58_000.0, 50_000.0, DEFAULT_HORIZON_MONTHS);
        assert_eq!(projection.rows.len(), 36);
        assert!(projection.roi_defined);

        let first = &projection.rows[0];
        assert_eq!(first.month, 1);
        assert_relative_eq!(first.cumulative_savings, 58_000.0);
        assert_relative_eq!(first.cumulative_roi_pct.unwrap(), 16.0, epsilon = 1e-9);

        let last = &projection.rows[35];
        assert_eq!(last.month, 36);
        assert_relative_eq!(last.cumulative_savings, 2_088_000.0);
        assert_relative_eq!(last.cumulative_roi_pct.unwrap(), 4076.0, epsilon = 1e-9);
    }

    #[test]
    fn test_length_and_month_sequence() {
        for horizon in [1, 12, 36, 60] {
            let projection = generate_projection(1_000.0, 5_000.0, horizon);
            assert_eq!(projection.rows.len(), horizon as usize);
            for (i, row) in projection.rows.iter().enumerate() {
                assert_eq!(row.month, i as u32 + 1);
            }
        }
    }

    #[test]
    fn test_cumulative_savings_linear() {
        let savings = 1_234.56;
        let projection = generate_projection(savings, 10_000.0, DEFAULT_HORIZON_MONTHS);
        for row in &projection.rows {
            assert_eq!(row.cumulative_savings, savings * row.month as f64);
        }
    }

    #[test]
    fn test_zero_investment_has_no_roi() {
        let projection = generate_projection(58_000.0, 0.0, DEFAULT_HORIZON_MONTHS);
        assert!(!projection.roi_defined);
        assert_eq!(projection.rows.len(), 36);
        assert!(projection.rows.iter().all(|r| r.cumulative_roi_pct.is_none()));
        assert_relative_eq!(projection.rows[35].cumulative_savings, 2_088_000.0);
    }

    #[test]
    fn test_zero_horizon_is_empty() {
        let projection = generate_projection(58_000.0, 50_000.0, 0);
        assert!(projection.rows.is_empty());
        assert_eq!(projection.summary().total_months, 0);
        assert_eq!(projection.summary().final_roi_pct, None);
    }

    #[test]
    fn test_break_even_month() {
        let projection = generate_projection(100_000.0, 250_000.0, DEFAULT_HORIZON_MONTHS);
        assert_eq!(projection.break_even_month(), Some(3));

        let summary = projection.summary();
        assert_eq!(summary.total_months, 36);
        assert_relative_eq!(summary.final_cumulative_savings, 3_600_000.0);
        assert_relative_eq!(summary.final_roi_pct.unwrap(), 1340.0, epsilon = 1e-9);

        let slow = generate_projection(1_000.0, 500_000.0, DEFAULT_HORIZON_MONTHS);
        assert_eq!(slow.break_even_month(), None);
    }
}
