//! Presentation of business case results: text block, CSV export, chart
//! datasets and the JSON envelope shared by the CLI and the Lambda handler.

use crate::error::CalculatorResult;
use crate::projection::Projection;
use crate::scenario::{BusinessCaseReport, ScenarioOutcome};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::{self, Write as _};
use std::io::Write;

/// Format a number with comma thousands separators, e.g. `1234567.891` with
/// 2 decimals gives `1,234,567.89`.
pub fn format_thousands(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return format!("{}", value);
    }

    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(formatted.len() + int_part.len() / 3 + 1);
    // Sign only when the rounded value is not zero
    if value < 0.0 && formatted.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        grouped.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

/// Render the results block shown after a calculation
pub fn render_text(report: &BusinessCaseReport) -> String {
    let mut out = String::new();
    write_report(&mut out, report).expect("writing to a String cannot fail");
    out
}

fn write_report(out: &mut String, report: &BusinessCaseReport) -> fmt::Result {
    let s = &report.savings;

    writeln!(out, "Results")?;
    writeln!(out, "=======")?;
    writeln!(out, "Manual audits reduced to: {} audits/month", format_thousands(s.reduced_audits, 0))?;
    writeln!(out, "New total audit cost: ${} USD", format_thousands(s.reduced_audit_cost, 2))?;
    writeln!(out, "Fraud reduced to: {} cases/month", format_thousands(s.reduced_frauds, 0))?;
    writeln!(out, "New total fraud cost: ${} USD", format_thousands(s.reduced_fraud_cost, 2))?;
    writeln!(out, "Estimated total monthly savings: ${} USD", format_thousands(s.total_savings, 2))?;
    writeln!(out, "Estimated payback period: {:.2} months", s.payback_months)?;

    for warning in &report.warnings {
        writeln!(out, "Warning: {}", warning)?;
    }

    let Some(projection) = &report.projection else {
        return Ok(());
    };
    let summary = projection.summary();

    writeln!(out)?;
    writeln!(out, "{} ({} months)", projection_title(projection.horizon_months), summary.total_months)?;
    match summary.break_even_month {
        Some(month) => writeln!(out, "Break-even month: {}", month)?,
        None => writeln!(out, "Break-even month: not reached within {} months", projection.horizon_months)?,
    }
    writeln!(
        out,
        "Cumulative savings at month {}: ${} USD",
        summary.total_months,
        format_thousands(summary.final_cumulative_savings, 2)
    )?;
    if let Some(roi) = summary.final_roi_pct {
        writeln!(out, "Cumulative ROI at month {}: {}%", summary.total_months, format_thousands(roi, 2))?;
    }
    Ok(())
}

#[derive(Serialize)]
struct CsvProjectionRow {
    #[serde(rename = "Month")]
    month: u32,
    #[serde(rename = "CumulativeSavings")]
    cumulative_savings: f64,
    #[serde(rename = "CumulativeRoiPct")]
    cumulative_roi_pct: Option<f64>,
}

/// Write the projection as CSV. Undefined ROI values are left empty.
pub fn write_projection_csv<W: Write>(projection: &Projection, writer: W) -> CalculatorResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in &projection.rows {
        csv_writer.serialize(CsvProjectionRow {
            month: row.month,
            cumulative_savings: row.cumulative_savings,
            cumulative_roi_pct: row.cumulative_roi_pct,
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct CsvOutcomeRow<'a> {
    #[serde(rename = "Scenario")]
    scenario: &'a str,
    #[serde(rename = "TotalMonthlySavings")]
    total_savings: Option<f64>,
    #[serde(rename = "PaybackMonths")]
    payback_months: Option<f64>,
    #[serde(rename = "FinalRoiPct")]
    final_roi_pct: Option<f64>,
    #[serde(rename = "BreakEvenMonth")]
    break_even_month: Option<u32>,
    #[serde(rename = "Notes")]
    notes: String,
}

/// Write one summary row per batch scenario
pub fn write_outcomes_csv<W: Write>(outcomes: &[ScenarioOutcome], writer: W) -> CalculatorResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for outcome in outcomes {
        let row = match &outcome.result {
            Ok(report) => {
                let summary = report.projection.as_ref().map(|p| p.summary());
                CsvOutcomeRow {
                    scenario: &outcome.name,
                    total_savings: Some(report.savings.total_savings),
                    payback_months: report.savings.has_payback().then_some(report.savings.payback_months),
                    final_roi_pct: summary.and_then(|s| s.final_roi_pct),
                    break_even_month: summary.and_then(|s| s.break_even_month),
                    notes: report
                        .warnings
                        .iter()
                        .map(|w| format!("{:?}", w))
                        .collect::<Vec<_>>()
                        .join(";"),
                }
            }
            Err(message) => CsvOutcomeRow {
                scenario: &outcome.name,
                total_savings: None,
                payback_months: None,
                final_roi_pct: None,
                break_even_month: None,
                notes: message.clone(),
            },
        };
        csv_writer.serialize(row)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// A named series of (month, value) points
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub name: String,
    pub points: Vec<(u32, f64)>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<ChartSeries>,
}

/// Data for the two projection charts: savings with ROI, and the ROI curve
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub savings_and_roi: Chart,
    pub roi_curve: Chart,
}

const SAVINGS_SERIES: &str = "Cumulative Savings";
const ROI_SERIES: &str = "Cumulative ROI (%)";

fn projection_title(horizon_months: u32) -> String {
    if horizon_months % 12 == 0 {
        let years = horizon_months / 12;
        format!("ROI projection over {} year{}", years, if years == 1 { "" } else { "s" })
    } else {
        format!("ROI projection over {} months", horizon_months)
    }
}

/// Build chart datasets from a projection. Months with an undefined ROI are
/// left out of the ROI series.
pub fn chart_data(projection: &Projection) -> ChartData {
    let savings_points: Vec<(u32, f64)> = projection
        .rows
        .iter()
        .map(|r| (r.month, r.cumulative_savings))
        .collect();
    let roi_points: Vec<(u32, f64)> = projection
        .rows
        .iter()
        .filter_map(|r| r.cumulative_roi_pct.map(|roi| (r.month, roi)))
        .collect();

    ChartData {
        savings_and_roi: Chart {
            title: projection_title(projection.horizon_months),
            x_label: "Months".to_string(),
            y_label: "Value".to_string(),
            series: vec![
                ChartSeries { name: SAVINGS_SERIES.to_string(), points: savings_points },
                ChartSeries { name: ROI_SERIES.to_string(), points: roi_points.clone() },
            ],
        },
        roi_curve: Chart {
            title: "ROI amortization curve".to_string(),
            x_label: "Months".to_string(),
            y_label: ROI_SERIES.to_string(),
            series: vec![ChartSeries { name: ROI_SERIES.to_string(), points: roi_points }],
        },
    }
}

/// JSON document returned by `--json` and the Lambda handler
#[derive(Debug, Clone, Serialize)]
pub struct ReportEnvelope {
    pub generated_at: DateTime<Utc>,
    pub report: BusinessCaseReport,
    pub charts: Option<ChartData>,
    pub warnings: Vec<String>,
}

impl ReportEnvelope {
    pub fn new(report: BusinessCaseReport) -> Self {
        let charts = report.projection.as_ref().map(chart_data);
        let warnings = report.warnings.iter().map(|w| w.to_string()).collect();
        Self {
            generated_at: Utc::now(),
            report,
            charts,
            warnings,
        }
    }

    pub fn to_json(&self) -> CalculatorResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::{BusinessCaseInputs, Scenario};
    use crate::projection::generate_projection;
    use crate::scenario::ScenarioRunner;

    fn reference_report() -> BusinessCaseReport {
        let inputs = BusinessCaseInputs::from_percentages(20_000.0, 5.0, 100.0, 20_000.0, 50.0, 40.0, 50_000.0);
        ScenarioRunner::new().run(&inputs).expect("valid inputs")
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0.0, 2), "0.00");
        assert_eq!(format_thousands(999.0, 0), "999");
        assert_eq!(format_thousands(10_000.0, 0), "10,000");
        assert_eq!(format_thousands(1_234_567.891, 2), "1,234,567.89");
        assert_eq!(format_thousands(-58_000.0, 2), "-58,000.00");
        assert_eq!(format_thousands(-0.001, 2), "0.00");
        assert_eq!(format_thousands(f64::INFINITY, 2), "inf");
    }

    #[test]
    fn test_render_text_reference_case() {
        let text = render_text(&reference_report());
        assert!(text.contains("Manual audits reduced to: 10,000 audits/month"));
        assert!(text.contains("New total audit cost: $50,000.00 USD"));
        assert!(text.contains("Fraud reduced to: 60 cases/month"));
        assert!(text.contains("New total fraud cost: $12,000.00 USD"));
        assert!(text.contains("Estimated total monthly savings: $58,000.00 USD"));
        assert!(text.contains("Estimated payback period: 0.86 months"));
        assert!(text.contains("ROI projection over 3 years (36 months)"));
        assert!(text.contains("Break-even month: 1"));
        assert!(text.contains("Cumulative ROI at month 36: 4,076.00%"));
    }

    #[test]
    fn test_render_text_no_savings() {
        let inputs = BusinessCaseInputs {
            audit_reduction_ratio: 0.0,
            fraud_reduction_ratio: 0.0,
            ..Default::default()
        };
        let report = ScenarioRunner::new().run(&inputs).unwrap();
        let text = render_text(&report);
        assert!(text.contains("Estimated payback period: inf months"));
        assert!(text.contains("Warning: Total monthly savings are not positive"));
        assert!(!text.contains("Break-even"));
    }

    #[test]
    fn test_projection_csv() {
        let projection = generate_projection(58_000.0, 50_000.0, 2);
        let mut buf = Vec::new();
        write_projection_csv(&projection, &mut buf).unwrap();
        let csv = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Month,CumulativeSavings,CumulativeRoiPct");
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("1,58000.0,"));
        assert!(lines[2].starts_with("2,116000.0,"));
    }

    #[test]
    fn test_projection_csv_undefined_roi_is_empty() {
        let projection = generate_projection(1_000.0, 0.0, 1);
        let mut buf = Vec::new();
        write_projection_csv(&projection, &mut buf).unwrap();
        let csv = String::from_utf8(buf).unwrap();
        assert_eq!(csv.lines().nth(1), Some("1,1000.0,"));
    }

    #[test]
    fn test_outcomes_csv() {
        let scenarios = vec![
            Scenario {
                name: "base".to_string(),
                inputs: BusinessCaseInputs::from_percentages(20_000.0, 5.0, 100.0, 20_000.0, 50.0, 40.0, 116_000.0),
            },
            Scenario {
                name: "no_reduction".to_string(),
                inputs: BusinessCaseInputs::from_percentages(20_000.0, 5.0, 100.0, 20_000.0, 0.0, 0.0, 50_000.0),
            },
            Scenario {
                name: "bad".to_string(),
                inputs: BusinessCaseInputs::from_percentages(20_000.0, -5.0, 100.0, 20_000.0, 50.0, 40.0, 50_000.0),
            },
        ];
        let outcomes = ScenarioRunner::new().run_batch(&scenarios);

        let mut buf = Vec::new();
        write_outcomes_csv(&outcomes, &mut buf).unwrap();
        let csv = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "Scenario,TotalMonthlySavings,PaybackMonths,FinalRoiPct,BreakEvenMonth,Notes"
        );

        let base: Vec<&str> = lines[1].split(',').collect();
        assert_eq!(base[0], "base");
        assert!(base[1].starts_with("58000"));
        assert!(base[2].starts_with('2'));
        assert_eq!(base[4], "2");
        assert_eq!(base[5], "");

        // Infinite payback and missing projection leave cells empty
        assert_eq!(lines[2], "no_reduction,0.0,,,,ZeroOrNegativeSavings");

        let bad: Vec<&str> = lines[3].splitn(6, ',').collect();
        assert_eq!(bad[0], "bad");
        assert_eq!(&bad[1..5], ["", "", "", ""]);
        assert!(bad[5].contains("audit_unit_cost"));
    }

    #[test]
    fn test_chart_data() {
        let charts = chart_data(&generate_projection(58_000.0, 50_000.0, 36));
        assert_eq!(charts.savings_and_roi.title, "ROI projection over 3 years");
        assert_eq!(charts.savings_and_roi.series.len(), 2);
        assert_eq!(charts.savings_and_roi.series[0].name, "Cumulative Savings");
        assert_eq!(charts.savings_and_roi.series[0].points.len(), 36);
        assert_eq!(charts.roi_curve.series.len(), 1);
        assert_eq!(charts.roi_curve.series[0].points.len(), 36);

        let zero_investment = chart_data(&generate_projection(58_000.0, 0.0, 36));
        assert!(zero_investment.roi_curve.series[0].points.is_empty());
        assert_eq!(zero_investment.savings_and_roi.series[0].points.len(), 36);
    }

    #[test]
    fn test_envelope_json() {
        let envelope = ReportEnvelope::new(reference_report());
        let json = envelope.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["report"]["savings"]["total_savings"].as_f64().map(|v| v.round()), Some(58_000.0));
        assert_eq!(value["report"]["projection"]["rows"].as_array().map(|a| a.len()), Some(36));
        assert!(value["charts"]["roi_curve"].is_object());
        assert!(value["generated_at"].is_string());
    }

    #[test]
    fn test_envelope_infinite_payback_is_null() {
        let inputs = BusinessCaseInputs {
            audit_reduction_ratio: 0.0,
            fraud_reduction_ratio: 0.0,
            ..Default::default()
        };
        let envelope = ReportEnvelope::new(ScenarioRunner::new().run(&inputs).unwrap());
        let value: serde_json::Value = serde_json::from_str(&envelope.to_json().unwrap()).unwrap();
        assert!(value["report"]["savings"]["payback_months"].is_null());
        assert!(value["charts"].is_null());
        assert_eq!(value["warnings"].as_array().map(|a| a.len()), Some(1));
    }
}
