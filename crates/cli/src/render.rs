//! Text and JSON rendering of evaluation reports.

use std::fmt::Write;

use serde::Serialize;

use smartstock_analytics::{Advisories, EvaluationReport, FORECAST_HORIZON_DAYS};

/// JSON shape: the raw report plus classifications and ready-to-show messages.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    #[serde(flatten)]
    pub report: &'a EvaluationReport,
    pub advisories: Advisories,
    pub messages: Messages,
}

#[derive(Debug, Serialize)]
pub struct Messages {
    pub risk: String,
    pub capital: String,
    pub timing: String,
    pub volatility: String,
    pub summary: String,
}

impl<'a> JsonReport<'a> {
    pub fn new(report: &'a EvaluationReport) -> Self {
        let advisories = report.advisories();
        Self {
            report,
            messages: Messages {
                risk: format!(
                    "{}: {}",
                    advisories.risk_level.label(),
                    advisories.risk_level.guidance()
                ),
                capital: advisories.capital.to_string(),
                timing: advisories.timing.to_string(),
                volatility: advisories.volatility.to_string(),
                summary: advisories.summary.to_string(),
            },
            advisories,
        }
    }
}

/// Dashboard-style plain text for one product.
pub fn text(report: &EvaluationReport) -> String {
    let advisories = report.advisories();
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = write_text(&mut out, report, &advisories);
    out
}

fn write_text(
    out: &mut String,
    report: &EvaluationReport,
    advisories: &Advisories,
) -> std::fmt::Result {
    let risk = &report.risk;

    writeln!(out, "== {} ==", report.product)?;
    writeln!(
        out,
        "{FORECAST_HORIZON_DAYS}-Day Demand Forecast: {} units",
        report.forecast.predicted_units
    )?;
    if report.forecast.is_short_history() {
        writeln!(
            out,
            "  (based on only {} days of history)",
            report.forecast.window_len
        )?;
    }
    writeln!(out, "Current Stock: {} units", report.current_stock)?;
    writeln!(out, "Suggested Reorder: {} units", report.reorder.recommended_units)?;
    writeln!(out)?;

    writeln!(out, "Capital-Constrained Reorder Optimization")?;
    writeln!(
        out,
        "  Maximum affordable units: {} units",
        report.reorder.max_affordable_units
    )?;
    writeln!(out, "  {}", advisories.capital)?;
    writeln!(out)?;

    writeln!(
        out,
        "Stockout Risk Score: {}/100 ({})",
        risk.composite_score,
        advisories.risk_level.label()
    )?;
    writeln!(
        out,
        "  Pressure {:.2} | Volatility {:.2} | Lead Time {:.2}",
        risk.pressure_score, risk.volatility_score, risk.lead_time_score
    )?;
    writeln!(out, "  {}", advisories.risk_level.guidance())?;
    writeln!(out)?;

    writeln!(out, "Reorder Timing")?;
    writeln!(out, "  {}", advisories.timing)?;
    writeln!(out, "  {}", advisories.volatility)?;
    writeln!(out)?;

    writeln!(out, "Business Summary")?;
    writeln!(out, "  {}", advisories.summary)?;
    Ok(())
}
