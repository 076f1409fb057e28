//! Timing estimator: runway until stockout compared with supplier lead time.

use serde::{Deserialize, Serialize};

use smartstock_core::{DomainError, DomainResult, ProductSeries, RiskInputs, ValueObject};

use crate::stats;

/// How long current stock lasts and whether a reorder is already late.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingEstimate {
    pub days_until_stockout: f64,

    /// `days_until_stockout <= supplier_lead_time_days`.
    pub is_urgent: bool,

    /// Whole days left before a reorder becomes urgent; `None` when already urgent.
    pub safe_window_days: Option<u64>,
}

impl ValueObject for TimingEstimate {}

impl TimingEstimate {
    /// Runway truncated to whole days, as shown in urgency messages.
    pub fn whole_days_until_stockout(&self) -> u64 {
        self.days_until_stockout.floor() as u64
    }
}

/// Estimate stockout timing from the full-history average daily sales.
///
/// Uses the mean over the entire series, not the trailing window, so a recent
/// spike shows up in the forecast before it shortens the runway.
pub fn estimate(series: &ProductSeries, inputs: &RiskInputs) -> DomainResult<TimingEstimate> {
    let sales = stats::as_f64(series.sales());
    let daily_avg = stats::mean(&sales)
        .ok_or_else(|| DomainError::insufficient_data(series.product().as_str()))?;

    Ok(from_daily_average(daily_avg, inputs))
}

pub(crate) fn from_daily_average(daily_avg: f64, inputs: &RiskInputs) -> TimingEstimate {
    let lead_time = inputs.supplier_lead_time_days;
    let days_until_stockout = inputs.current_stock as f64 / (daily_avg + 1.0);
    let is_urgent = days_until_stockout <= lead_time;

    let safe_window_days = if is_urgent {
        None
    } else {
        Some((days_until_stockout - lead_time).floor() as u64)
    };

    TimingEstimate {
        days_until_stockout,
        is_urgent,
        safe_window_days,
    }
}
