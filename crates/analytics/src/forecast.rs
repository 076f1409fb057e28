//! Demand forecaster: trailing-window average projected over the horizon.

use serde::{Deserialize, Serialize};

use smartstock_core::{DomainError, DomainResult, ProductSeries, TRAILING_WINDOW_DAYS, ValueObject};

use crate::stats;

/// Number of days the forecast projects demand over.
pub const FORECAST_HORIZON_DAYS: u32 = 30;

/// Projected demand for the next `FORECAST_HORIZON_DAYS` days.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub predicted_units: u64,

    /// Number of records the trailing average was computed over (1..=30).
    pub window_len: usize,
}

impl ValueObject for ForecastResult {}

impl ForecastResult {
    /// True when the history was shorter than a full trailing window.
    ///
    /// Short histories still produce a forecast from whatever days exist; this
    /// flag lets presentation warn that the estimate rests on less data.
    pub fn is_short_history(&self) -> bool {
        self.window_len < TRAILING_WINDOW_DAYS
    }
}

/// Forecast 30-day demand as `floor(mean(last <= 30 sales) * 30)`.
///
/// Fails with [`DomainError::InsufficientData`] when the series is empty.
pub fn forecast(series: &ProductSeries) -> DomainResult<ForecastResult> {
    let window = stats::as_f64(series.trailing_window().iter().map(|r| r.sales));
    let avg = stats::mean(&window)
        .ok_or_else(|| DomainError::insufficient_data(series.product().as_str()))?;

    Ok(ForecastResult {
        predicted_units: (avg * f64::from(FORECAST_HORIZON_DAYS)).floor() as u64,
        window_len: window.len(),
    })
}
